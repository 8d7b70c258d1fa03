//! Game loop thread — runs the engine at a nominal 60 Hz and publishes
//! snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in shared state for synchronous polling. Each frame is driven
//! with the measured wall time since the previous one, so the simulation
//! stays wall-clock accurate even when the loop falls behind.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use barrage_core::constants::TICK_RATE;
use barrage_core::events::AudioEvent;
use barrage_core::state::GameSnapshot;
use barrage_core::types::FrameTime;
use barrage_sim::engine::{GameEngine, SimConfig};

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("barrage-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    let start = Instant::now();
    let mut last_frame = start;
    let mut next_frame_time = start;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame with the measured clock
        let now = Instant::now();
        let frame = FrameTime::new(
            start.elapsed().as_secs_f64() * 1000.0,
            (now - last_frame).as_secs_f32(),
        );
        last_frame = now;
        let snapshot = engine.tick(frame);

        // 3. A real frontend would play these; the headless host logs them
        for event in &snapshot.audio_events {
            match event {
                AudioEvent::ShotFired { emitter } => log::debug!("shot fired by {emitter:?}"),
                AudioEvent::Impact { x, y } => {
                    log::info!("impact at ({x:.0}, {y:.0}), score {}", snapshot.score.score);
                }
            }
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barrage_core::commands::PlayerCommand;
    use barrage_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::SetShooting {
            on: true,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartGame)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_publishes_snapshots_until_shutdown() {
        let slot = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(SimConfig::default(), Arc::clone(&slot));
        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();

        let mut phase = None;
        for _ in 0..50 {
            std::thread::sleep(Duration::from_millis(10));
            if let Some(snap) = slot.lock().unwrap().as_ref() {
                phase = Some(snap.phase);
                if snap.time.tick > 0 {
                    break;
                }
            }
        }
        assert_eq!(phase, Some(GamePhase::Active));

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
