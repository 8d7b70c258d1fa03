//! Headless demo: run the turret-versus-invaders wave for a few seconds and
//! log what happens.
//!
//! Set `RUST_LOG=info` (or `debug` for per-shot output and the final
//! snapshot JSON) to see the session.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use barrage_app::game_loop::spawn_game_loop;
use barrage_app::state::GameLoopCommand;
use barrage_core::commands::PlayerCommand;
use barrage_core::enums::MoveDir;
use barrage_sim::engine::SimConfig;

fn main() {
    env_logger::init();

    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_game_loop(SimConfig::default(), Arc::clone(&latest_snapshot));

    let send = |cmd| {
        cmd_tx
            .send(GameLoopCommand::Player(cmd))
            .expect("game loop alive");
    };

    // Start the wave and hold the fire key.
    send(PlayerCommand::StartGame);
    send(PlayerCommand::SetShooting { on: true });

    // Sweep the turret back and forth under fire for a few seconds.
    for dir in [MoveDir::Left, MoveDir::Right, MoveDir::Left, MoveDir::Right] {
        send(PlayerCommand::MoveTurret { dir });
        std::thread::sleep(Duration::from_millis(1500));
    }
    send(PlayerCommand::StopTurret);
    send(PlayerCommand::SetShooting { on: false });

    if let Some(snapshot) = latest_snapshot.lock().expect("snapshot lock").clone() {
        log::info!(
            "session over: score {}, {} shots, {} invaders down",
            snapshot.score.score,
            snapshot.score.shots_fired,
            snapshot.score.invaders_destroyed
        );
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => log::debug!("final snapshot:\n{json}"),
                Err(err) => log::warn!("could not serialize snapshot: {err}"),
            }
        }
    }

    cmd_tx.send(GameLoopCommand::Shutdown).ok();
}
