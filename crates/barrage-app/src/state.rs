//! Shared state between the host thread and the game loop thread.

use barrage_core::commands::PlayerCommand;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wrapping() {
        let cmd = GameLoopCommand::Player(PlayerCommand::StartGame);
        assert!(matches!(
            cmd,
            GameLoopCommand::Player(PlayerCommand::StartGame)
        ));
    }
}
