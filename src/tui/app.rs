//! Application state and logic.

use super::input::Command;
use strictly_tictactoe::{Activation, GameConfig, GameSession, Position};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &GameConfig) -> Self {
        let session = GameSession::new(config);
        let status_message = session.status_message();
        Self {
            session,
            cursor: Position::Center,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a command from the keyboard.
    pub fn handle(&mut self, command: Command) {
        debug!(?command, "Handling command");

        match command {
            Command::MoveCursor(pos) => self.cursor = pos,
            Command::Activate(pos) => self.activate(pos),
            Command::Restart => self.restart(),
            Command::Quit => self.should_quit = true,
            Command::Ignore => {}
        }
    }

    fn activate(&mut self, pos: Position) {
        self.cursor = pos;
        match self.session.on_cell_activated(pos.row(), pos.col()) {
            Ok(Activation::Reset) => {
                self.status_message = format!("New game. {}", self.session.status_message());
            }
            Ok(Activation::Played { outcome, .. }) if outcome.is_terminal() => {
                self.status_message = format!("{}! Press any cell to play again.", outcome);
            }
            Ok(Activation::Played { reply, .. }) => {
                self.status_message = match reply {
                    Some(reply) => format!(
                        "Opponent played {}. {}",
                        reply.label(),
                        self.session.status_message()
                    ),
                    None => self.session.status_message(),
                };
            }
            Err(e) => {
                self.status_message = format!("Move error: {}", e);
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.session.reset();
        self.status_message = format!("Game restarted. {}", self.session.status_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Player;

    #[test]
    fn test_occupied_cell_reports_error() {
        let mut app = App::new(&GameConfig::default());
        app.handle(Command::Activate(Position::Center));
        app.handle(Command::Activate(Position::Center));
        assert!(app.status_message().starts_with("Move error"));
        assert_eq!(app.session().history().len(), 2);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut app = App::new(&GameConfig::default());
        app.handle(Command::Activate(Position::TopLeft));
        app.handle(Command::Restart);
        assert!(app.session().history().is_empty());
        assert_eq!(app.session().to_move(), Player::One);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&GameConfig::default());
        assert!(!app.should_quit());
        app.handle(Command::Quit);
        assert!(app.should_quit());
    }
}
