use serde::{Deserialize, Serialize};
use std::fmt;

/// Life cycle of a game. Once `Over` or `Aborted`, it never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Running,
    /// Every player passed twice in a row.
    Over,
    /// Closed from the outside before it ended.
    Aborted,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Running)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Running => write!(f, "running"),
            GameState::Over => write!(f, "over"),
            GameState::Aborted => write!(f, "aborted"),
        }
    }
}
