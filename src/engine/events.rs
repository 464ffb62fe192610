use crate::game::game_state::GameState;
use serde::{Deserialize, Serialize};

/// Change notifications sent to listeners after the engine mutates its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged { player: usize, score: u32 },
    TurnAdvanced { current_player: usize },
    GameStateChanged(GameState),
    /// Raised when a submitted move is rejected, cleared by the next accepted one.
    InvalidMoveFlagged(bool),
}

pub trait GameListener: Send {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
