use crate::game::board::Board;
use crate::game::game_state::GameState;
use crate::game::language::Language;
use crate::game::player::Player;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Read-only copy of a game for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub language: Language,
    pub board: Board,
    pub players: Vec<Player>,
    pub current_player: usize,
    pub state: GameState,
    pub skipped_turns: usize,
    pub remaining_tiles: usize,
    pub invalid_move: bool,
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
