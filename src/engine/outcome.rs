use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};

/// Result of submitting a candidate board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// No tile was placed; counts towards the game ending by skipping.
    Passed,
    Scored { word: String, points: u32 },
    /// The move was refused and nothing changed. The same player may try again.
    Rejected(MoveRejection),
}

impl TurnOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, TurnOutcome::Rejected(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum MoveRejection {
    #[error("the first word has to cover the center field")]
    CenterNotCovered,

    #[error("\"{0}\" is not in the word list")]
    InvalidWord(String),

    #[error("the placed tiles do not form a word")]
    NoWordFormed,

    #[error("all placed tiles have to be part of a single word")]
    ScatteredTiles,

    #[error("the word has to build on tiles already on the board")]
    NotConnected,

    #[error("tile {0} is not in the current player's hand")]
    TileNotInHand(Tile),

    #[error("field ({row}, {col}) was already claimed by a committed tile")]
    CommittedFieldChanged { row: usize, col: usize },
}
