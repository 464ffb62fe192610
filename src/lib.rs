//! # Scrabble Engine
//!
//! Rules engine for a turn-based word placement board game.
//!
//! ## Features
//!
//! - **Board**: 15x15 grid with the standard letter and word multipliers
//! - **Tile Bag**: per-language tile distributions with random draws
//! - **Dictionary**: word list lookup with blank tile (joker) substitution
//! - **Scoring**: letter and word multipliers
//! - **Game Engine**: turn flow, passing, hand swapping, end of game and winner
//!
//! ## Usage
//!
//! ```rust
//! use scrabble_engine::{
//!     dictionary::WordValidator,
//!     engine::{GameEngine, TurnOutcome},
//!     game::{Language, TileBag},
//! };
//!
//! let validator = WordValidator::from_words(["cat", "dog"], Language::En);
//! let bag = TileBag::seeded(Language::En, 42);
//! let mut engine = GameEngine::new(validator, bag, &["Alice", "Bobby"]).unwrap();
//!
//! // Submitting the unchanged board passes the turn.
//! let outcome = engine.finish_turn(&engine.candidate_board()).unwrap();
//! assert_eq!(outcome, TurnOutcome::Passed);
//! assert_eq!(engine.current_player().name(), "Bobby");
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Engine configuration
pub mod config;

/// Word lists and word validation
pub mod dictionary;

/// Turn flow, events and snapshots
pub mod engine;

/// Tiles, bag, board and players
pub mod game;

/// Logger setup for binaries
pub mod logging;

/// Word scoring
pub mod scoring;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use config::EngineConfig;
pub use dictionary::{Dictionary, WordValidator};
pub use engine::{GameEngine, GameEvent, GameListener, GameSnapshot, MoveRejection, TurnOutcome};
pub use game::*;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Scrabble engine
#[derive(Debug, thiserror::Error)]
pub enum ScrabbleError {
    #[error("Invalid coordinates: ({row}, {col})")]
    OutOfRange { row: usize, col: usize },

    #[error("Field ({row}, {col}) is already occupied")]
    FieldOccupied { row: usize, col: usize },

    #[error("Amount has to be greater than 0, got {0}")]
    InvalidDrawCount(usize),

    #[error("Player name {0:?} has an invalid format, it must be 4 to 15 letters, digits or underscores starting with a letter")]
    InvalidPlayerName(String),

    #[error("Invalid number of players: {0}, a game needs 2 to 4")]
    InvalidPlayerCount(usize),

    #[error("Invalid hand size: {0}, a hand holds 1 to 7 tiles")]
    InvalidHandSize(usize),

    #[error("Tile {0} is not in the player's hand")]
    TileNotInHand(Tile),

    #[error("No word list available for the language {0}")]
    MissingWordList(Language),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("The game is {0}, no further moves are accepted")]
    GameFinished(GameState),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScrabbleError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
