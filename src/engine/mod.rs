pub mod events;
pub mod game_engine;
pub mod outcome;
pub mod snapshot;
pub mod word_extraction;

pub use events::{GameEvent, GameListener};
pub use game_engine::GameEngine;
pub use outcome::{MoveRejection, TurnOutcome};
pub use snapshot::GameSnapshot;
