pub mod bag;
pub mod board;
pub mod create_bag;
pub mod effect;
pub mod field;
pub mod game_state;
pub mod language;
pub mod player;
pub mod tile;

pub use bag::{RandomSource, TileBag};
pub use board::{Board, BOARD_SIZE, CENTER};
pub use effect::Effect;
pub use field::Field;
pub use game_state::GameState;
pub use language::Language;
pub use player::Player;
pub use tile::{Tile, JOKER_LETTER};
