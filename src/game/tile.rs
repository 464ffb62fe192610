use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter carried by the blank tile.
pub const JOKER_LETTER: char = ' ';

/// A letter tile. Two tiles with the same letter and value are interchangeable.
#[derive(Debug, Clone, PartialEq, Copy, Hash, Eq, Serialize, Deserialize)]
pub struct Tile {
    letter: char,
    value: u32,
}

impl Tile {
    pub const fn new(letter: char, value: u32) -> Self {
        Tile { letter, value }
    }

    /// The blank tile, worth nothing and standing in for any letter.
    pub const fn joker() -> Self {
        Tile::new(JOKER_LETTER, 0)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_joker(&self) -> bool {
        self.letter == JOKER_LETTER
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            write!(f, "[_:{}]", self.value)
        } else {
            write!(f, "[{}:{}]", self.letter, self.value)
        }
    }
}
