use crate::game::effect::Effect;
use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};

/// One square of the board: a fixed effect and, once claimed, a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Field {
    effect: Effect,
    occupant: Option<Tile>,
}

impl Field {
    pub fn new(effect: Effect) -> Self {
        Field {
            effect,
            occupant: None,
        }
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn occupant(&self) -> Option<Tile> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Claims the field. Returns the tile back if the field is already taken.
    pub(crate) fn set_occupant(&mut self, tile: Tile) -> std::result::Result<(), Tile> {
        match self.occupant {
            Some(_) => Err(tile),
            None => {
                self.occupant = Some(tile);
                Ok(())
            }
        }
    }
}
