use crate::game::tile::Tile;
use crate::{Result, ScrabbleError};
use serde::{Deserialize, Serialize};

pub const MIN_NAME_LENGTH: usize = 4;
pub const MAX_NAME_LENGTH: usize = 15;

/// A participant: name, hand of tiles and accumulated score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Tile>,
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand.
    ///
    /// Names are 4 to 15 characters long, start with an ASCII letter and continue with
    /// ASCII letters, digits or underscores.
    pub fn new(name: &str) -> Result<Self> {
        if !is_valid_name(name) {
            return Err(ScrabbleError::InvalidPlayerName(name.to_string()));
        }
        Ok(Player {
            name: name.to_string(),
            hand: Vec::new(),
            score: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    pub fn add_tile(&mut self, tile: Tile) {
        log::debug!("Player {} added tile {} to their hand", self.name, tile);
        self.hand.push(tile);
    }

    /// Removes one copy of `tile` from the hand.
    pub fn drop_tile(&mut self, tile: &Tile) -> Result<()> {
        match self.hand.iter().position(|t| t == tile) {
            Some(index) => {
                self.hand.remove(index);
                log::debug!("Player {} dropped tile {} from their hand", self.name, tile);
                Ok(())
            }
            None => Err(ScrabbleError::TileNotInHand(*tile)),
        }
    }

    /// Empties the hand and returns what it held.
    pub fn clear_hand(&mut self) -> Vec<Tile> {
        log::info!("Player {} cleared their hand", self.name);
        std::mem::take(&mut self.hand)
    }

    pub(crate) fn set_hand(&mut self, hand: Vec<Tile>) {
        self.hand = hand;
    }
}

fn is_valid_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return false;
    }
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["Anna", "bob_42", "Player_One_1234", "x___"] {
            assert!(Player::new(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in [
            "",
            "Bob",
            "1Anna",
            "_anna",
            "Anna Lena",
            "Jürgen",
            "ThisNameIsWayTooLong",
            "anna-lena",
        ] {
            assert!(
                matches!(Player::new(name), Err(ScrabbleError::InvalidPlayerName(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_hand_operations() {
        let mut player = Player::new("Anna").unwrap();
        player.add_tile(Tile::new('A', 1));
        player.add_tile(Tile::new('B', 3));
        player.add_tile(Tile::new('A', 1));

        player.drop_tile(&Tile::new('A', 1)).unwrap();
        assert_eq!(player.hand(), &[Tile::new('B', 3), Tile::new('A', 1)]);

        assert!(matches!(
            player.drop_tile(&Tile::new('Z', 10)),
            Err(ScrabbleError::TileNotInHand(_))
        ));
        assert_eq!(player.hand().len(), 2);

        let returned = player.clear_hand();
        assert_eq!(returned.len(), 2);
        assert!(player.hand().is_empty());
    }

    #[test]
    fn test_score_accumulates() {
        let mut player = Player::new("Anna").unwrap();
        player.add_points(11);
        player.add_points(0);
        player.add_points(4);
        assert_eq!(player.score(), 15);
    }
}
