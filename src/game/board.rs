use crate::game::effect::{standard_effect, Effect};
use crate::game::field::Field;
use crate::game::tile::Tile;
use crate::{Result, ScrabbleError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 15;

/// The start square. The first word of a game has to cover it.
pub const CENTER: (usize, usize) = (7, 7);

/// 15x15 grid of fields, indexed by (row, col).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    fields: [[Field; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board with the standard multiplier layout.
    pub fn new() -> Self {
        let mut fields = [[Field::default(); BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in fields.iter_mut().enumerate() {
            for (col, field) in line.iter_mut().enumerate() {
                *field = Field::new(standard_effect(row, col));
            }
        }
        Board { fields }
    }

    pub fn field(&self, row: usize, col: usize) -> Result<&Field> {
        self.fields
            .get(row)
            .and_then(|line| line.get(col))
            .ok_or(ScrabbleError::OutOfRange { row, col })
    }

    /// Puts `tile` on an empty field. Occupied fields are never overwritten.
    pub fn place_tile(&mut self, tile: Tile, row: usize, col: usize) -> Result<()> {
        let field = self
            .fields
            .get_mut(row)
            .and_then(|line| line.get_mut(col))
            .ok_or(ScrabbleError::OutOfRange { row, col })?;
        field
            .set_occupant(tile)
            .map_err(|_| ScrabbleError::FieldOccupied { row, col })
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.field(row, col).is_ok_and(Field::is_occupied)
    }

    pub fn occupant(&self, row: usize, col: usize) -> Option<Tile> {
        self.field(row, col).ok().and_then(Field::occupant)
    }

    pub fn effect(&self, row: usize, col: usize) -> Result<Effect> {
        self.field(row, col).map(Field::effect)
    }

    /// Every field with its coordinates, in row-major order.
    pub fn fields(&self) -> impl Iterator<Item = ((usize, usize), &Field)> {
        self.fields.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, field)| ((row, col), field))
        })
    }

    /// Placed tiles with their coordinates, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = ((usize, usize), Tile)> + '_ {
        self.fields()
            .filter_map(|(pos, field)| field.occupant().map(|tile| (pos, tile)))
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Prints placed letters, and the effect code of empty fields.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.fields {
            let cells: Vec<String> = line
                .iter()
                .map(|field| match field.occupant() {
                    Some(tile) if tile.is_joker() => " _".to_string(),
                    Some(tile) => format!(" {}", tile.letter()),
                    None => field.effect().code().to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.fields().count(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(board.effect(CENTER.0, CENTER.1).unwrap(), Effect::DoubleWord);
    }

    #[test]
    fn test_field_out_of_range() {
        let board = Board::new();
        assert!(matches!(
            board.field(15, 0),
            Err(ScrabbleError::OutOfRange { row: 15, col: 0 })
        ));
        assert!(matches!(
            board.field(3, 99),
            Err(ScrabbleError::OutOfRange { row: 3, col: 99 })
        ));
        assert!(board.field(14, 14).is_ok());
    }

    #[test]
    fn test_place_tile_once() {
        let mut board = Board::new();
        board.place_tile(Tile::new('A', 1), 7, 7).unwrap();
        assert_eq!(board.occupant(7, 7), Some(Tile::new('A', 1)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_occupied_field_is_never_overwritten() {
        let mut board = Board::new();
        board.place_tile(Tile::new('A', 1), 3, 4).unwrap();
        for tile in [Tile::new('B', 3), Tile::new('A', 1), Tile::joker()] {
            let result = board.place_tile(tile, 3, 4);
            assert!(matches!(result, Err(ScrabbleError::FieldOccupied { row: 3, col: 4 })));
            assert_eq!(board.occupant(3, 4), Some(Tile::new('A', 1)));
        }
    }

    #[test]
    fn test_place_tile_out_of_range() {
        let mut board = Board::new();
        assert!(matches!(
            board.place_tile(Tile::new('A', 1), 0, 15),
            Err(ScrabbleError::OutOfRange { .. })
        ));
        assert!(board.is_empty());
    }

    #[test]
    fn test_tiles_in_row_major_order() {
        let mut board = Board::new();
        board.place_tile(Tile::new('B', 3), 8, 1).unwrap();
        board.place_tile(Tile::new('A', 1), 2, 9).unwrap();
        let tiles: Vec<_> = board.tiles().collect();
        assert_eq!(
            tiles,
            vec![((2, 9), Tile::new('A', 1)), ((8, 1), Tile::new('B', 3))]
        );
    }

    #[test]
    fn test_display_shows_letters_and_effects() {
        let mut board = Board::new();
        board.place_tile(Tile::new('Q', 10), 0, 1).unwrap();
        let text = board.to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("TW  Q .. DL"));
        assert_eq!(text.lines().count(), BOARD_SIZE);
    }
}
