use crate::game::board::{Board, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

/// Positions of the word running through (`row`, `col`), in coordinate order.
///
/// The vertical axis is tried first, the horizontal one only when the field has no
/// occupied neighbour above or below. Returns `None` when the field has no occupied
/// neighbour at all.
pub fn word_positions(board: &Board, row: usize, col: usize) -> Option<Vec<(usize, usize)>> {
    let occupied = |r: usize, c: usize| r < BOARD_SIZE && c < BOARD_SIZE && board.is_occupied(r, c);

    let axis = if (row > 0 && occupied(row - 1, col)) || occupied(row + 1, col) {
        Axis::Vertical
    } else if (col > 0 && occupied(row, col - 1)) || occupied(row, col + 1) {
        Axis::Horizontal
    } else {
        return None;
    };

    let step = |(r, c): (usize, usize), forward: bool| -> Option<(usize, usize)> {
        let next = match (axis, forward) {
            (Axis::Vertical, true) => (r + 1, c),
            (Axis::Vertical, false) => (r.checked_sub(1)?, c),
            (Axis::Horizontal, true) => (r, c + 1),
            (Axis::Horizontal, false) => (r, c.checked_sub(1)?),
        };
        occupied(next.0, next.1).then_some(next)
    };

    let mut start = (row, col);
    while let Some(previous) = step(start, false) {
        start = previous;
    }
    let mut positions = vec![start];
    let mut current = start;
    while let Some(next) = step(current, true) {
        positions.push(next);
        current = next;
    }
    Some(positions)
}

/// Letters on `positions` concatenated. Blank tiles keep their blank letter.
pub fn word_at(board: &Board, positions: &[(usize, usize)]) -> String {
    positions
        .iter()
        .filter_map(|&(row, col)| board.occupant(row, col))
        .map(|tile| tile.letter())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::Tile;

    fn board_with(letters: &[(char, usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(letter, row, col) in letters {
            board.place_tile(Tile::new(letter, 1), row, col).unwrap();
        }
        board
    }

    #[test]
    fn test_horizontal_word() {
        let board = board_with(&[('C', 7, 6), ('A', 7, 7), ('T', 7, 8)]);
        let positions = word_positions(&board, 7, 7).unwrap();
        assert_eq!(positions, vec![(7, 6), (7, 7), (7, 8)]);
        assert_eq!(word_at(&board, &positions), "CAT");
    }

    #[test]
    fn test_vertical_word_in_coordinate_order() {
        let board = board_with(&[('D', 5, 2), ('O', 6, 2), ('G', 7, 2)]);
        let positions = word_positions(&board, 7, 2).unwrap();
        assert_eq!(word_at(&board, &positions), "DOG");
    }

    #[test]
    fn test_vertical_axis_takes_precedence() {
        // A at (7, 7) has neighbours on both axes.
        let board = board_with(&[('C', 7, 6), ('A', 7, 7), ('T', 7, 8), ('X', 8, 7)]);
        let positions = word_positions(&board, 7, 7).unwrap();
        assert_eq!(word_at(&board, &positions), "AX");
    }

    #[test]
    fn test_word_along_board_edges() {
        let board = board_with(&[('O', 0, 13), ('N', 0, 14)]);
        let positions = word_positions(&board, 0, 14).unwrap();
        assert_eq!(positions, vec![(0, 13), (0, 14)]);

        let board = board_with(&[('O', 13, 0), ('N', 14, 0)]);
        assert_eq!(word_positions(&board, 13, 0).unwrap(), vec![(13, 0), (14, 0)]);
    }

    #[test]
    fn test_isolated_tile_forms_no_word() {
        let board = board_with(&[('A', 7, 7), ('B', 9, 7)]);
        assert_eq!(word_positions(&board, 7, 7), None);
    }

    #[test]
    fn test_joker_keeps_blank_letter() {
        let mut board = board_with(&[('A', 7, 7), ('T', 7, 8)]);
        board.place_tile(Tile::joker(), 7, 6).unwrap();
        let positions = word_positions(&board, 7, 6).unwrap();
        assert_eq!(word_at(&board, &positions), " AT");
    }
}
