use crate::game::board::Board;
use crate::Result;

/// Points for the word lying on `positions`.
///
/// Each letter is worth its tile value times the letter multiplier of its field. The
/// sum is then multiplied once by the first word multiplier found along the word.
pub fn score_word(board: &Board, positions: &[(usize, usize)]) -> Result<u32> {
    let mut points = 0;
    let mut word_multiplier = None;

    for &(row, col) in positions {
        let field = board.field(row, col)?;
        let value = field.occupant().map_or(0, |tile| tile.value());
        points += value * field.effect().letter_multiplier();
        if word_multiplier.is_none() {
            word_multiplier = field.effect().word_multiplier();
        }
    }

    Ok(points * word_multiplier.unwrap_or(1))
}
