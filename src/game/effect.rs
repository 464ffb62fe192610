use serde::{Deserialize, Serialize};

/// Scoring multiplier printed on a board field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Effect {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Effect {
    /// Factor applied to the letter lying on the field.
    pub fn letter_multiplier(&self) -> u32 {
        match self {
            Effect::DoubleLetter => 2,
            Effect::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Factor applied to the whole word, `None` for letter or plain fields.
    pub fn word_multiplier(&self) -> Option<u32> {
        match self {
            Effect::DoubleWord => Some(2),
            Effect::TripleWord => Some(3),
            _ => None,
        }
    }

    /// Two character code used when printing the layout.
    pub fn code(&self) -> &'static str {
        match self {
            Effect::None => "..",
            Effect::DoubleLetter => "DL",
            Effect::TripleLetter => "TL",
            Effect::DoubleWord => "DW",
            Effect::TripleWord => "TW",
        }
    }
}

/// Columns and rows whose cross product carries an effect.
type AxisSets = (&'static [usize], &'static [usize]);

// (columns, rows) pairs for the standard 15x15 board, checked in this order.
const LAYOUT: &[(Effect, &[AxisSets])] = &[
    (
        Effect::DoubleWord,
        &[
            (&[1, 13], &[1, 13]),
            (&[2, 12], &[2, 12]),
            (&[3, 11], &[3, 11]),
            (&[4, 10], &[4, 10]),
            (&[7], &[7]),
        ],
    ),
    (Effect::TripleWord, &[(&[0, 14], &[0, 7, 14]), (&[7], &[0, 14])]),
    (
        Effect::DoubleLetter,
        &[
            (&[0, 14], &[3, 11]),
            (&[2, 12], &[6, 8]),
            (&[3, 11], &[0, 7, 14]),
            (&[6, 8], &[2, 6, 8, 12]),
            (&[7], &[3, 11]),
        ],
    ),
    (
        Effect::TripleLetter,
        &[(&[1, 13], &[5, 9]), (&[5, 9], &[1, 5, 9, 13])],
    ),
];

/// Effect of the field at (`row`, `col`) on the standard board.
pub fn standard_effect(row: usize, col: usize) -> Effect {
    LAYOUT
        .iter()
        .find(|(_, sets)| {
            sets.iter()
                .any(|(cols, rows)| cols.contains(&col) && rows.contains(&row))
        })
        .map(|&(effect, _)| effect)
        .unwrap_or(Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::BOARD_SIZE;

    fn count(effect: Effect) -> usize {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| standard_effect(row, col) == effect)
            .count()
    }

    #[test]
    fn test_standard_layout_counts() {
        assert_eq!(count(Effect::TripleWord), 8);
        assert_eq!(count(Effect::DoubleWord), 17);
        assert_eq!(count(Effect::TripleLetter), 12);
        assert_eq!(count(Effect::DoubleLetter), 24);
        assert_eq!(count(Effect::None), 225 - 8 - 17 - 12 - 24);
    }

    #[test]
    fn test_layout_is_symmetric() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let effect = standard_effect(row, col);
                assert_eq!(effect, standard_effect(col, row), "transpose of ({row}, {col})");
                assert_eq!(effect, standard_effect(14 - row, col), "vertical mirror of ({row}, {col})");
                assert_eq!(effect, standard_effect(row, 14 - col), "horizontal mirror of ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_known_fields() {
        assert_eq!(standard_effect(7, 7), Effect::DoubleWord);
        assert_eq!(standard_effect(0, 0), Effect::TripleWord);
        assert_eq!(standard_effect(0, 7), Effect::TripleWord);
        assert_eq!(standard_effect(5, 1), Effect::TripleLetter);
        assert_eq!(standard_effect(0, 3), Effect::DoubleLetter);
        assert_eq!(standard_effect(7, 3), Effect::DoubleLetter);
        assert_eq!(standard_effect(5, 2), Effect::None);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Effect::TripleLetter.letter_multiplier(), 3);
        assert_eq!(Effect::DoubleWord.letter_multiplier(), 1);
        assert_eq!(Effect::TripleWord.word_multiplier(), Some(3));
        assert_eq!(Effect::DoubleLetter.word_multiplier(), None);
    }
}
