use crate::game::tile::{Tile, JOKER_LETTER};
use crate::ScrabbleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter, point value and number of copies in a fresh bag.
pub type TileDistribution = (char, u32, usize);

const EN_TILES: &[TileDistribution] = &[
    (JOKER_LETTER, 0, 2),
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
];

const DE_TILES: &[TileDistribution] = &[
    (JOKER_LETTER, 0, 2),
    ('A', 1, 5),
    ('B', 3, 2),
    ('C', 4, 2),
    ('D', 1, 4),
    ('E', 1, 15),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 2, 4),
    ('I', 1, 6),
    ('J', 6, 1),
    ('K', 4, 2),
    ('L', 2, 3),
    ('M', 3, 4),
    ('N', 1, 9),
    ('O', 2, 3),
    ('P', 4, 1),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 7),
    ('T', 1, 6),
    ('U', 1, 6),
    ('V', 6, 1),
    ('W', 3, 1),
    ('X', 8, 1),
    ('Y', 10, 1),
    ('Z', 3, 1),
    ('Ä', 6, 1),
    ('Ü', 6, 1),
    ('Ö', 8, 1),
];

/// Supported game languages. Each one brings its own tile set and word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }

    /// The bag distribution for this language.
    pub fn tile_distribution(&self) -> &'static [TileDistribution] {
        match self {
            Language::En => EN_TILES,
            Language::De => DE_TILES,
        }
    }

    /// One tile per distinct letter, joker included.
    pub fn tile_set(&self) -> impl Iterator<Item = Tile> {
        self.tile_distribution()
            .iter()
            .map(|&(letter, value, _)| Tile::new(letter, value))
    }

    /// Letters a joker may stand for.
    pub fn alphabet(&self) -> impl Iterator<Item = char> {
        self.tile_distribution()
            .iter()
            .map(|&(letter, _, _)| letter)
            .filter(|&letter| letter != JOKER_LETTER)
    }

    /// Point value of a letter, case-insensitive. `None` if the letter is not in the set.
    pub fn letter_value(&self, letter: char) -> Option<u32> {
        let upper = letter.to_uppercase().next().unwrap_or(letter);
        self.tile_distribution()
            .iter()
            .find(|&&(l, _, _)| l == upper)
            .map(|&(_, value, _)| value)
    }

    pub fn total_tiles(&self) -> usize {
        self.tile_distribution().iter().map(|&(_, _, count)| count).sum()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = ScrabbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "de" | "deutsch" | "german" => Ok(Language::De),
            _ => Err(ScrabbleError::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_totals() {
        assert_eq!(Language::En.total_tiles(), 100);
        assert_eq!(Language::De.total_tiles(), 102);
    }

    #[test]
    fn test_each_language_has_two_jokers() {
        for language in Language::ALL {
            let jokers = language
                .tile_distribution()
                .iter()
                .find(|&&(letter, _, _)| letter == JOKER_LETTER)
                .copied();
            assert_eq!(jokers, Some((JOKER_LETTER, 0, 2)), "{}", language);
        }
    }

    #[test]
    fn test_alphabet_excludes_joker() {
        assert_eq!(Language::En.alphabet().count(), 26);
        assert_eq!(Language::De.alphabet().count(), 29);
        assert!(Language::De.alphabet().any(|c| c == 'Ö'));
        assert!(Language::En.alphabet().all(|c| c != JOKER_LETTER));
    }

    #[test]
    fn test_letter_value_lookup() {
        assert_eq!(Language::En.letter_value('c'), Some(3));
        assert_eq!(Language::De.letter_value('C'), Some(4));
        assert_eq!(Language::De.letter_value('ö'), Some(8));
        assert_eq!(Language::En.letter_value('Ä'), None);
        assert_eq!(Language::En.letter_value(JOKER_LETTER), Some(0));
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("deutsch".parse::<Language>().unwrap(), Language::De);
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(ScrabbleError::UnknownLanguage(_))
        ));
        assert_eq!(Language::De.to_string(), "Deutsch");
    }
}
