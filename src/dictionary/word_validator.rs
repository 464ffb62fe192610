//! Word list lookup with joker substitution.
//!
//! Word lists are plain text, one entry per line, either `word` or
//! `word;"description"`. Keys are stored lowercased so lookups ignore case.

use crate::game::language::Language;
use crate::game::tile::JOKER_LETTER;
use crate::{Result, ScrabbleError};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_DESCRIPTION: &str = "No Description available.";

/// Characters standing for a blank tile inside a queried word.
const PLACEHOLDERS: [char; 2] = [JOKER_LETTER, '_'];

/// Answers whether a word may be played.
///
/// Blank tiles arrive as [`JOKER_LETTER`] and may stand for any letter of the
/// dictionary's language.
pub trait Dictionary: Send {
    fn language(&self) -> Language;

    fn contains_word(&self, word: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct WordValidator {
    language: Language,
    words: HashMap<String, String>,
}

impl WordValidator {
    /// Loads the word list at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P, language: Language) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            log::error!("Word list {} could not be opened: {}", path.display(), e);
            ScrabbleError::Io(e)
        })?;
        let validator = Self::from_reader(BufReader::new(file), language)?;
        log::info!(
            "Loaded {} words for \"{}\" from {}",
            validator.len(),
            language,
            path.display()
        );
        Ok(validator)
    }

    pub fn from_reader<R: BufRead>(reader: R, language: Language) -> Result<Self> {
        let mut words = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            if let Some((word, description)) = parse_entry(&line) {
                words.entry(word).or_insert(description);
            }
        }
        Ok(WordValidator { language, words })
    }

    /// Builds a validator from bare words, without descriptions.
    pub fn from_words<I, S>(words: I, language: Language) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for word in words {
            if let Some((word, description)) = parse_entry(word.as_ref()) {
                map.entry(word).or_insert(description);
            }
        }
        WordValidator {
            language,
            words: map,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks `word` against the list, ignoring case.
    ///
    /// Every blank (`' '` or `'_'`) may stand for any letter of the language's
    /// alphabet; the word is valid if some listed word matches the pattern.
    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        if !word.contains(PLACEHOLDERS) {
            return self.words.contains_key(&word);
        }
        let pattern: Vec<char> = word.chars().collect();
        let alphabet: Vec<char> = self
            .language
            .alphabet()
            .flat_map(char::to_lowercase)
            .collect();
        self.words
            .keys()
            .any(|listed| matches_pattern(listed, &pattern, &alphabet))
    }

    /// Description stored for a listed word.
    pub fn description(&self, word: &str) -> Option<&str> {
        self.words.get(&word.to_lowercase()).map(String::as_str)
    }
}

impl Dictionary for WordValidator {
    fn language(&self) -> Language {
        self.language
    }

    fn contains_word(&self, word: &str) -> bool {
        WordValidator::contains_word(self, word)
    }
}

/// Whether `listed` spells `pattern`, each placeholder standing for one letter of
/// `alphabet`.
fn matches_pattern(listed: &str, pattern: &[char], alphabet: &[char]) -> bool {
    let mut letters = listed.chars();
    for &expected in pattern {
        let Some(letter) = letters.next() else {
            return false;
        };
        let matches = if PLACEHOLDERS.contains(&expected) {
            alphabet.contains(&letter)
        } else {
            letter == expected
        };
        if !matches {
            return false;
        }
    }
    letters.next().is_none()
}

/// Splits a word list line into its lowercased key and description.
fn parse_entry(line: &str) -> Option<(String, String)> {
    let (word, description) = match line.split_once(';') {
        Some((word, description)) => {
            let description = description.replace('"', "");
            let description = description.trim();
            let description = if description.is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                description.to_string()
            };
            (word, description)
        }
        None => (line, DEFAULT_DESCRIPTION.to_string()),
    };
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    Some((word.to_lowercase(), description))
}
