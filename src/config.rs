//! Engine configuration: where the word lists live and how many tiles a hand holds.

use crate::game::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Word list file per language
    pub word_lists: HashMap<Language, PathBuf>,
    /// Tiles a player holds after refilling
    pub hand_size: usize,
}

impl EngineConfig {
    pub fn with_word_list<P: Into<PathBuf>>(mut self, language: Language, path: P) -> Self {
        self.word_lists.insert(language, path.into());
        self
    }

    pub fn word_list(&self, language: Language) -> Option<&Path> {
        self.word_lists.get(&language).map(PathBuf::as_path)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        let word_lists = HashMap::from([
            (
                Language::En,
                PathBuf::from("resources/wordlists/wordlist-en.csv"),
            ),
            (
                Language::De,
                PathBuf::from("resources/wordlists/wordlist-de.txt"),
            ),
        ]);
        Self {
            word_lists,
            hand_size: HAND_SIZE,
        }
    }
}
