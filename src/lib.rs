pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;

pub use checker::{LoadState, SpellEngine};
pub use config::Config;
pub use dict::{DictionaryLoadError, DictionarySet, LocaleDictionary};

use serde::{Deserialize, Serialize};

/// A maximal run of alphabetic characters. Offsets are UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordToken {
    pub text: String,
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MisspelledWord {
    pub word: String,
    pub start_index: usize,
    pub end_index: usize,
    pub suggestions: Vec<String>,
    pub best_suggestion: Option<String>,
}

/// Ghost-text completion. `start_index == end_index` means a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteSuggestion {
    pub original: String,
    pub completion: String,
    pub remaining_text: String,
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub misspelled: Vec<MisspelledWord>,
    pub autocomplete: Option<AutocompleteSuggestion>,
    pub current_word: Option<WordToken>,
    pub current_word_correction: Option<MisspelledWord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabResult {
    pub text: String,
    pub caret: usize,
    pub corrections_applied: usize,
    pub autocomplete_applied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceCorrection {
    pub text: String,
    pub caret: usize,
    pub corrected: bool,
    pub original: String,
    pub replacement: String,
}
