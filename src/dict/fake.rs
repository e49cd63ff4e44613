use super::LocaleDictionary;
use std::collections::{HashMap, HashSet};

/// Test locale with a fixed vocabulary and scripted suggestion lists.
pub(crate) struct ScriptedDictionary {
    locale: String,
    words: HashSet<String>,
    suggestions: HashMap<String, Vec<String>>,
}

impl ScriptedDictionary {
    pub(crate) fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            words: HashSet::new(),
            suggestions: HashMap::new(),
        }
    }

    pub(crate) fn with_words(mut self, words: &[&str]) -> Self {
        self.words.extend(words.iter().map(|w| w.to_string()));
        self
    }

    pub(crate) fn suggesting(mut self, word: &str, candidates: &[&str]) -> Self {
        self.suggestions.insert(
            word.to_string(),
            candidates.iter().map(|c| c.to_string()).collect(),
        );
        self
    }
}

impl LocaleDictionary for ScriptedDictionary {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn check(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn suggest(&self, word: &str, limit: usize) -> Vec<String> {
        self.suggestions
            .get(word)
            .or_else(|| self.suggestions.get(&word.to_lowercase()))
            .map(|s| s.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }
}
