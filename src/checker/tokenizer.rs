use super::tables::IGNORED_WORDS;
use crate::{Config, WordToken};
use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

/// ASCII letters plus accented Latin (Latin-1 Supplement and Latin
/// Extended-A/B), excluding the `×` and `÷` signs.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || (('\u{00C0}'..='\u{024F}').contains(&ch) && ch != '\u{00D7}' && ch != '\u{00F7}')
}

/// Split a buffer into maximal runs of word characters, in order.
pub fn tokenize(text: &str) -> Vec<WordToken> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut pos = 0;

    for ch in text.chars() {
        if is_word_char(ch) {
            if current.is_empty() {
                start = pos;
            }
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(WordToken {
                text: std::mem::take(&mut current),
                start_index: start,
                end_index: pos,
            });
        }
        pos += ch.len_utf16();
    }

    if !current.is_empty() {
        tokens.push(WordToken {
            text: current,
            start_index: start,
            end_index: pos,
        });
    }

    tokens
}

/// The token still being typed: the one that ends exactly at the caret.
pub fn current_word(tokens: &[WordToken], caret: usize) -> Option<&WordToken> {
    tokens.iter().find(|t| t.end_index == caret)
}

/// Rules that exclude a token regardless of configuration.
pub fn is_structurally_ignored(word: &str) -> bool {
    if word.is_empty() {
        return true;
    }

    if IGNORED_WORDS.contains(word.to_lowercase().as_str()) {
        return true;
    }

    // Acronyms
    if word.chars().count() > 1 && word == word.to_uppercase() {
        return true;
    }

    // camelCase and brand casing like "iPhone"
    let inner_upper = word.chars().skip(1).any(char::is_uppercase);
    if inner_upper && word.chars().any(char::is_lowercase) {
        return true;
    }

    word.chars().any(|c| c.is_ascii_digit())
}

/// Ignore filter: the static rules plus user-configured patterns and words.
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    patterns: Vec<Regex>,
    words: HashSet<String>,
}

impl TokenFilter {
    pub fn from_config(config: &Config) -> Self {
        let mut patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => patterns.push(re),
                Err(e) => warn!(pattern = %pattern, error = %e, "invalid ignore pattern"),
            }
        }

        let words = config
            .extra_ignored_words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        Self { patterns, words }
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        is_structurally_ignored(word)
            || self.words.contains(&word.to_lowercase())
            || self.patterns.iter().any(|re| re.is_match(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[WordToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_ranges() {
        let tokens = tokenize("the quik brown fox");
        assert_eq!(texts(&tokens), vec!["the", "quik", "brown", "fox"]);
        assert_eq!(tokens[1].start_index, 4);
        assert_eq!(tokens[1].end_index, 8);
        assert_eq!(tokens[3].end_index, 18);
    }

    #[test]
    fn test_tokenize_accents_and_punctuation() {
        let tokens = tokenize("¿Cómo estás? Año 2024, señor.");
        assert_eq!(texts(&tokens), vec!["Cómo", "estás", "Año", "señor"]);
        // offsets count UTF-16 units, not bytes
        assert_eq!(tokens[0].start_index, 1);
        assert_eq!(tokens[0].end_index, 5);
    }

    #[test]
    fn test_tokenize_splits_on_digits_and_symbols() {
        let tokens = tokenize("abc123def 3×4 don't");
        assert_eq!(texts(&tokens), vec!["abc", "def", "don", "t"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  42 !? ").is_empty());
    }

    #[test]
    fn test_current_word() {
        let tokens = tokenize("hello wor");
        assert_eq!(current_word(&tokens, 9).map(|t| t.text.as_str()), Some("wor"));
        assert!(current_word(&tokens, 8).is_none());
        assert_eq!(current_word(&tokens, 5).map(|t| t.text.as_str()), Some("hello"));
    }

    #[test]
    fn test_structural_ignore_rules() {
        assert!(is_structurally_ignored(""));
        assert!(is_structurally_ignored("LOL"));
        assert!(is_structurally_ignored("btw"));
        assert!(is_structurally_ignored("NASA"));
        assert!(is_structurally_ignored("iPhone"));
        assert!(is_structurally_ignored("camelCase"));
        assert!(is_structurally_ignored("abc1"));
        assert!(!is_structurally_ignored("I"));
        assert!(!is_structurally_ignored("Hello"));
        assert!(!is_structurally_ignored("quik"));
        assert!(!is_structurally_ignored("Señor"));
    }

    #[test]
    fn test_filter_configured_words_and_patterns() {
        let config = Config {
            extra_ignored_words: vec!["Kubectl".to_string()],
            ignore_patterns: vec!["^zz".to_string(), "(".to_string()],
            ..Default::default()
        };
        let filter = TokenFilter::from_config(&config);
        assert!(filter.is_ignored("kubectl"));
        assert!(filter.is_ignored("zzz"));
        assert!(!filter.is_ignored("hello"));
    }

    #[test]
    fn test_default_patterns() {
        let filter = TokenFilter::from_config(&Config::default());
        assert!(filter.is_ignored("https"));
        assert!(filter.is_ignored("hahaha"));
        assert!(filter.is_ignored("Jajaja"));
        assert!(!filter.is_ignored("haha ha"));
        assert!(!filter.is_ignored("hat"));
    }
}
