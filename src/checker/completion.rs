//! Three-tier completion: curated prefixes, dictionary suggestions, then
//! phrase and next-word prediction at a word boundary.

use super::offsets::{byte_offset, char_at, char_before};
use super::tables::{NEXT_WORD, PHRASE_COMPLETIONS, PREFIX_COMPLETIONS, TWO_WORD_PHRASES};
use super::tokenizer::is_word_char;
use crate::{AutocompleteSuggestion, WordToken};
use std::collections::HashMap;

/// The current word as seen by the in-word tiers.
#[derive(Debug, Clone, Copy)]
pub struct CurrentWord<'a> {
    pub token: &'a WordToken,
    /// Combined suggestions when the word failed the spell check.
    pub suggestions: Option<&'a [String]>,
}

#[derive(Debug, Clone, Copy)]
pub struct Predictor {
    min_dictionary_len: usize,
}

impl Predictor {
    pub fn new(min_dictionary_len: usize) -> Self {
        Self { min_dictionary_len }
    }

    /// First tier that produces a completion wins.
    pub fn predict(
        &self,
        text: &str,
        caret: usize,
        tokens: &[WordToken],
        current: Option<CurrentWord<'_>>,
    ) -> Option<AutocompleteSuggestion> {
        if let Some(current) = current {
            if let Some(hit) = curated_completion(current.token) {
                return Some(hit);
            }

            if let Some(suggestions) = current.suggestions {
                if current.token.text.chars().count() >= self.min_dictionary_len {
                    if let Some(hit) = dictionary_completion(current.token, suggestions) {
                        return Some(hit);
                    }
                }
            }
        }

        phrase_prediction(text, caret, tokens)
    }
}

/// Tier 1: the curated prefix table.
pub fn curated_completion(token: &WordToken) -> Option<AutocompleteSuggestion> {
    let typed = token.text.to_lowercase();
    let key: String = typed.chars().take(3).collect();
    let candidates = PREFIX_COMPLETIONS.get(key.as_str())?;

    candidates
        .iter()
        .find(|c| extends(c, &typed))
        .map(|c| in_word_completion(token, c))
}

/// Tier 2: the first combined suggestion that extends the typed text.
pub fn dictionary_completion(
    token: &WordToken,
    suggestions: &[String],
) -> Option<AutocompleteSuggestion> {
    let typed = token.text.to_lowercase();

    suggestions
        .iter()
        .find(|c| extends(&c.to_lowercase(), &typed))
        .map(|c| in_word_completion(token, c))
}

/// Tier 3: phrase and next-word prediction, inserted at the caret.
pub fn phrase_prediction(
    text: &str,
    caret: usize,
    tokens: &[WordToken],
) -> Option<AutocompleteSuggestion> {
    let boundary = Boundary::at(text, caret)?;

    let last_idx = tokens.iter().rposition(|t| t.end_index == boundary.word_end)?;
    let last = tokens[last_idx].text.to_lowercase();
    let previous = last_idx
        .checked_sub(1)
        .map(|i| &tokens[i])
        .filter(|prev| separated_by_whitespace(text, prev, &tokens[last_idx]))
        .map(|prev| prev.text.to_lowercase());

    let candidate = previous
        .and_then(|prev| first_candidate(&TWO_WORD_PHRASES, &format!("{} {}", prev, last)))
        .or_else(|| first_candidate(&PHRASE_COMPLETIONS, &last))
        .or_else(|| first_candidate(&NEXT_WORD, &last))?;

    let completion = if boundary.needs_space {
        format!(" {}", candidate)
    } else {
        candidate.to_string()
    };

    Some(AutocompleteSuggestion {
        original: String::new(),
        remaining_text: completion.clone(),
        completion,
        start_index: caret,
        end_index: caret,
    })
}

/// Where a prediction may be inserted: right after a word at the end of the
/// buffer, or right after one space/newline that follows a word.
struct Boundary {
    word_end: usize,
    needs_space: bool,
}

impl Boundary {
    fn at(text: &str, caret: usize) -> Option<Self> {
        let before = char_before(text, caret)?;
        let after = char_at(text, caret);

        if is_word_char(before) {
            // Still inside the word unless this is the end of the buffer
            return after.is_none().then_some(Self {
                word_end: caret,
                needs_space: true,
            });
        }

        if before != ' ' && before != '\n' {
            return None;
        }
        if after.is_some_and(is_word_char) {
            return None;
        }

        let word_end = caret - 1;
        char_before(text, word_end)
            .filter(|c| is_word_char(*c))
            .map(|_| Self {
                word_end,
                needs_space: false,
            })
    }
}

fn separated_by_whitespace(text: &str, first: &WordToken, second: &WordToken) -> bool {
    let start = byte_offset(text, first.end_index);
    let end = byte_offset(text, second.start_index);
    start < end && text[start..end].chars().all(char::is_whitespace)
}

fn first_candidate(
    table: &HashMap<&'static str, &'static [&'static str]>,
    key: &str,
) -> Option<&'static str> {
    table.get(key).and_then(|candidates| candidates.first().copied())
}

/// `candidate` starts with `typed` and is strictly longer.
fn extends(candidate: &str, typed: &str) -> bool {
    candidate.starts_with(typed) && candidate.chars().count() > typed.chars().count()
}

/// Keep the typed prefix exactly as written and append the untyped rest.
fn in_word_completion(token: &WordToken, candidate: &str) -> AutocompleteSuggestion {
    let remaining: String = candidate.chars().skip(token.text.chars().count()).collect();

    AutocompleteSuggestion {
        original: token.text.clone(),
        completion: format!("{}{}", token.text, remaining),
        remaining_text: remaining,
        start_index: token.start_index,
        end_index: token.end_index,
    }
}
