use crate::config::ScoringWeights;
use crate::dict::DictionarySet;
use crate::Config;

/// Combined suggestions for one word and the pick among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranked {
    pub suggestions: Vec<String>,
    pub best: Option<String>,
}

/// Merges suggestions from every loaded locale and scores a best guess.
pub struct SuggestionRanker<'a> {
    dictionaries: &'a DictionarySet,
    weights: ScoringWeights,
    per_locale: usize,
    max_total: usize,
}

impl<'a> SuggestionRanker<'a> {
    pub fn new(dictionaries: &'a DictionarySet, config: &Config) -> Self {
        Self {
            dictionaries,
            weights: config.weights,
            per_locale: config.suggestions_per_locale,
            max_total: config.max_suggestions,
        }
    }

    pub fn rank(&self, word: &str) -> Ranked {
        let primary = self.dictionaries.primary().suggest(word, self.per_locale);
        let secondary = self
            .dictionaries
            .secondary()
            .map(|dict| dict.suggest(word, self.per_locale))
            .unwrap_or_default();

        let mut suggestions: Vec<String> = Vec::new();
        for candidate in primary.iter().chain(secondary.iter()) {
            if suggestions.len() >= self.max_total {
                break;
            }
            if !suggestions.contains(candidate) {
                suggestions.push(candidate.clone());
            }
        }

        let best = pick_best(word, &suggestions, &secondary, self.weights)
            .map(|winner| match_capitalization(word, winner));

        Ranked { suggestions, best }
    }
}

/// Score of one candidate; higher is better.
pub fn score(word: &str, candidate: &str, from_secondary: bool, weights: ScoringWeights) -> i32 {
    let mut score = 0;

    let first = |s: &str| s.chars().next().map(|c| c.to_lowercase().collect::<String>());
    if first(word).is_some() && first(word) == first(candidate) {
        score += weights.first_letter;
    }

    let divergence = word.chars().count().abs_diff(candidate.chars().count());
    score -= weights.length_penalty * divergence as i32;

    if from_secondary {
        score += weights.secondary_bonus;
    }

    score
}

/// Highest score wins; on ties the earlier candidate is kept.
fn pick_best<'s>(
    word: &str,
    candidates: &'s [String],
    secondary: &[String],
    weights: ScoringWeights,
) -> Option<&'s str> {
    let mut best: Option<(&str, i32)> = None;

    for candidate in candidates {
        let s = score(word, candidate, secondary.contains(candidate), weights);
        if best.map_or(true, |(_, top)| s > top) {
            best = Some((candidate.as_str(), s));
        }
    }

    best.map(|(candidate, _)| candidate)
}

pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize `candidate` when `original` starts with an upper-case letter.
pub fn match_capitalization(original: &str, candidate: &str) -> String {
    if starts_uppercase(original) {
        capitalize(candidate)
    } else {
        candidate.to_string()
    }
}
