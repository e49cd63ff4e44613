use super::{DictionaryLoadError, LocaleDictionary};
use fst::{Automaton, IntoStreamer, Set, Streamer};
use std::fs;
use std::path::Path;

/// Plain word-list locale stored as an FST set.
///
/// Suggestions come from edit distance over prefix neighbourhoods, so the
/// ordering is closest-first and then lexicographic.
pub struct WordListDictionary {
    locale: String,
    set: Set<Vec<u8>>,
}

impl WordListDictionary {
    /// Load a newline-separated word list. Blank lines and `#` comments are skipped.
    pub fn load(locale: &str, path: &Path) -> Result<Self, DictionaryLoadError> {
        let content = fs::read_to_string(path).map_err(|source| DictionaryLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_words(locale, content.lines())
    }

    pub fn from_words<I, S>(locale: &str, words: I) -> Result<Self, DictionaryLoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();
        sorted.sort();
        sorted.dedup();

        let set = Set::from_iter(sorted).map_err(|e| DictionaryLoadError::Parse {
            locale: locale.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            locale: locale.to_string(),
            set,
        })
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut stream = self
            .set
            .search(fst::automaton::Str::new(prefix).starts_with())
            .into_stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        results
    }

    fn short_word_candidates(&self, word: &str, exclude: &[String]) -> Vec<(usize, String)> {
        let len = word.chars().count();
        let mut candidates = Vec::new();
        let mut stream = self.set.stream();

        while let Some(key) = stream.next() {
            let Ok(candidate) = std::str::from_utf8(key) else {
                continue;
            };
            if candidate.chars().count().abs_diff(len) > 1 {
                continue;
            }
            let distance = edit_distance(word, candidate);
            if distance <= 2 && !exclude.iter().any(|e| e == candidate) {
                candidates.push((distance, candidate.to_string()));
            }
        }

        candidates.sort_by_key(|(distance, _)| *distance);
        candidates
    }
}

impl LocaleDictionary for WordListDictionary {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn check(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    fn suggest(&self, word: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }

        let word = word.to_lowercase();
        let mut suggestions: Vec<String> = Vec::new();
        let push = |suggestions: &mut Vec<String>, candidate: String| {
            if candidate != word && !suggestions.contains(&candidate) {
                suggestions.push(candidate);
            }
            suggestions.len() >= limit
        };

        // 1. Same three-letter prefix, distance <= 2
        if word.chars().count() >= 3 {
            let prefix: String = word.chars().take(3).collect();
            let mut matches = self.words_with_prefix(&prefix);
            matches.sort_by_key(|w| edit_distance(&word, w));

            for candidate in matches {
                if edit_distance(&word, &candidate) <= 2 && push(&mut suggestions, candidate) {
                    return suggestions;
                }
            }
        }

        // 2. Single-edit typo transformations
        for candidate in transformations(&word) {
            if self.check(&candidate) && push(&mut suggestions, candidate) {
                return suggestions;
            }
        }

        // 3. Two-letter prefix, distance <= 3
        if word.chars().count() >= 2 {
            let prefix: String = word.chars().take(2).collect();
            let mut matches = self.words_with_prefix(&prefix);
            matches.sort_by_key(|w| edit_distance(&word, w));

            for candidate in matches {
                if edit_distance(&word, &candidate) <= 3 && push(&mut suggestions, candidate) {
                    return suggestions;
                }
            }
        }

        // 4. Short words get a full scan restricted by length
        if word.chars().count() <= 3 {
            for (_, candidate) in self.short_word_candidates(&word, &suggestions) {
                if push(&mut suggestions, candidate) {
                    return suggestions;
                }
            }
        }

        suggestions
    }
}

/// Levenshtein distance over chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != *b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}

/// Deletions, adjacent swaps and common letter confusions (English and Spanish).
fn transformations(word: &str) -> Vec<String> {
    const CONFUSIONS: [(char, char); 14] = [
        ('a', 'e'),
        ('e', 'i'),
        ('i', 'o'),
        ('o', 'u'),
        ('b', 'v'),
        ('v', 'b'),
        ('c', 'k'),
        ('c', 's'),
        ('f', 'v'),
        ('g', 'j'),
        ('m', 'n'),
        ('n', 'ñ'),
        ('s', 'z'),
        ('y', 'i'),
    ];

    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::new();

    for i in 0..chars.len() {
        let mut candidate = chars.clone();
        candidate.remove(i);
        out.push(candidate.into_iter().collect());
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut candidate = chars.clone();
        candidate.swap(i, i + 1);
        out.push(candidate.into_iter().collect());
    }

    for (i, &ch) in chars.iter().enumerate() {
        for &(from, to) in &CONFUSIONS {
            if ch == from {
                let mut candidate = chars.clone();
                candidate[i] = to;
                out.push(candidate.into_iter().collect());
            }
        }
    }

    out
}
