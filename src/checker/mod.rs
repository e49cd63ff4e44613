pub mod completion;
pub mod offsets;
pub mod rewriter;
pub mod suggestions;
pub mod tables;
pub mod tokenizer;

use crate::dict::{DictionaryLoadError, DictionarySet};
use crate::{
    Analysis, AutocompleteSuggestion, Config, MisspelledWord, SpaceCorrection, TabResult,
    WordToken,
};
use completion::{CurrentWord, Predictor};
use offsets::clamp_caret;
use rewriter::Edit;
use std::sync::Arc;
use suggestions::SuggestionRanker;
use tokenizer::TokenFilter;
use tracing::{debug, info, warn};

/// Dictionary lifecycle. `Failed` carries a human-readable reason.
#[derive(Debug, Clone)]
pub enum LoadState {
    Uninitialized,
    /// Between `begin_load` and `finish_load`, while a host loads the
    /// dictionaries off its UI thread. `ensure_loaded` never leaves it here.
    Loading,
    Ready(Arc<DictionarySet>),
    Failed(String),
}

/// Analysis and rewriting for a text buffer and caret.
///
/// Every operation is a pure function of its inputs plus the loaded
/// dictionaries. Until dictionaries are ready, analysis returns empty results
/// and rewrites hand the input back unchanged.
#[derive(Debug, Clone)]
pub struct SpellEngine {
    config: Config,
    filter: TokenFilter,
    state: LoadState,
}

impl SpellEngine {
    pub fn new(config: Config) -> Self {
        let filter = TokenFilter::from_config(&config);
        Self {
            config,
            filter,
            state: LoadState::Uninitialized,
        }
    }

    /// Engine over dictionaries that are already loaded.
    pub fn with_dictionaries(config: Config, dictionaries: DictionarySet) -> Self {
        let mut engine = Self::new(config);
        engine.state = LoadState::Ready(Arc::new(dictionaries));
        engine
    }

    /// Load dictionaries once. Does nothing when already `Ready` or `Failed`.
    pub fn ensure_loaded(&mut self) -> &LoadState {
        if matches!(self.state, LoadState::Uninitialized) {
            self.load();
        }
        &self.state
    }

    /// Attempt the load again regardless of the current state.
    pub fn reload(&mut self) -> &LoadState {
        self.load();
        &self.state
    }

    fn load(&mut self) {
        let result = DictionarySet::load(&self.config);
        self.finish_load(result);
    }

    /// Mark a load as started by the host. Returns false unless the engine
    /// was `Uninitialized`; the host then loads with `DictionarySet::load`
    /// and reports back through `finish_load`.
    pub fn begin_load(&mut self) -> bool {
        if !matches!(self.state, LoadState::Uninitialized) {
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    /// Record the outcome of a load.
    pub fn finish_load(
        &mut self,
        result: Result<DictionarySet, DictionaryLoadError>,
    ) -> &LoadState {
        self.state = match result {
            Ok(set) => {
                info!(dictionaries = ?set, "dictionaries ready");
                LoadState::Ready(Arc::new(set))
            }
            Err(e) => {
                warn!(error = %e, "dictionaries failed to load; running without spell checking");
                LoadState::Failed(e.to_string())
            }
        };
        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn dictionaries(&self) -> Option<&DictionarySet> {
        match &self.state {
            LoadState::Ready(set) => Some(set.as_ref()),
            _ => None,
        }
    }

    /// Full analysis of `text` with the caret at `caret` (UTF-16 units).
    pub fn analyze(&self, text: &str, caret: usize) -> Analysis {
        let Some(dictionaries) = self.dictionaries() else {
            return Analysis::default();
        };

        let caret = clamp_caret(text, caret);
        let tokens = tokenizer::tokenize(text);
        let ranker = SuggestionRanker::new(dictionaries, &self.config);

        let mut misspelled = Vec::new();
        let mut current_word_correction = None;

        for token in &tokens {
            if !self.is_misspelled(dictionaries, &token.text) {
                continue;
            }

            let entry = misspelling(token, ranker.rank(&token.text));
            if token.end_index == caret {
                current_word_correction = Some(entry);
            } else {
                misspelled.push(entry);
            }
        }

        let current_word = tokenizer::current_word(&tokens, caret).cloned();
        let current = current_word
            .as_ref()
            .filter(|token| !self.filter.is_ignored(&token.text))
            .map(|token| CurrentWord {
                token,
                suggestions: current_word_correction
                    .as_ref()
                    .map(|c| c.suggestions.as_slice()),
            });

        let autocomplete = Predictor::new(self.config.min_dictionary_completion_len)
            .predict(text, caret, &tokens, current);

        debug!(
            tokens = tokens.len(),
            misspelled = misspelled.len(),
            current = ?current_word.as_ref().map(|t| t.text.as_str()),
            autocomplete = ?autocomplete.as_ref().map(|a| a.completion.as_str()),
            "analyzed buffer"
        );

        Analysis {
            misspelled,
            autocomplete,
            current_word,
            current_word_correction,
        }
    }

    pub fn misspelled_words(&self, text: &str, caret: usize) -> Vec<MisspelledWord> {
        self.analyze(text, caret).misspelled
    }

    pub fn autocomplete(&self, text: &str, caret: usize) -> Option<AutocompleteSuggestion> {
        self.analyze(text, caret).autocomplete
    }

    pub fn current_word_correction(&self, text: &str, caret: usize) -> Option<MisspelledWord> {
        self.analyze(text, caret).current_word_correction
    }

    pub fn apply_all_corrections(&self, text: &str, misspelled: &[MisspelledWord]) -> String {
        if !self.is_loaded() {
            return text.to_string();
        }
        rewriter::apply_all_corrections(text, misspelled)
    }

    pub fn apply_autocomplete(&self, text: &str, autocomplete: &AutocompleteSuggestion) -> String {
        if !self.is_loaded() {
            return text.to_string();
        }
        rewriter::apply_autocomplete(text, autocomplete)
    }

    /// Correct everything, then complete at the (moved) caret.
    pub fn apply_tab(&self, text: &str, caret: usize) -> TabResult {
        let caret = clamp_caret(text, caret);
        if !self.is_loaded() {
            return TabResult {
                text: text.to_string(),
                caret,
                corrections_applied: 0,
                autocomplete_applied: false,
            };
        }

        let analysis = self.analyze(text, caret);
        let edits: Vec<Edit> = analysis
            .misspelled
            .iter()
            .chain(analysis.current_word_correction.as_ref())
            .filter_map(Edit::from_correction)
            .collect();
        let corrected = rewriter::apply_edits(text, edits, caret);

        let followup = self.analyze(&corrected.text, corrected.caret);
        let (final_patch, autocomplete_applied) = match followup.autocomplete {
            Some(autocomplete) => {
                let edit = Edit::from_autocomplete(&autocomplete);
                let patched = rewriter::apply_edits(&corrected.text, vec![edit], corrected.caret);
                (patched, true)
            }
            None => (corrected.clone(), false),
        };

        debug!(
            corrections = corrected.applied,
            autocomplete_applied,
            caret = final_patch.caret,
            "applied tab"
        );

        TabResult {
            text: final_patch.text,
            caret: final_patch.caret,
            corrections_applied: corrected.applied,
            autocomplete_applied,
        }
    }

    /// Correct the word ending at `caret` before the host inserts a space.
    pub fn auto_correct_on_space(&self, text: &str, caret: usize) -> Option<SpaceCorrection> {
        let dictionaries = self.dictionaries()?;
        let caret = clamp_caret(text, caret);

        let tokens = tokenizer::tokenize(text);
        let token = tokenizer::current_word(&tokens, caret)?;
        if !self.is_misspelled(dictionaries, &token.text) {
            return None;
        }

        let replacement = SuggestionRanker::new(dictionaries, &self.config)
            .rank(&token.text)
            .best?;
        let edit = Edit::new(token.start_index, token.end_index, replacement.clone());
        let patched = rewriter::apply_edits(text, vec![edit], caret);

        debug!(original = %token.text, replacement = %replacement, "auto-corrected on space");

        Some(SpaceCorrection {
            text: patched.text,
            caret: patched.caret,
            corrected: true,
            original: token.text.clone(),
            replacement,
        })
    }

    fn is_misspelled(&self, dictionaries: &DictionarySet, word: &str) -> bool {
        !self.filter.is_ignored(word) && !dictionaries.is_known(word)
    }
}

fn misspelling(token: &WordToken, ranked: suggestions::Ranked) -> MisspelledWord {
    MisspelledWord {
        word: token.text.clone(),
        start_index: token.start_index,
        end_index: token.end_index,
        suggestions: ranked.suggestions,
        best_suggestion: ranked.best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::fake::ScriptedDictionary;
    use std::fs;
    use tempfile::tempdir;

    fn english() -> ScriptedDictionary {
        ScriptedDictionary::new("en_US")
            .with_words(&[
                "a", "i", "I", "want", "the", "brown", "fox", "quick", "hello", "help", "say",
                "thank", "you", "good", "here", "all", "is", "to",
            ])
            .suggesting("quik", &["quick", "quirk"])
            .suggesting("teh", &["the", "tea", "ten"])
            .suggesting("wnt", &["want", "went", "wont"])
            .suggesting("xylo", &["xylophone", "xyloid"])
    }

    fn spanish() -> ScriptedDictionary {
        ScriptedDictionary::new("es_ES")
            .with_words(&["muchas", "gracias", "hola", "que", "tal"])
            .suggesting("quik", &["quiosco", "quick"])
            .suggesting("grasias", &["gracias"])
    }

    fn engine() -> SpellEngine {
        SpellEngine::with_dictionaries(
            Config::default(),
            DictionarySet::new(Box::new(english()), Some(Box::new(spanish()))),
        )
    }

    #[test]
    fn test_misspelled_word_range_and_best_guess() {
        let engine = engine();
        let analysis = engine.analyze("the quik brown fox", 18);

        assert_eq!(analysis.misspelled.len(), 1);
        let quik = &analysis.misspelled[0];
        assert_eq!(quik.word, "quik");
        assert_eq!((quik.start_index, quik.end_index), (4, 8));
        assert_eq!(quik.suggestions, vec!["quick", "quirk", "quiosco"]);
        assert_eq!(quik.best_suggestion.as_deref(), Some("quick"));
        assert!(analysis.current_word_correction.is_none());
    }

    #[test]
    fn test_current_word_correction_tracked_separately() {
        let engine = engine();
        let analysis = engine.analyze("the quik", 8);

        assert!(analysis.misspelled.is_empty());
        let current = analysis.current_word_correction.unwrap();
        assert_eq!(current.word, "quik");
        assert_eq!(current.best_suggestion.as_deref(), Some("quick"));
        assert_eq!(analysis.current_word.unwrap().text, "quik");
    }

    #[test]
    fn test_ignored_and_known_words_not_flagged() {
        let engine = engine();
        let analysis = engine.analyze("NASA said lol to the iPhone, Gracias 42 ", 40);
        let words: Vec<_> = analysis.misspelled.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["said"]);
    }

    #[test]
    fn test_phrase_prediction_scenario() {
        let engine = engine();
        let autocomplete = engine.autocomplete("Muchas ", 7).unwrap();
        assert_eq!(autocomplete.original, "");
        assert_eq!(autocomplete.completion, "gracias");
        assert_eq!((autocomplete.start_index, autocomplete.end_index), (7, 7));
    }

    #[test]
    fn test_curated_prefix_scenario() {
        let engine = engine();
        let autocomplete = engine.autocomplete("hel", 3).unwrap();
        assert_eq!(autocomplete.completion, "hello");
        assert!(autocomplete.completion.len() > autocomplete.original.len());
    }

    #[test]
    fn test_dictionary_completion_for_misspelled_prefix() {
        let engine = engine();
        let autocomplete = engine.autocomplete("a xylo", 6).unwrap();
        assert_eq!(autocomplete.completion, "xylophone");
        assert_eq!(autocomplete.remaining_text, "phone");
        assert_eq!((autocomplete.start_index, autocomplete.end_index), (2, 6));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let engine = engine();
        let text = "I wnt teh quik hel";
        assert_eq!(engine.analyze(text, 18), engine.analyze(text, 18));
    }

    #[test]
    fn test_apply_all_corrections_idempotent_on_clean_text() {
        let engine = engine();
        let text = "the quick brown fox";
        let misspelled = engine.misspelled_words(text, 0);
        assert!(misspelled.is_empty());
        assert_eq!(engine.apply_all_corrections(text, &misspelled), text);
    }

    #[test]
    fn test_apply_all_corrections() {
        let engine = engine();
        let text = "I wnt teh quick fox";
        let misspelled = engine.misspelled_words(text, 0);
        assert_eq!(engine.apply_all_corrections(text, &misspelled), "I want the quick fox");
    }

    #[test]
    fn test_auto_correct_on_space() {
        let engine = engine();
        let result = engine.auto_correct_on_space("I want teh", 10).unwrap();
        assert!(result.corrected);
        assert_eq!(result.text, "I want the");
        assert_eq!(result.caret, 10 + 3 - 3);
        assert_eq!(result.original, "teh");
        assert_eq!(result.replacement, "the");
    }

    #[test]
    fn test_auto_correct_on_space_shifts_caret_and_keeps_case() {
        let engine = engine();
        let result = engine.auto_correct_on_space("Wnt", 3).unwrap();
        assert_eq!(result.text, "Want");
        assert_eq!(result.caret, 4);
    }

    #[test]
    fn test_auto_correct_on_space_leaves_known_and_ignored() {
        let engine = engine();
        assert!(engine.auto_correct_on_space("I want the", 10).is_none());
        assert!(engine.auto_correct_on_space("I want NASA", 11).is_none());
        assert!(engine.auto_correct_on_space("I want teh ", 11).is_none());
        assert!(engine.auto_correct_on_space("zzxq", 4).is_none());
    }

    #[test]
    fn test_apply_tab_corrects_then_completes() {
        let engine = engine();
        let result = engine.apply_tab("I wnt teh hel", 13);

        assert_eq!(result.text, "I want the hello");
        assert_eq!(result.caret, 16);
        assert_eq!(result.corrections_applied, 2);
        assert!(result.autocomplete_applied);
    }

    #[test]
    fn test_apply_tab_caret_in_middle() {
        let engine = engine();
        // caret right after "teh"; the trailing word is untouched text
        let result = engine.apply_tab("wnt teh fox", 7);
        assert_eq!(result.text, "want the fox");
        assert_eq!(result.caret, 8);
        assert!(!result.autocomplete_applied);
    }

    #[test]
    fn test_apply_tab_current_word_correction() {
        let engine = engine();
        let result = engine.apply_tab("the quik", 8);
        assert_eq!(result.text, "the quick");
        assert_eq!(result.caret, 9);
        assert_eq!(result.corrections_applied, 1);
    }

    #[test]
    fn test_apply_tab_phrase_insertion() {
        let engine = engine();
        let result = engine.apply_tab("Muchas ", 7);
        assert_eq!(result.text, "Muchas gracias");
        assert_eq!(result.caret, 14);
    }

    #[test]
    fn test_apply_tab_caret_invariant() {
        let engine = engine();
        for (text, caret) in [("", 0), ("teh", 0), ("wnt teh", 99), ("hel", 1), ("é", 1)] {
            let result = engine.apply_tab(text, caret);
            assert!(result.caret <= offsets::utf16_len(&result.text), "{:?}", text);
        }
    }

    #[test]
    fn test_unloaded_engine_degrades() {
        let engine = SpellEngine::new(Config::default());
        assert!(!engine.is_loaded());
        assert_eq!(engine.analyze("teh quik", 8), Analysis::default());
        assert!(engine.auto_correct_on_space("teh", 3).is_none());

        let tab = engine.apply_tab("teh", 99);
        assert_eq!(tab.text, "teh");
        assert_eq!(tab.caret, 3);
        assert!(!tab.autocomplete_applied);
    }

    #[test]
    fn test_single_letter_ignored_word_gets_no_completion() {
        let engine = engine();
        assert!(engine.autocomplete("q", 1).is_none());
        assert_eq!(engine.autocomplete("qu", 2).unwrap().completion, "question");
    }

    #[test]
    fn test_host_driven_load_reports_loading() {
        let mut engine = SpellEngine::new(Config::default());
        assert!(engine.begin_load());
        assert!(matches!(engine.state(), LoadState::Loading));
        assert!(!engine.is_loaded());
        assert_eq!(engine.analyze("teh", 3), Analysis::default());

        // a second start and ensure_loaded both leave the pending load alone
        assert!(!engine.begin_load());
        assert!(matches!(engine.ensure_loaded(), LoadState::Loading));

        let set = DictionarySet::new(Box::new(english()), None);
        assert!(matches!(engine.finish_load(Ok(set)), LoadState::Ready(_)));
        assert!(!engine.begin_load());
        assert_eq!(engine.auto_correct_on_space("teh", 3).unwrap().text, "the");
    }

    #[test]
    fn test_host_driven_load_failure() {
        let mut engine = SpellEngine::new(Config::default());
        assert!(engine.begin_load());
        engine.finish_load(Err(DictionaryLoadError::NoDirectory));
        assert!(matches!(engine.state(), LoadState::Failed(_)));
        assert_eq!(engine.error(), Some("no dictionary directory configured"));
    }

    #[test]
    fn test_ensure_loaded_failure_is_sticky() {
        let dir = tempdir().unwrap();
        let config = Config {
            dictionary_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let mut engine = SpellEngine::new(config);

        assert!(matches!(engine.ensure_loaded(), LoadState::Failed(_)));
        assert!(engine.error().unwrap().contains("en_US"));

        // installing the dictionary later needs an explicit reload
        fs::write(dir.path().join("en_US.words"), "hello\n").unwrap();
        assert!(matches!(engine.ensure_loaded(), LoadState::Failed(_)));
        assert!(matches!(engine.reload(), LoadState::Ready(_)));
        assert!(engine.is_loaded());
        assert!(engine.error().is_none());
    }

    #[test]
    fn test_ensure_loaded_from_word_lists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en_US.words"), "the\nquick\nbrown\nfox\n").unwrap();
        fs::write(dir.path().join("es_ES.words"), "muchas\ngracias\n").unwrap();
        let config = Config {
            dictionary_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let mut engine = SpellEngine::new(config);
        engine.ensure_loaded();
        assert!(engine.is_loaded());

        let misspelled = engine.misspelled_words("the quik brown fox gracias", 0);
        assert_eq!(misspelled.len(), 1);
        assert_eq!(misspelled[0].best_suggestion.as_deref(), Some("quick"));
    }
}
