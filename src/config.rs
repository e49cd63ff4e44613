use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = ".typeahead.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,

    #[serde(default = "default_secondary_locale")]
    pub secondary_locale: Option<String>,

    /// Directory holding `<locale>.aff`/`.dic` or `<locale>.words` files.
    #[serde(default)]
    pub dictionary_dir: Option<PathBuf>,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    #[serde(default = "default_suggestions_per_locale")]
    pub suggestions_per_locale: usize,

    #[serde(default)]
    pub weights: ScoringWeights,

    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    #[serde(default)]
    pub extra_ignored_words: Vec<String>,

    /// Shortest unrecognized word for which dictionary suggestions are
    /// offered as completions.
    #[serde(default = "default_min_dictionary_completion_len")]
    pub min_dictionary_completion_len: usize,
}

/// Weights for picking the best correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub first_letter: i32,
    pub length_penalty: i32,
    pub secondary_bonus: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            first_letter: 10,
            length_penalty: 2,
            secondary_bonus: 2,
        }
    }
}

/// Values supplied on the command line; they win over every config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub primary_locale: Option<String>,
    pub secondary_locale: Option<String>,
    pub no_secondary: bool,
    pub dictionary_dir: Option<PathBuf>,
    pub ignore_patterns: Vec<String>,
}

fn default_primary_locale() -> String {
    "en_US".to_string()
}

fn default_secondary_locale() -> Option<String> {
    Some("es_ES".to_string())
}

fn default_max_suggestions() -> usize {
    5
}

fn default_suggestions_per_locale() -> usize {
    3
}

fn default_min_dictionary_completion_len() -> usize {
    3
}

fn default_ignore_patterns() -> Vec<String> {
    vec![
        r"^https?$".to_string(),          // URL schemes split out of links
        r"^www$".to_string(),             // host prefixes
        r"(?i)^(?:ha|je|ja){2,}h?$".to_string(), // laughter: hahaha, jajaja
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_locale: default_primary_locale(),
            secondary_locale: default_secondary_locale(),
            dictionary_dir: None,
            max_suggestions: default_max_suggestions(),
            suggestions_per_locale: default_suggestions_per_locale(),
            weights: ScoringWeights::default(),
            ignore_patterns: default_ignore_patterns(),
            extra_ignored_words: Vec::new(),
            min_dictionary_completion_len: default_min_dictionary_completion_len(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        Ok(config.apply(overrides))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(locale) = overrides.primary_locale {
            self.primary_locale = locale;
        }
        if let Some(locale) = overrides.secondary_locale {
            self.secondary_locale = Some(locale);
        }
        if overrides.no_secondary {
            self.secondary_locale = None;
        }
        if let Some(dir) = overrides.dictionary_dir {
            self.dictionary_dir = Some(dir);
        }
        self.ignore_patterns.extend(overrides.ignore_patterns);
        self
    }

    fn merge(mut self, other: Self) -> Self {
        // Values in `other` win when they differ from the defaults
        if other.primary_locale != default_primary_locale() {
            self.primary_locale = other.primary_locale;
        }
        if other.secondary_locale != default_secondary_locale() {
            self.secondary_locale = other.secondary_locale;
        }
        if other.dictionary_dir.is_some() {
            self.dictionary_dir = other.dictionary_dir;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        if other.suggestions_per_locale != default_suggestions_per_locale() {
            self.suggestions_per_locale = other.suggestions_per_locale;
        }
        if other.weights != ScoringWeights::default() {
            self.weights = other.weights;
        }
        if other.ignore_patterns != default_ignore_patterns() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if !other.extra_ignored_words.is_empty() {
            self.extra_ignored_words = other.extra_ignored_words;
        }
        if other.min_dictionary_completion_len != default_min_dictionary_completion_len() {
            self.min_dictionary_completion_len = other.min_dictionary_completion_len;
        }
        self
    }

    /// Configured dictionary directory, or the per-user data directory.
    pub fn dictionary_dir(&self) -> Option<PathBuf> {
        self.dictionary_dir
            .clone()
            .or_else(|| Self::data_dir().map(|dir| dir.join("dictionaries")))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "typeahead").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "typeahead").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
