pub mod hunspell;
pub mod manager;
pub mod wordlist;

#[cfg(test)]
pub(crate) mod fake;

use crate::config::Config;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub use hunspell::HunspellDictionary;
pub use wordlist::WordListDictionary;

/// Spelling capability for a single locale.
///
/// Implementations are immutable once constructed; `check` and `suggest`
/// never mutate shared state, so one instance can serve any number of
/// buffers concurrently.
pub trait LocaleDictionary: Send + Sync {
    fn locale(&self) -> &str;

    /// Case-sensitive membership test.
    fn check(&self, word: &str) -> bool;

    /// Candidates in the dictionary's own preference order, at most `limit`.
    fn suggest(&self, word: &str, limit: usize) -> Vec<String>;
}

#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    #[error("no dictionary installed for {locale} (missing {})", path.display())]
    Missing { locale: String, path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {locale} dictionary: {message}")]
    Parse { locale: String, message: String },

    #[error("no dictionary directory configured")]
    NoDirectory,
}

/// Resource paths for one locale inside a dictionary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFiles {
    pub affix: PathBuf,
    pub words: PathBuf,
    pub word_list: PathBuf,
}

impl LocaleFiles {
    pub fn new(dir: &Path, locale: &str) -> Self {
        Self {
            affix: dir.join(format!("{}.aff", locale)),
            words: dir.join(format!("{}.dic", locale)),
            word_list: dir.join(format!("{}.words", locale)),
        }
    }

    pub fn has_hunspell(&self) -> bool {
        self.affix.exists() && self.words.exists()
    }
}

/// Load one locale from `dir`, preferring Hunspell `.aff`/`.dic` data and
/// falling back to a plain `.words` list.
pub fn load_locale(
    locale: &str,
    dir: &Path,
) -> Result<Box<dyn LocaleDictionary>, DictionaryLoadError> {
    let files = LocaleFiles::new(dir, locale);

    if files.affix.exists() || files.words.exists() {
        let dict = HunspellDictionary::load(locale, &files.affix, &files.words)?;
        return Ok(Box::new(dict));
    }

    if files.word_list.exists() {
        let dict = WordListDictionary::load(locale, &files.word_list)?;
        return Ok(Box::new(dict));
    }

    Err(DictionaryLoadError::Missing {
        locale: locale.to_string(),
        path: files.words,
    })
}

/// The loaded locales: one primary and an optional secondary.
pub struct DictionarySet {
    primary: Box<dyn LocaleDictionary>,
    secondary: Option<Box<dyn LocaleDictionary>>,
}

impl DictionarySet {
    pub fn new(
        primary: Box<dyn LocaleDictionary>,
        secondary: Option<Box<dyn LocaleDictionary>>,
    ) -> Self {
        Self { primary, secondary }
    }

    /// Load the configured locales.
    ///
    /// The primary locale is mandatory. A secondary locale that fails to
    /// load is dropped with a warning and the set continues with the primary
    /// alone.
    pub fn load(config: &Config) -> Result<Self, DictionaryLoadError> {
        let dir = config
            .dictionary_dir()
            .ok_or(DictionaryLoadError::NoDirectory)?;

        let primary = load_locale(&config.primary_locale, &dir)?;
        info!(locale = %config.primary_locale, dir = %dir.display(), "loaded primary dictionary");

        let secondary = match &config.secondary_locale {
            Some(locale) => match load_locale(locale, &dir) {
                Ok(dict) => {
                    info!(locale = %locale, "loaded secondary dictionary");
                    Some(dict)
                }
                Err(e) => {
                    warn!(locale = %locale, error = %e, "secondary dictionary unavailable");
                    None
                }
            },
            None => None,
        };

        Ok(Self::new(primary, secondary))
    }

    pub fn primary(&self) -> &dyn LocaleDictionary {
        self.primary.as_ref()
    }

    pub fn secondary(&self) -> Option<&dyn LocaleDictionary> {
        self.secondary.as_deref()
    }

    pub fn locales(&self) -> impl Iterator<Item = &dyn LocaleDictionary> {
        std::iter::once(self.primary()).chain(self.secondary())
    }

    /// True when any locale accepts the word as typed or lower-cased.
    pub fn is_known(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.locales()
            .any(|dict| dict.check(word) || (lower != word && dict.check(&lower)))
    }
}

impl fmt::Debug for DictionarySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionarySet")
            .field("primary", &self.primary.locale())
            .field("secondary", &self.secondary.as_ref().map(|d| d.locale()))
            .finish()
    }
}
