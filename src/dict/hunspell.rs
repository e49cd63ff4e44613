use super::{DictionaryLoadError, LocaleDictionary};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Hunspell-format locale (affix rules + word list), checked with `spellbook`.
pub struct HunspellDictionary {
    locale: String,
    inner: spellbook::Dictionary,
}

impl HunspellDictionary {
    pub fn load(locale: &str, affix: &Path, words: &Path) -> Result<Self, DictionaryLoadError> {
        let aff = read_resource(locale, affix)?;
        let dic = read_resource(locale, words)?;
        Self::from_sources(locale, &aff, &dic)
    }

    /// Build from in-memory `.aff` and `.dic` contents.
    pub fn from_sources(locale: &str, aff: &str, dic: &str) -> Result<Self, DictionaryLoadError> {
        let inner = spellbook::Dictionary::new(aff, dic).map_err(|e| DictionaryLoadError::Parse {
            locale: locale.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            locale: locale.to_string(),
            inner,
        })
    }
}

fn read_resource(locale: &str, path: &Path) -> Result<String, DictionaryLoadError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DictionaryLoadError::Missing {
            locale: locale.to_string(),
            path: path.to_path_buf(),
        },
        _ => DictionaryLoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

impl LocaleDictionary for HunspellDictionary {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn check(&self, word: &str) -> bool {
        self.inner.check(word)
    }

    fn suggest(&self, word: &str, limit: usize) -> Vec<String> {
        let mut out = Vec::new();
        self.inner.suggest(word, &mut out);
        out.truncate(limit);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const AFF: &str = "SET UTF-8\nTRY esianrtolcdugmphbyfvkwz\n";
    const DIC: &str = "4\nhello\nworld\nquick\nbrown\n";

    #[test]
    fn test_check_from_sources() {
        let dict = HunspellDictionary::from_sources("en_US", AFF, DIC).unwrap();
        assert_eq!(dict.locale(), "en_US");
        assert!(dict.check("hello"));
        assert!(dict.check("quick"));
        assert!(!dict.check("quik"));
    }

    #[test]
    fn test_suggest_respects_limit() {
        let dict = HunspellDictionary::from_sources("en_US", AFF, DIC).unwrap();
        assert!(dict.suggest("quik", 0).is_empty());
        assert!(dict.suggest("quik", 3).len() <= 3);
    }

    #[test]
    fn test_load_missing_affix() {
        let dir = tempdir().unwrap();
        let words = dir.path().join("en_US.dic");
        fs::write(&words, DIC).unwrap();

        let err = HunspellDictionary::load("en_US", &dir.path().join("en_US.aff"), &words)
            .err()
            .unwrap();
        assert!(matches!(err, DictionaryLoadError::Missing { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let affix = dir.path().join("en_US.aff");
        let words = dir.path().join("en_US.dic");
        fs::write(&affix, AFF).unwrap();
        fs::write(&words, DIC).unwrap();

        let dict = HunspellDictionary::load("en_US", &affix, &words).unwrap();
        assert!(dict.check("world"));
    }
}
