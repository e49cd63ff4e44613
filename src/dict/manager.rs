use super::{load_locale, LocaleFiles};
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

// LibreOffice-derived Hunspell dictionaries, one directory per language
const DICTIONARIES_BASE_URL: &str =
    "https://raw.githubusercontent.com/wooorm/dictionaries/main/dictionaries";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    Hunspell,
    WordList,
}

impl DictionaryFormat {
    fn describe(self) -> &'static str {
        match self {
            DictionaryFormat::Hunspell => "Hunspell (.aff + .dic)",
            DictionaryFormat::WordList => "Word list (FST)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryInfo {
    pub locale: String,
    pub format: DictionaryFormat,
    pub paths: Vec<PathBuf>,
    pub size_bytes: u64,
}

/// Source directory name for the locales that can be downloaded.
fn remote_name(locale: &str) -> Option<&'static str> {
    match locale {
        "en_US" => Some("en"),
        "en_GB" => Some("en-GB"),
        "es_ES" => Some("es"),
        "es_MX" => Some("es-MX"),
        _ => None,
    }
}

/// Installed locales in `dir`, sorted by locale.
pub fn installed_dictionaries(dir: &Path) -> Result<Vec<DictionaryInfo>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut locales = BTreeSet::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read dictionary directory: {}", dir.display()))?
    {
        let path = entry?.path();
        let is_dictionary = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("aff" | "dic" | "words")
        );
        if let (true, Some(stem)) = (is_dictionary, path.file_stem().and_then(|s| s.to_str())) {
            locales.insert(stem.to_string());
        }
    }

    let mut infos = Vec::new();
    for locale in locales {
        if let Some(info) = describe(dir, &locale)? {
            infos.push(info);
        }
    }
    Ok(infos)
}

fn describe(dir: &Path, locale: &str) -> Result<Option<DictionaryInfo>> {
    let files = LocaleFiles::new(dir, locale);

    let (format, paths) = if files.has_hunspell() {
        (DictionaryFormat::Hunspell, vec![files.affix, files.words])
    } else if files.word_list.exists() {
        (DictionaryFormat::WordList, vec![files.word_list])
    } else {
        return Ok(None);
    };

    let mut size_bytes = 0;
    for path in &paths {
        size_bytes += fs::metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();
    }

    Ok(Some(DictionaryInfo {
        locale: locale.to_string(),
        format,
        paths,
        size_bytes,
    }))
}

pub fn list_dictionaries(dir: &Path) -> Result<()> {
    let installed = installed_dictionaries(dir)?;

    if installed.is_empty() {
        println!("{}", "No dictionaries installed.".yellow());
        println!(
            "Run {} to download a dictionary.",
            "typeahead dict download en_US".cyan()
        );
        return Ok(());
    }

    println!("{}", "Installed dictionaries:".bold());
    println!();

    for info in &installed {
        println!(
            "  {} {} {} ({})",
            "✓".green(),
            info.locale.cyan().bold(),
            info.format.describe().dimmed(),
            format!("{}KB", info.size_bytes / 1024).dimmed()
        );
    }

    println!();
    println!("Dictionary directory: {}", dir.display().to_string().dimmed());

    Ok(())
}

pub fn show_info(dir: &Path, locale: &str) -> Result<()> {
    let Some(info) = describe(dir, locale)? else {
        println!(
            "{} Dictionary for {} not found.",
            "✗".red().bold(),
            locale.yellow()
        );
        println!(
            "Run {} to download it.",
            format!("typeahead dict download {}", locale).cyan()
        );
        return Ok(());
    };

    println!("{}", format!("Dictionary: {}", info.locale).bold());
    for path in &info.paths {
        println!("  Path: {}", path.display());
    }
    println!("  Size: {} KB", info.size_bytes / 1024);
    println!("  Format: {}", info.format.describe());

    match load_locale(locale, dir) {
        Ok(dict) => {
            let probe = if dict.check("the") || dict.check("de") {
                "ok".green()
            } else {
                "loaded, common words missing".yellow()
            };
            println!("  Status: {}", probe);
        }
        Err(e) => {
            println!("  {}: {}", "Error loading dictionary".red(), e);
        }
    }

    Ok(())
}

pub fn download_dictionary(dir: &Path, locale: &str) -> Result<()> {
    let Some(remote) = remote_name(locale) else {
        anyhow::bail!(
            "Locale '{}' is not available for download. Supported: en_US, en_GB, es_ES, es_MX.",
            locale
        );
    };

    println!(
        "{} dictionary for {}...",
        "Downloading".cyan().bold(),
        locale.yellow()
    );

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create dictionary directory: {}", dir.display()))?;

    let files = LocaleFiles::new(dir, locale);
    for (remote_file, target) in [("index.aff", &files.affix), ("index.dic", &files.words)] {
        let url = format!("{}/{}/{}", DICTIONARIES_BASE_URL, remote, remote_file);
        let body = fetch(&url)?;
        fs::write(target, body)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        info!(url = %url, path = %target.display(), "downloaded dictionary resource");
    }

    // Make sure what we wrote actually parses before reporting success
    load_locale(locale, dir).with_context(|| format!("Downloaded {} dictionary is unusable", locale))?;

    println!(
        "{} Dictionary installed: {}",
        "✓".green().bold(),
        dir.display().to_string().cyan()
    );

    Ok(())
}

fn fetch(url: &str) -> Result<String> {
    println!("Source: {}", url.dimmed());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Downloading...");

    let response = reqwest::blocking::get(url).context("Failed to download dictionary")?;
    if !response.status().is_success() {
        pb.finish_and_clear();
        anyhow::bail!("Failed to download dictionary: HTTP {}", response.status());
    }

    let body = response.text().context("Failed to read dictionary response")?;
    pb.finish_with_message("Download complete");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_installed_dictionaries_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(installed_dictionaries(&missing).unwrap().is_empty());
    }

    #[test]
    fn test_installed_dictionaries_formats() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en_US.aff"), "SET UTF-8\n").unwrap();
        fs::write(dir.path().join("en_US.dic"), "1\nhello\n").unwrap();
        fs::write(dir.path().join("es_ES.words"), "hola\n").unwrap();
        // half-installed Hunspell pair is not listed
        fs::write(dir.path().join("fr_FR.dic"), "1\nbonjour\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let installed = installed_dictionaries(dir.path()).unwrap();
        let summary: Vec<_> = installed
            .iter()
            .map(|i| (i.locale.as_str(), i.format))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("en_US", DictionaryFormat::Hunspell),
                ("es_ES", DictionaryFormat::WordList)
            ]
        );
        assert_eq!(installed[0].paths.len(), 2);
        assert!(installed[1].size_bytes > 0);
    }

    #[test]
    fn test_download_rejects_unknown_locale() {
        let dir = tempdir().unwrap();
        let err = download_dictionary(dir.path(), "xx_XX").unwrap_err();
        assert!(err.to_string().contains("xx_XX"));
    }

    #[test]
    fn test_remote_names() {
        assert_eq!(remote_name("en_US"), Some("en"));
        assert_eq!(remote_name("es_ES"), Some("es"));
        assert_eq!(remote_name("de_DE"), None);
    }
}
