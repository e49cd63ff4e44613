use crate::checker::offsets::byte_offset;
use crate::{Analysis, AutocompleteSuggestion, MisspelledWord, SpaceCorrection, TabResult};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const CARET_MARKER: &str = "│";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}

pub fn print_analysis(text: &str, analysis: &Analysis, colored_output: bool, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_json(analysis);
        return;
    }

    let mut flagged: Vec<&MisspelledWord> = analysis.misspelled.iter().collect();
    flagged.extend(analysis.current_word_correction.as_ref());
    flagged.sort_by_key(|m| m.start_index);

    println!("{}", highlight(text, &flagged, colored_output));

    for word in &flagged {
        let range = format!("{}..{}", word.start_index, word.end_index);
        let typing = if Some(*word) == analysis.current_word_correction.as_ref() {
            " (typing)"
        } else {
            ""
        };

        if colored_output {
            println!(
                "  {} {}{}",
                range.blue().bold(),
                word.word.red().bold(),
                typing.dimmed()
            );
        } else {
            println!("  {} {}{}", range, word.word, typing);
        }

        if !word.suggestions.is_empty() {
            println!("    → {}", format_suggestions(word, colored_output));
        }
    }

    if let Some(autocomplete) = &analysis.autocomplete {
        print_ghost_text(autocomplete, colored_output);
    }
}

pub fn print_completion(
    text: &str,
    autocomplete: Option<&AutocompleteSuggestion>,
    colored_output: bool,
    format: OutputFormat,
) {
    if format == OutputFormat::Json {
        print_json(&autocomplete);
        return;
    }

    match autocomplete {
        Some(autocomplete) => {
            let start = byte_offset(text, autocomplete.end_index);
            let ghost = if colored_output {
                autocomplete.remaining_text.dimmed().to_string()
            } else {
                format!("[{}]", autocomplete.remaining_text)
            };
            println!("{}{}{}", &text[..start], ghost, &text[start..]);
            print_ghost_text(autocomplete, colored_output);
        }
        None => println!("No completion."),
    }
}

pub fn print_tab(result: &TabResult, colored_output: bool, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_json(result);
        return;
    }

    println!("{}", with_caret(&result.text, result.caret, colored_output));

    let noun = if result.corrections_applied == 1 {
        "correction"
    } else {
        "corrections"
    };
    let completed = if result.autocomplete_applied {
        ", completed"
    } else {
        ""
    };
    let summary = format!("{} {}{}", result.corrections_applied, noun, completed);
    if colored_output {
        println!("{} {}", "✓".green().bold(), summary);
    } else {
        println!("✓ {}", summary);
    }
}

pub fn print_space(
    text: &str,
    caret: usize,
    correction: Option<&SpaceCorrection>,
    colored_output: bool,
    format: OutputFormat,
) {
    if format == OutputFormat::Json {
        print_json(&correction);
        return;
    }

    match correction {
        Some(c) => {
            println!("{}", with_caret(&c.text, c.caret, colored_output));
            if colored_output {
                println!("  {} → {}", c.original.red(), c.replacement.green().bold());
            } else {
                println!("  {} → {}", c.original, c.replacement);
            }
        }
        None => {
            println!("{}", with_caret(text, caret, colored_output));
            println!("No correction.");
        }
    }
}

fn print_ghost_text(autocomplete: &AutocompleteSuggestion, colored_output: bool) {
    if colored_output {
        println!(
            "  {} {}",
            "⇥".cyan().bold(),
            autocomplete.completion.cyan()
        );
    } else {
        println!("  ⇥ {}", autocomplete.completion);
    }
}

fn format_suggestions(word: &MisspelledWord, colored_output: bool) -> String {
    word.suggestions
        .iter()
        .map(|s| {
            let best = word.best_suggestion.as_deref().map(str::to_lowercase)
                == Some(s.to_lowercase());
            match (colored_output, best) {
                (true, true) => s.green().bold().to_string(),
                (true, false) => s.green().to_string(),
                (false, true) => format!("*{}", s),
                (false, false) => s.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Mark every flagged range; `words` must be sorted and non-overlapping.
fn highlight(text: &str, words: &[&MisspelledWord], colored_output: bool) -> String {
    let mut out = String::new();
    let mut last = 0;

    for word in words {
        let start = byte_offset(text, word.start_index);
        let end = byte_offset(text, word.end_index);
        out.push_str(&text[last..start]);

        let span = &text[start..end];
        if colored_output {
            out.push_str(&span.red().underline().to_string());
        } else {
            out.push_str(&format!("_{}_", span));
        }
        last = end;
    }

    out.push_str(&text[last..]);
    out
}

fn with_caret(text: &str, caret: usize, colored_output: bool) -> String {
    let at = byte_offset(text, caret);
    let marker = if colored_output {
        CARET_MARKER.yellow().bold().to_string()
    } else {
        CARET_MARKER.to_string()
    };
    format!("{}{}{}", &text[..at], marker, &text[at..])
}
