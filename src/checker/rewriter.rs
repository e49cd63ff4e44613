//! Reverse-order batch patching with caret tracking.

use super::offsets::{byte_offset, clamp_caret, utf16_len};
use crate::{AutocompleteSuggestion, MisspelledWord};
use tracing::warn;

/// Replace `[start_index, end_index)` (UTF-16 units) with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start_index: usize,
    pub end_index: usize,
    pub replacement: String,
}

impl Edit {
    pub fn new(start_index: usize, end_index: usize, replacement: impl Into<String>) -> Self {
        Self {
            start_index,
            end_index,
            replacement: replacement.into(),
        }
    }

    /// Edit applying a misspelled word's best suggestion, if it has one.
    pub fn from_correction(word: &MisspelledWord) -> Option<Self> {
        word.best_suggestion
            .as_ref()
            .map(|best| Self::new(word.start_index, word.end_index, best.clone()))
    }

    pub fn from_autocomplete(autocomplete: &AutocompleteSuggestion) -> Self {
        Self::new(
            autocomplete.start_index,
            autocomplete.end_index,
            autocomplete.completion.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub text: String,
    pub caret: usize,
    pub applied: usize,
}

/// Caret position after `edit` is applied.
///
/// Edits wholly before the caret shift it by their length delta. An edit
/// whose range ends at or spans the caret (including an insertion at the
/// caret) snaps it to the end of the replacement. Edits starting at or after
/// the caret leave it alone.
pub fn shift_caret(caret: usize, edit: &Edit) -> usize {
    let inserted = utf16_len(&edit.replacement);

    if edit.end_index < caret {
        caret - (edit.end_index - edit.start_index) + inserted
    } else if edit.start_index < caret
        || (edit.start_index == caret && edit.end_index == caret)
    {
        edit.start_index + inserted
    } else {
        caret
    }
}

/// Apply non-overlapping edits from the highest start offset down so the
/// offsets of the remaining edits stay valid. An edit that overlaps one
/// already applied is dropped.
pub fn apply_edits(text: &str, mut edits: Vec<Edit>, caret: usize) -> Patched {
    let len = utf16_len(text);
    let mut caret = clamp_caret(text, caret);
    let mut out = text.to_string();
    let mut applied = 0;
    let mut floor = usize::MAX;

    edits.sort_by(|a, b| {
        b.start_index
            .cmp(&a.start_index)
            .then(b.end_index.cmp(&a.end_index))
    });

    for edit in edits {
        if edit.start_index > edit.end_index || edit.end_index > len {
            warn!(?edit, len, "dropping out-of-range edit");
            continue;
        }
        if edit.end_index > floor {
            warn!(?edit, "dropping overlapping edit");
            continue;
        }

        let start = byte_offset(&out, edit.start_index);
        let end = byte_offset(&out, edit.end_index);
        out.replace_range(start..end, &edit.replacement);

        caret = shift_caret(caret, &edit);
        floor = edit.start_index;
        applied += 1;
    }

    let caret = clamp_caret(&out, caret);
    Patched {
        text: out,
        caret,
        applied,
    }
}

/// Apply every best suggestion; words without one are left as typed.
pub fn apply_all_corrections(text: &str, misspelled: &[MisspelledWord]) -> String {
    let edits = misspelled.iter().filter_map(Edit::from_correction).collect();
    apply_edits(text, edits, 0).text
}

pub fn apply_autocomplete(text: &str, autocomplete: &AutocompleteSuggestion) -> String {
    apply_edits(text, vec![Edit::from_autocomplete(autocomplete)], 0).text
}
