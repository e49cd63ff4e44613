//! Conversions between UTF-16 code-unit offsets (what text widgets report)
//! and byte offsets into a Rust `str`.

pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

pub fn clamp_caret(text: &str, caret: usize) -> usize {
    caret.min(utf16_len(text))
}

/// Byte offset of a UTF-16 offset. An offset that lands inside a surrogate
/// pair moves forward to the next char boundary; offsets past the end map to
/// `text.len()`.
pub fn byte_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        if units >= utf16_offset {
            return idx;
        }
        units += ch.len_utf16();
    }
    text.len()
}

pub fn char_before(text: &str, utf16_offset: usize) -> Option<char> {
    text[..byte_offset(text, utf16_offset)].chars().next_back()
}

pub fn char_at(text: &str, utf16_offset: usize) -> Option<char> {
    text[byte_offset(text, utf16_offset)..].chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_match_bytes() {
        assert_eq!(byte_offset("hello", 3), 3);
        assert_eq!(byte_offset("hello", 99), 5);
        assert_eq!(utf16_len("hello"), 5);
    }

    #[test]
    fn test_accented_offsets() {
        // 'ñ' is one UTF-16 unit but two bytes
        let text = "año nuevo";
        assert_eq!(utf16_len(text), 9);
        assert_eq!(byte_offset(text, 3), 4);
        assert_eq!(char_before(text, 3), Some('o'));
        assert_eq!(char_at(text, 3), Some(' '));
    }

    #[test]
    fn test_surrogate_pairs() {
        let text = "a😀b";
        assert_eq!(utf16_len(text), 4);
        assert_eq!(byte_offset(text, 3), 5);
        assert_eq!(byte_offset(text, 2), 5);
        assert_eq!(clamp_caret(text, 10), 4);
    }
}
