//! Coverage of the standard single-byte document encoding.
//!
//! Text drawn with a non-embedded font must be expressible in the range
//! both StandardEncoding-derived simple fonts and the PDF document encoding
//! agree on: printable ASCII plus the Latin-1 supplement.

/// Check if a character lies in `[32, 126] ∪ [160, 255]`.
pub fn is_standard_encodable(c: char) -> bool {
    matches!(u32::from(c), 32..=126 | 160..=255)
}

/// Check if any character of `text` requires an embedded font.
pub fn needs_embedding(text: &str) -> bool {
    text.chars().any(|c| !is_standard_encodable(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_boundaries() {
        assert!(!is_standard_encodable('\u{1F}'));
        assert!(is_standard_encodable(' '));
        assert!(is_standard_encodable('~'));
        assert!(!is_standard_encodable('\u{7F}'));
        assert!(!is_standard_encodable('\u{9F}'));
        assert!(is_standard_encodable('\u{A0}'));
        assert!(is_standard_encodable('ÿ'));
        assert!(!is_standard_encodable('Ā'));
    }

    #[test]
    fn test_needs_embedding() {
        assert!(!needs_embedding("Hello, world!"));
        assert!(!needs_embedding("café naïve"));
        assert!(!needs_embedding(""));
        assert!(needs_embedding("price: 5€"));
        assert!(needs_embedding("한국어"));
        assert!(needs_embedding("tab\tseparated"));
    }
}
