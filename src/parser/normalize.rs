//! Line normalization.
//!
//! Exports from iOS pepper lines with U+200E LEFT-TO-RIGHT MARK, usually in
//! front of attachment tags and bracketed timestamps. The mark is invisible
//! and carries no content, so it is stripped everywhere before any pattern
//! matching. Other invisible code points (U+200F, zero-width spaces) are
//! left alone; they have not shown up in real exports.

/// Strips every U+200E and trims surrounding whitespace.
#[must_use]
pub fn normalize_line(line: &str) -> String {
    let stripped: String = line.chars().filter(|&c| c != '\u{200e}').collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_ltr_marks() {
        assert_eq!(normalize_line("\u{200e}hello"), "hello");
        assert_eq!(normalize_line("a\u{200e}b\u{200e}c"), "abc");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_line("  hello  \t"), "hello");
        assert_eq!(normalize_line("\u{200e}  hello  "), "hello");
    }

    #[test]
    fn test_plain_line_unchanged() {
        assert_eq!(normalize_line("hello world"), "hello world");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(normalize_line("   "), "");
        assert_eq!(normalize_line("\u{200e}"), "");
    }

    #[test]
    fn test_other_invisibles_kept() {
        assert_eq!(normalize_line("a\u{200f}b"), "a\u{200f}b");
    }
}
