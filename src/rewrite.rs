//! Attachment-tag extension rewriting.
//!
//! After media files are transcoded (say `.mov` → `.mp4`), the export text
//! still references the old filenames inside its `<LABEL: FILENAME>` tags.
//! This pass rewrites just the extension inside matching tags, preserving
//! label, brackets, and the rest of the line byte-for-byte. Matching is
//! case-insensitive on the extension; everything outside tags is untouched.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{ChatpressError, Result};

fn validate_extension(ext: &str) -> Result<()> {
    if ext.is_empty() {
        return Err(ChatpressError::invalid_extension(ext, "extension is empty"));
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ChatpressError::invalid_extension(
            ext,
            "extension must be alphanumeric",
        ));
    }
    Ok(())
}

/// Rewrites `.{from_ext}` to `.{to_ext}` inside every attachment tag.
///
/// Returns the rewritten text and the number of tags changed. Extensions are
/// given without the leading dot.
///
/// # Errors
///
/// [`ChatpressError::InvalidExtension`] if either extension is empty or not
/// alphanumeric.
///
/// # Example
///
/// ```rust
/// use chatpress::rewrite::rewrite_attachment_extensions;
///
/// let input = "[1.2.23, 10:00] A: <Attachment: clip.MOV>";
/// let (out, count) = rewrite_attachment_extensions(input, "mov", "mp4").unwrap();
/// assert_eq!(out, "[1.2.23, 10:00] A: <Attachment: clip.mp4>");
/// assert_eq!(count, 1);
/// ```
pub fn rewrite_attachment_extensions(
    text: &str,
    from_ext: &str,
    to_ext: &str,
) -> Result<(String, usize)> {
    validate_extension(from_ext)?;
    validate_extension(to_ext)?;

    let pattern = format!(
        r"(?i)(<[^:>]+:\s*)([^>]+)\.{}(>)",
        regex::escape(from_ext)
    );
    let re = Regex::new(&pattern)
        .map_err(|e| ChatpressError::invalid_format(format!("bad rewrite pattern: {e}")))?;

    let mut count = 0usize;
    let rewritten = re.replace_all(text, |caps: &regex::Captures<'_>| {
        count += 1;
        format!("{}{}.{}{}", &caps[1], &caps[2], to_ext, &caps[3])
    });

    Ok((rewritten.into_owned(), count))
}

/// [`rewrite_attachment_extensions`] applied to a file in place.
///
/// The file is only written when at least one tag changed.
///
/// # Errors
///
/// [`ChatpressError::MissingInput`] if `path` does not exist, extension
/// validation errors, or I/O errors reading/writing the file.
pub fn rewrite_file<P: AsRef<Path>>(path: P, from_ext: &str, to_ext: &str) -> Result<usize> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ChatpressError::missing_input(path));
    }
    let text = fs::read_to_string(path)?;
    let (rewritten, count) = rewrite_attachment_extensions(&text, from_ext, to_ext)?;
    if count > 0 {
        fs::write(path, rewritten)?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rewrite() {
        let (out, count) =
            rewrite_attachment_extensions("<Attachment: a.mov>", "mov", "mp4").unwrap();
        assert_eq!(out, "<Attachment: a.mp4>");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_case_insensitive_extension() {
        let (out, count) =
            rewrite_attachment_extensions("<Attachment: CLIP.MOV>", "mov", "mp4").unwrap();
        assert_eq!(out, "<Attachment: CLIP.mp4>");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_label_and_brackets_preserved() {
        let (out, _) = rewrite_attachment_extensions("<Anhang:   b.mov>", "mov", "mp4").unwrap();
        assert_eq!(out, "<Anhang:   b.mp4>");
    }

    #[test]
    fn test_text_outside_tags_untouched() {
        let input = "watch movie.mov tonight <Attachment: c.mov> ok";
        let (out, count) = rewrite_attachment_extensions(input, "mov", "mp4").unwrap();
        assert_eq!(out, "watch movie.mov tonight <Attachment: c.mp4> ok");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_multiple_tags_counted() {
        let input = "<Attachment: a.mov>\n<Attachment: b.jpg>\n<Attachment: c.mov>";
        let (out, count) = rewrite_attachment_extensions(input, "mov", "mp4").unwrap();
        assert_eq!(count, 2);
        assert!(out.contains("a.mp4"));
        assert!(out.contains("b.jpg"));
        assert!(out.contains("c.mp4"));
    }

    #[test]
    fn test_no_match_zero_count() {
        let (out, count) = rewrite_attachment_extensions("<Attachment: a.jpg>", "mov", "mp4").unwrap();
        assert_eq!(out, "<Attachment: a.jpg>");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_extension_must_be_terminal() {
        // ".mov" in the middle of the filename is not an extension
        let (out, count) =
            rewrite_attachment_extensions("<Attachment: a.mov.backup>", "mov", "mp4").unwrap();
        assert_eq!(out, "<Attachment: a.mov.backup>");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_invalid_extensions_rejected() {
        assert!(rewrite_attachment_extensions("x", "", "mp4").is_err());
        assert!(rewrite_attachment_extensions("x", "mov", "m p4").is_err());
        assert!(rewrite_attachment_extensions("x", "mo/v", "mp4").is_err());
    }

    #[test]
    fn test_rewrite_missing_file() {
        let err = rewrite_file("/nonexistent/_chat.txt", "mov", "mp4").unwrap_err();
        assert!(err.is_missing_input());
    }
}
