//! Attachment tag extraction.
//!
//! Exports reference media inline as `<LABEL: FILENAME>`, e.g.
//! `<Attachment: 00000042-PHOTO-2023-01-15-10-30-45.jpg>` or the localized
//! `<Anhang: bild.jpg>`. The label text varies by export language and is not
//! interpreted; only the filename matters. The first tag on a record's first
//! line becomes the record's attachment; every tag is removed from the
//! display text.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::Attachment;

/// `<LABEL: FILENAME>` with any non-colon label.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^:>]+):\s*([^>]+)>").expect("tag pattern is valid"));

/// A tag plus the whitespace around it, for removal from display text.
static TAG_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*<[^:>]+:\s*[^>]+>\s*").expect("tag strip pattern is valid"));

/// Pulls the first attachment tag out of a content line.
///
/// Returns the classified attachment (if any tag was present) and the
/// remaining display text with all tags removed and trimmed.
#[must_use]
pub fn extract_attachment(content: &str) -> (Option<Attachment>, String) {
    let attachment = TAG_RE
        .captures(content)
        .map(|caps| Attachment::new(caps[2].trim()));

    let text = if attachment.is_some() {
        TAG_STRIP_RE.replace_all(content, " ").trim().to_string()
    } else {
        content.to_string()
    };

    (attachment, text)
}
