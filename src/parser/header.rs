//! Record boundary detection.
//!
//! A record starts at a header line: date, time, sender, first content line.
//! Both common export shapes are covered by one pattern:
//!
//! ```text
//! [15.01.24, 10:30:45] Alice: Hi        (bracketed, seconds)
//! 15/01/2024, 10:30 - Alice: Hi        (dash separator)
//! ```
//!
//! Lines that look like headers but fail the full pattern (a date prefix
//! without the sender colon, say) are structurally broken fragments and must
//! not be appended to the previous record as if they were continuations.

use std::sync::LazyLock;

use regex::Regex;

/// Full header: date, time, optional bracket/dash separators, sender, content.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[?(?P<date>\d{1,2}[./]\d{1,2}[./]\d{2,4}),?\s+(?P<time>\d{1,2}:\d{2}(?::\d{2})?)[\]\s]*[-:]?\s*(?P<sender>[^:]+):\s*(?P<content>.*)$",
    )
    .expect("header pattern is valid")
});

/// Loose header shape: a line that starts like a timestamp.
static HEADER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[?\d{1,2}[./]").expect("header prefix pattern is valid"));

/// The four fields of a matched header line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFields<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub content: &'a str,
}

/// Matches a normalized line against the header pattern.
///
/// Returns `None` for non-headers and for degenerate matches whose sender
/// trims to nothing; those fall through to [`is_header_shaped`] and are
/// dropped rather than glued onto the previous record.
#[must_use]
pub fn match_header(line: &str) -> Option<HeaderFields<'_>> {
    let caps = HEADER_RE.captures(line)?;

    let sender = caps.name("sender")?.as_str().trim();
    if sender.is_empty() {
        return None;
    }

    Some(HeaderFields {
        date: caps.name("date")?.as_str(),
        time: caps.name("time")?.as_str(),
        sender,
        content: caps.name("content")?.as_str().trim(),
    })
}

/// True for lines that begin like a timestamp, whether or not the full
/// header pattern matches. Used to tell malformed headers apart from
/// ordinary continuation text.
#[must_use]
pub fn is_header_shaped(line: &str) -> bool {
    HEADER_PREFIX_RE.is_match(line)
}
