//! Parser for exported chat transcripts.
//!
//! Line-oriented two-state machine: either no message is open, or one is.
//! Every line is normalized first, then classified:
//!
//! - header match: close the open record, open a new one;
//! - continuation while open: append to the open record's text;
//! - header-shaped but unparseable while open: close the open record and
//!   drop the line (structurally broken fragments must never be glued onto
//!   a record's text);
//! - anything else while closed: dropped.
//!
//! End of input flushes the open record. Parsing never drops a successfully
//! matched record; filtering service messages is left to consumers.

mod attachment;
mod header;
mod normalize;

pub use attachment::extract_attachment;
pub use header::{HeaderFields, is_header_shaped, match_header};
pub use normalize::normalize_line;

use std::fs;
use std::path::Path;

use crate::config::ParserConfig;
use crate::error::{ChatpressError, Result};
use crate::merge::merge_attachment_captions;
use crate::record::MessageRecord;

/// Parses chat export text into [`MessageRecord`]s.
///
/// # Example
///
/// ```rust
/// use chatpress::ChatParser;
///
/// let input = "[15.01.24, 10:30:45] Alice: Hi\nstill me\n[15.01.24, 10:31:02] Bob: Hey";
/// let records = ChatParser::new().parse_str(input);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].text(), "Hi\nstill me");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses in-memory export text.
    ///
    /// Infallible: unparseable lines are dropped locally, and an input with
    /// no header lines yields an empty vector, which is a valid result.
    #[must_use]
    pub fn parse_str(&self, input: &str) -> Vec<MessageRecord> {
        let mut records = Vec::new();
        let mut open: Option<MessageRecord> = None;

        for raw in input.lines() {
            let line = normalize_line(raw);
            if line.is_empty() {
                continue;
            }

            if let Some(fields) = match_header(&line) {
                if let Some(done) = open.take() {
                    records.push(done);
                }
                let (attachment, text) = extract_attachment(fields.content);
                let mut record =
                    MessageRecord::new(fields.date, fields.time, fields.sender, text);
                record.attachment = attachment;
                open = Some(record);
            } else if is_header_shaped(&line) {
                // header-shaped noise: never text, never a record
                if let Some(done) = open.take() {
                    records.push(done);
                }
            } else if let Some(record) = open.as_mut() {
                record.append_line(&line);
            }
        }

        if let Some(done) = open {
            records.push(done);
        }

        if self.config.merge_captions {
            records = merge_attachment_captions(records);
        }
        records
    }

    /// Parses an export file from disk.
    ///
    /// # Errors
    ///
    /// [`ChatpressError::MissingInput`] if the path does not exist, or an I/O
    /// error from reading it.
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<MessageRecord>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ChatpressError::missing_input(path));
        }
        let input = fs::read_to_string(path)?;
        Ok(self.parse_str(&input))
    }
}
