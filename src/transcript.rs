//! The parsed transcript handed to rendering collaborators.
//!
//! Beyond the record sequence itself, renderers need two derived scalars:
//! the detected language (for month names and service-message tables) and
//! the "primary sender", the chat participant whose messages render on the
//! own side of a two-column layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::error::Result;
use crate::lang::{self, Language};
use crate::parser::ChatParser;
use crate::record::MessageRecord;
use crate::system;

/// A fully parsed chat export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// All records, in source order. Service messages included.
    pub records: Vec<MessageRecord>,

    /// Detected (or configured) export language.
    pub language: Language,

    /// First non-system sender that isn't a bare phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub primary_sender: Option<String>,
}

/// True for sender strings that are just a phone number.
///
/// Covers `+491701234567` and digit runs with embedded spaces, the two
/// shapes exports use for contacts not in the address book.
fn is_phone_number(sender: &str) -> bool {
    sender.starts_with('+')
        || (!sender.is_empty()
            && sender.chars().all(|c| c.is_ascii_digit() || c == ' ')
            && sender.chars().any(|c| c.is_ascii_digit()))
}

/// Picks the primary sender: the first record whose sender is neither a
/// service pseudo-sender nor a phone number.
fn infer_primary_sender(records: &[MessageRecord], language: Language) -> Option<String> {
    records
        .iter()
        .find(|rec| !system::is_system_record(rec, language) && !is_phone_number(rec.sender()))
        .map(|rec| rec.sender().to_string())
}

impl Transcript {
    /// Builds a transcript from already-parsed records.
    ///
    /// Detects the language from content unless `config.language` pins it.
    #[must_use]
    pub fn from_records(records: Vec<MessageRecord>, config: &ParserConfig) -> Self {
        let language = config
            .language
            .unwrap_or_else(|| lang::detect_language(&records));
        let primary_sender = infer_primary_sender(&records, language);
        Self {
            records,
            language,
            primary_sender,
        }
    }

    /// Parses an export file with the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`ChatParser::parse_path`] errors. An export with no
    /// parseable records yields an empty transcript, not an error.
    ///
    /// [`ChatParser::parse_path`]: crate::ChatParser::parse_path
    pub fn from_path<P: AsRef<Path>>(path: P, config: ParserConfig) -> Result<Self> {
        let records = ChatParser::with_config(config.clone()).parse_path(path)?;
        Ok(Self::from_records(records, &config))
    }

    /// Number of records, service messages included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records worth rendering: not service messages, not empty shells
    /// (reactions and stripped content have neither text nor attachment).
    pub fn renderable(&self) -> impl Iterator<Item = &MessageRecord> {
        self.records
            .iter()
            .filter(|rec| !system::is_system_record(rec, self.language) && !rec.is_empty())
    }

    /// Count of renderable records.
    #[must_use]
    pub fn renderable_count(&self) -> usize {
        self.renderable().count()
    }

    /// Distinct resolved years, ascending, joined with `/` (e.g. `2023/2024`).
    ///
    /// Records with unresolvable date tokens contribute nothing; an empty
    /// string means no date resolved at all.
    #[must_use]
    pub fn year_range(&self) -> String {
        let mut years: Vec<i32> = self
            .records
            .iter()
            .filter_map(|rec| rec.resolved_date().map(|d| d.year))
            .collect();
        years.sort_unstable();
        years.dedup();
        years
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/")
    }
}
