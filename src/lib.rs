//! # chatpress
//!
//! Parse WhatsApp chat exports (`_chat.txt`) into normalized, structured
//! message records.
//!
//! Exports are messy: directional-mark control characters, two different
//! header layouts, locale-dependent date tokens, localized service messages,
//! attachments split from their captions. chatpress normalizes all of that
//! into an ordered sequence of [`MessageRecord`]s plus derived metadata
//! (detected language, primary sender), ready for rendering or export.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatpress::{ChatParser, ParserConfig, Transcript};
//!
//! let input = "\
//! [15.01.24, 10:30:45] Alice: Good morning
//! [15.01.24, 10:31:02] Bob: \u{200e}<Attachment: sunrise.jpg>
//! [15.01.24, 10:31:02] Bob: Look at this!";
//!
//! let records = ChatParser::new().parse_str(input);
//! assert_eq!(records.len(), 2); // attachment merged with its caption
//!
//! let transcript = Transcript::from_records(records, &ParserConfig::default());
//! assert_eq!(transcript.primary_sender.as_deref(), Some("Alice"));
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `full` | ✓ | Everything below |
//! | `csv-output` | ✓ | Semicolon-delimited CSV export ([`output::write_csv`]) |
//! | `json-output` | ✓ | JSON and JSON Lines export ([`output::write_json`]) |
//! | `cli` | ✓ | The `chatpress` binary (implies both output features) |
//!
//! With `default-features = false` only the parser, merge pass, language
//! detection, and tag rewriting remain, with no optional dependencies.

pub mod config;
pub mod dates;
pub mod error;
pub mod lang;
pub mod media;
pub mod merge;
pub mod parser;
pub mod record;
pub mod rewrite;
pub mod system;
pub mod transcript;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(any(feature = "csv-output", feature = "json-output"))]
pub mod output;

pub use config::ParserConfig;
pub use error::{ChatpressError, Result};
pub use lang::Language;
pub use merge::merge_attachment_captions;
pub use parser::ChatParser;
pub use record::{Attachment, AttachmentKind, MessageRecord};
pub use transcript::Transcript;

/// Commonly used items, for glob import.
///
/// ```rust
/// use chatpress::prelude::*;
///
/// let records = ChatParser::new().parse_str("[1.2.23, 9:00] A: hi");
/// assert_eq!(records.len(), 1);
/// ```
pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::error::{ChatpressError, Result};
    pub use crate::lang::Language;
    pub use crate::parser::ChatParser;
    pub use crate::record::{Attachment, AttachmentKind, MessageRecord};
    pub use crate::transcript::Transcript;
}
