//! Unified error types for chatpress.
//!
//! This module provides a single [`ChatpressError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Per-line ambiguities in a chat export (malformed headers, unresolvable date
//! tokens) are recovered locally by the parser with documented fallbacks and
//! never surface here. Only stream-level failures — the export file missing or
//! unreadable, an output file that cannot be written — propagate as errors.
//! A parse that completes with zero records is a valid empty result, not an
//! error; callers check [`Transcript::is_empty`](crate::transcript::Transcript::is_empty).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatpress operations.
///
/// # Example
///
/// ```rust
/// use chatpress::error::Result;
/// use chatpress::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpressError>;

/// The error type for all chatpress operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpressError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The chat export file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A configuration input was not usable.
    ///
    /// The parser itself never raises this (an export with zero matching
    /// lines yields an empty result); it is used for inputs such as an
    /// unknown output format name.
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },

    /// An extension passed to the tag-rewrite contract is not usable.
    ///
    /// Extensions must be non-empty and contain only ASCII alphanumerics
    /// (no leading dot).
    #[error("Invalid extension '{input}': {reason}")]
    InvalidExtension {
        /// The offending extension string
        input: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The chat export file was not found where expected.
    ///
    /// Distinct from [`Io`](ChatpressError::Io) so the CLI can point at the
    /// path it actually probed (a folder input is resolved to `_chat.txt`).
    #[error("Chat export not found: {}", path.display())]
    MissingInput {
        /// The path that was probed
        path: PathBuf,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatpressError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatpressError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpressError {
    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatpressError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates an invalid extension error.
    pub fn invalid_extension(input: impl Into<String>, reason: &'static str) -> Self {
        ChatpressError::InvalidExtension {
            input: input.into(),
            reason,
        }
    }

    /// Creates a missing input error.
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        ChatpressError::MissingInput { path: path.into() }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpressError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatpressError::InvalidFormat { .. })
    }

    /// Returns `true` if the input file was missing.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ChatpressError::MissingInput { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
