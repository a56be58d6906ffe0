//! The normalized message record produced by the parser.
//!
//! This module provides [`MessageRecord`], the structured representation of a
//! single message from a chat export, and [`Attachment`] for inline media
//! references.
//!
//! # Overview
//!
//! A record consists of:
//! - **Required**: `date`, `time`, `sender` — taken verbatim from the header
//!   line (the date stays a source token; calendar resolution is lazy, see
//!   [`dates`](crate::dates))
//! - **Optional**: `text` (may be empty) and `attachment`
//!
//! # Examples
//!
//! ```
//! use chatpress::record::{AttachmentKind, MessageRecord};
//!
//! let msg = MessageRecord::new("13.01.23", "10:30", "Alice", "Hello!");
//! assert_eq!(msg.sender(), "Alice");
//! assert!(msg.attachment().is_none());
//!
//! let photo = MessageRecord::new("13.01.23", "10:31", "Alice", "")
//!     .with_attachment("IMG-0001.jpg");
//! assert_eq!(photo.attachment().unwrap().kind, AttachmentKind::Image);
//! assert!(photo.is_media_only());
//! ```

use serde::{Deserialize, Serialize};

use crate::dates::{self, ParsedDate};

/// Extensions classified as images.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Extensions classified as videos.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

/// Classification of an attachment by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// jpg, jpeg, png, gif, webp
    Image,
    /// mp4, mov, avi, mkv
    Video,
    /// Everything else (documents, audio, contacts, ...)
    File,
}

impl AttachmentKind {
    /// Classifies a filename by its extension (case-insensitive).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatpress::record::AttachmentKind;
    ///
    /// assert_eq!(AttachmentKind::from_filename("photo.JPG"), AttachmentKind::Image);
    /// assert_eq!(AttachmentKind::from_filename("clip.mov"), AttachmentKind::Video);
    /// assert_eq!(AttachmentKind::from_filename("notes.pdf"), AttachmentKind::File);
    /// ```
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        let ext = lower.rsplit('.').next().unwrap_or("");
        if IMAGE_EXTENSIONS.contains(&ext) {
            AttachmentKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext) {
            AttachmentKind::Video
        } else {
            AttachmentKind::File
        }
    }
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentKind::Image => write!(f, "image"),
            AttachmentKind::Video => write!(f, "video"),
            AttachmentKind::File => write!(f, "file"),
        }
    }
}

/// An inline media reference extracted from a message's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Referenced filename, exactly as written inside the tag.
    pub filename: String,

    /// Classification by extension.
    pub kind: AttachmentKind,
}

impl Attachment {
    /// Creates an attachment, classifying it by extension.
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let kind = AttachmentKind::from_filename(&filename);
        Self { filename, kind }
    }
}

/// A normalized message from a chat export.
///
/// Every record constructed by the parser has non-empty `date`, `time`, and
/// `sender`. The `date` and `time` fields keep the original source tokens so
/// collaborators that rewrite the export text (see [`rewrite`](crate::rewrite))
/// stay byte-accurate; calendar interpretation happens on demand via
/// [`resolved_date`](MessageRecord::resolved_date).
///
/// # Serialization
///
/// Implements `Serialize` and `Deserialize`; the `attachment` field is
/// omitted from JSON when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Original date token, e.g. `13.01.23` or `1/13/23`.
    pub date: String,

    /// Original time token, `HH:MM` or `HH:MM:SS`.
    pub time: String,

    /// Display name, phone number, or system pseudo-sender.
    pub sender: String,

    /// Accumulated message body; may be empty for media-only messages.
    pub text: String,

    /// Inline media reference, if the header content carried a tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl MessageRecord {
    /// Creates a record with no attachment.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            text: text.into(),
            attachment: None,
        }
    }

    /// Builder method to attach a media reference.
    #[must_use]
    pub fn with_attachment(mut self, filename: impl Into<String>) -> Self {
        self.attachment = Some(Attachment::new(filename));
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the original date token.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the original time token.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the sender.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the attachment, if any.
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if the body contains non-whitespace text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Returns `true` if the record carries an attachment and no text.
    pub fn is_media_only(&self) -> bool {
        self.attachment.is_some() && !self.has_text()
    }

    /// Returns `true` if the record has neither text nor attachment.
    ///
    /// Such records exist in exports (reactions, stripped content) and are
    /// skipped by the rendering filter, not by the parser.
    pub fn is_empty(&self) -> bool {
        !self.has_text() && self.attachment.is_none()
    }

    /// Appends a continuation line to the body.
    ///
    /// The first appended line becomes the body verbatim; later lines are
    /// separated by `\n`.
    pub fn append_line(&mut self, line: &str) {
        if self.text.is_empty() {
            self.text.push_str(line);
        } else {
            self.text.push('\n');
            self.text.push_str(line);
        }
    }

    /// Resolves the date token to a calendar date, if possible.
    ///
    /// See [`dates::resolve_date`] for the disambiguation rules.
    pub fn resolved_date(&self) -> Option<ParsedDate> {
        dates::resolve_date(&self.date)
    }

    /// Returns the time trimmed to `HH:MM` (seconds dropped).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatpress::MessageRecord;
    ///
    /// let msg = MessageRecord::new("13.01.23", "10:30:45", "Alice", "hi");
    /// assert_eq!(msg.short_time(), "10:30");
    /// ```
    pub fn short_time(&self) -> String {
        let mut parts = self.time.split(':');
        match (parts.next(), parts.next()) {
            (Some(h), Some(m)) => format!("{h}:{m}"),
            _ => self.time.clone(),
        }
    }
}
