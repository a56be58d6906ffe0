//! Parser configuration.

use crate::lang::Language;

/// Options controlling how an export is parsed.
///
/// The defaults match what a plain `_chat.txt` needs; use the builder methods
/// to deviate.
///
/// # Example
///
/// ```rust
/// use chatpress::{Language, ParserConfig};
///
/// let config = ParserConfig::new()
///     .with_language(Language::De)
///     .with_merge_captions(false);
/// assert!(!config.merge_captions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Merge an attachment-only record with a directly following caption-only
    /// record from the same sender at the same timestamp.
    pub merge_captions: bool,
    /// Skip content-based detection and use this language.
    pub language: Option<Language>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            merge_captions: true,
            language: None,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the language instead of detecting it from content.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Enables or disables the caption merge pass.
    #[must_use]
    pub fn with_merge_captions(mut self, merge: bool) -> Self {
        self.merge_captions = merge;
        self
    }
}
