//! Chat language detection and per-language lexical tables.
//!
//! Exports localize their service messages ("Messages and calls are
//! end-to-end encrypted", "image omitted", ...) in the device language, so
//! the language has to be sniffed from the content itself. Detection scans a
//! bounded sample of early records for characteristic keyword sets, checked
//! in a fixed priority order; on no match it falls back to English.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatpressError;
use crate::record::MessageRecord;

/// Number of leading records sampled by [`detect_language`].
pub const DETECTION_SAMPLE: usize = 50;

/// A supported chat export language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    /// German
    De,
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// Italian
    It,
}

impl Language {
    /// All supported languages, in detection priority order.
    ///
    /// The order matters: the first language whose keywords hit the sample
    /// wins, so more lexically distinctive languages come first.
    pub const ALL: [Language; 5] = [
        Language::De,
        Language::En,
        Language::Es,
        Language::Fr,
        Language::It,
    ];

    /// The ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
        }
    }

    /// Month names, January first, for date rendering.
    #[must_use]
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Language::En => &[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            Language::De => &[
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
            Language::Es => &[
                "Enero",
                "Febrero",
                "Marzo",
                "Abril",
                "Mayo",
                "Junio",
                "Julio",
                "Agosto",
                "Septiembre",
                "Octubre",
                "Noviembre",
                "Diciembre",
            ],
            Language::Fr => &[
                "Janvier",
                "Février",
                "Mars",
                "Avril",
                "Mai",
                "Juin",
                "Juillet",
                "Août",
                "Septembre",
                "Octobre",
                "Novembre",
                "Décembre",
            ],
            Language::It => &[
                "Gennaio",
                "Febbraio",
                "Marzo",
                "Aprile",
                "Maggio",
                "Giugno",
                "Luglio",
                "Agosto",
                "Settembre",
                "Ottobre",
                "Novembre",
                "Dicembre",
            ],
        }
    }

    /// Keywords whose presence in the sample text identifies this language.
    ///
    /// Mostly past participles from service messages, the one text fragment
    /// guaranteed to appear in the export's own language.
    #[must_use]
    pub const fn detection_keywords(self) -> &'static [&'static str] {
        match self {
            Language::De => &["erstellt", "hinzugefügt", "geändert", "gelöscht", "du hast"],
            Language::En => &["created", "added", "changed", "deleted", "you have"],
            Language::Es => &["creado", "añadido", "cambiado", "eliminado"],
            Language::Fr => &["créé", "ajouté", "modifié", "supprimé"],
            Language::It => &["creato", "aggiunto", "modificato", "eliminato"],
        }
    }

    /// Keywords that mark a record as a service message in this language.
    #[must_use]
    pub const fn system_keywords(self) -> &'static [&'static str] {
        match self {
            Language::De => &[
                "erstellt",
                "hinzugefügt",
                "geändert",
                "verschlüsselt",
                "gelöscht",
                "weggelassen",
            ],
            Language::En => &[
                "created",
                "added",
                "changed",
                "encrypted",
                "deleted",
                "omitted",
            ],
            Language::Es => &[
                "creado",
                "añadido",
                "cambiado",
                "cifrado",
                "eliminado",
                "omitido",
            ],
            Language::Fr => &["créé", "ajouté", "modifié", "chiffré", "supprimé", "omis"],
            Language::It => &[
                "creato",
                "aggiunto",
                "modificato",
                "crittografato",
                "eliminato",
                "omesso",
            ],
        }
    }

    /// Regex patterns (lowercase input assumed) for service-message phrasings
    /// the keyword list misses.
    #[must_use]
    pub const fn system_patterns(self) -> &'static [&'static str] {
        match self {
            Language::De => &[
                r"du hast.*(erstellt|hinzugefügt|geändert|gelöscht)",
                r"diese nachricht (wurde gelöscht|wurde als admin gelöscht)",
            ],
            Language::En => &[
                r"you (created|added|changed|deleted)",
                r"has (created|added|changed|deleted)",
                r"this message (was deleted|has been deleted)",
            ],
            Language::Es => &[
                r"has (creado|añadido|cambiado|eliminado)",
                r"este mensaje (fue eliminado|ha sido eliminado)",
            ],
            Language::Fr => &[
                r"vous avez (créé|ajouté|modifié|supprimé)",
                r"ce message (a été supprimé|a été supprimé par un admin)",
            ],
            Language::It => &[
                r"hai (creato|aggiunto|modificato|eliminato)",
                r"questo messaggio (è stato eliminato|è stato eliminato da un amministratore)",
            ],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ChatpressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "de" | "german" => Ok(Language::De),
            "en" | "english" => Ok(Language::En),
            "es" | "spanish" => Ok(Language::Es),
            "fr" | "french" => Ok(Language::Fr),
            "it" | "italian" => Ok(Language::It),
            other => Err(ChatpressError::invalid_format(format!(
                "unsupported language: {other}"
            ))),
        }
    }
}

/// Detects the export language from a prefix of the parsed records.
///
/// Concatenates text and sender of the first [`DETECTION_SAMPLE`] records,
/// lowercases the blob, and returns the first [`Language::ALL`] entry with a
/// keyword hit. Falls back to [`Language::En`].
#[must_use]
pub fn detect_language(records: &[MessageRecord]) -> Language {
    let sample: String = records
        .iter()
        .take(DETECTION_SAMPLE)
        .flat_map(|rec| [rec.text(), " ", rec.sender(), " "])
        .collect::<String>()
        .to_lowercase();

    Language::ALL
        .into_iter()
        .find(|lang| {
            lang.detection_keywords()
                .iter()
                .any(|kw| sample.contains(kw))
        })
        .unwrap_or_default()
}
