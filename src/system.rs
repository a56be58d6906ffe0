//! Service-message classification.
//!
//! Exports interleave real conversation with service notices: group creation,
//! subject changes, the encryption banner, "image omitted" placeholders.
//! Parsing keeps every record; classification is a render-time concern, so
//! consumers can decide whether to show, count, or drop service records.

use std::sync::LazyLock;

use regex::RegexSet;

use crate::lang::Language;
use crate::record::MessageRecord;

static PATTERN_SETS: LazyLock<Vec<(Language, RegexSet)>> = LazyLock::new(|| {
    Language::ALL
        .into_iter()
        .map(|lang| {
            let set = RegexSet::new(lang.system_patterns())
                .unwrap_or_else(|e| panic!("invalid system pattern for {lang}: {e}"));
            (lang, set)
        })
        .collect()
});

fn pattern_set(lang: Language) -> &'static RegexSet {
    // Language::ALL covers every variant, the lookup can't miss.
    PATTERN_SETS
        .iter()
        .find(|(l, _)| *l == lang)
        .map(|(_, set)| set)
        .unwrap_or_else(|| unreachable!("pattern set missing for {lang}"))
}

/// Classifies a sender/content pair as a service message.
///
/// Three checks, in order:
/// 1. Sender markers: 😎 or the literal `WhatsApp` in the sender field.
/// 2. Language keywords anywhere in the lowercased `sender + " " + content`.
/// 3. Language regex patterns over the same lowercased blob.
#[must_use]
pub fn is_system_message(sender: &str, content: &str, lang: Language) -> bool {
    if sender.contains('😎') || sender.contains("WhatsApp") {
        return true;
    }

    let haystack = format!("{sender} {content}").to_lowercase();

    if lang
        .system_keywords()
        .iter()
        .any(|kw| haystack.contains(kw))
    {
        return true;
    }

    pattern_set(lang).is_match(&haystack)
}

/// [`is_system_message`] over a parsed record.
#[must_use]
pub fn is_system_record(record: &MessageRecord, lang: Language) -> bool {
    is_system_message(record.sender(), record.text(), lang)
}
