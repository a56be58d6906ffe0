//! Attachment/caption merge pass.
//!
//! Some exporters split a captioned photo into two adjacent records with the
//! same sender and timestamp: first the bare attachment, then the caption as
//! a plain text record. The merge pass folds such a pair back into one
//! record carrying both.
//!
//! Equality is on the raw date/time strings as they appear in the export,
//! not on resolved calendar dates. Differently formatted tokens for the same
//! instant therefore never merge; loosening this could merge unrelated
//! records in malformed inputs.

use crate::record::MessageRecord;

/// Returns true if `caption` is the text half of `media`'s split pair.
fn is_caption_for(media: &MessageRecord, caption: &MessageRecord) -> bool {
    media.is_media_only()
        && caption.attachment().is_none()
        && caption.has_text()
        && media.sender() == caption.sender()
        && media.date() == caption.date()
        && media.time() == caption.time()
}

/// Folds adjacent attachment-only/caption-only pairs into single records.
///
/// Each record participates in at most one merge; the pass is idempotent
/// (a merged record has text, so it can't absorb again).
#[must_use]
pub fn merge_attachment_captions(records: Vec<MessageRecord>) -> Vec<MessageRecord> {
    let mut merged = Vec::with_capacity(records.len());
    let mut iter = records.into_iter().peekable();

    while let Some(mut record) = iter.next() {
        let absorb = iter
            .peek()
            .is_some_and(|next| is_caption_for(&record, next));
        if absorb {
            if let Some(caption) = iter.next() {
                record.text = caption.text;
            }
        }
        merged.push(record);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(sender: &str, date: &str, time: &str, file: &str) -> MessageRecord {
        MessageRecord::new(date, time, sender, "").with_attachment(file)
    }

    fn text(sender: &str, date: &str, time: &str, body: &str) -> MessageRecord {
        MessageRecord::new(date, time, sender, body)
    }

    #[test]
    fn test_pair_merges() {
        let records = vec![
            media("Alice", "01.02.23", "10:00", "view.jpg"),
            text("Alice", "01.02.23", "10:00", "Nice view"),
        ];
        let merged = merge_attachment_captions(records);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text(), "Nice view");
        assert_eq!(merged[0].attachment().unwrap().filename, "view.jpg");
    }

    #[test]
    fn test_different_sender_keeps_both() {
        let records = vec![
            media("Alice", "01.02.23", "10:00", "view.jpg"),
            text("Bob", "01.02.23", "10:00", "Nice view"),
        ];
        assert_eq!(merge_attachment_captions(records).len(), 2);
    }

    #[test]
    fn test_different_time_keeps_both() {
        let records = vec![
            media("Alice", "01.02.23", "10:00", "view.jpg"),
            text("Alice", "01.02.23", "10:01", "Nice view"),
        ];
        assert_eq!(merge_attachment_captions(records).len(), 2);
    }

    #[test]
    fn test_string_equality_not_calendar_equality() {
        // same day, different token spelling: no merge
        let records = vec![
            media("Alice", "01.02.23", "10:00", "view.jpg"),
            text("Alice", "1.2.23", "10:00", "Nice view"),
        ];
        assert_eq!(merge_attachment_captions(records).len(), 2);
    }

    #[test]
    fn test_media_with_caption_does_not_absorb() {
        let records = vec![
            media("Alice", "01.02.23", "10:00", "a.jpg"),
            text("Alice", "01.02.23", "10:00", "caption"),
            text("Alice", "01.02.23", "10:00", "separate message"),
        ];
        let merged = merge_attachment_captions(records);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].text(), "caption");
        assert_eq!(merged[1].text(), "separate message");
    }

    #[test]
    fn test_two_media_records_no_merge() {
        let records = vec![
            media("Alice", "01.02.23", "10:00", "a.jpg"),
            media("Alice", "01.02.23", "10:00", "b.jpg"),
        ];
        assert_eq!(merge_attachment_captions(records).len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            media("Alice", "01.02.23", "10:00", "a.jpg"),
            text("Alice", "01.02.23", "10:00", "caption"),
            text("Bob", "01.02.23", "10:05", "hi"),
        ];
        let once = merge_attachment_captions(records);
        let twice = merge_attachment_captions(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_attachment_captions(Vec::new()).is_empty());
    }
}
