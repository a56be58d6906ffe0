//! End-to-end tests over realistic export snippets.

use chatpress::prelude::*;
use chatpress::dates::resolve_date;
use chatpress::output::{to_csv, to_json, to_jsonl};
use chatpress::rewrite::rewrite_attachment_extensions;

const GERMAN_EXPORT: &str = "\
[12.03.23, 08:15:11] Familie 😎: \u{200e}Nachrichten und Anrufe sind Ende-zu-Ende-verschlüsselt.
[12.03.23, 08:15:12] Familie 😎: \u{200e}Du hast die Gruppe \u{201e}Familie\u{201c} erstellt.
[12.03.23, 08:15:30] Mama: Guten Morgen zusammen!
[12.03.23, 08:16:02] Papa: \u{200e}<Anhang: 00000012-PHOTO-2023-03-12-08-16-02.jpg>
[12.03.23, 08:16:02] Papa: Der Sonnenaufgang heute
[12.03.23, 08:17:45] Mama: Wunderschön!
Wo war das?
[12.03.23, 09:01:00] Papa: Am See";

#[test]
fn test_german_export_end_to_end() {
    let transcript = Transcript::from_records(
        ChatParser::new().parse_str(GERMAN_EXPORT),
        &ParserConfig::default(),
    );

    // media + caption merged into one record
    assert_eq!(transcript.len(), 6);
    assert_eq!(transcript.language, Language::De);
    assert_eq!(transcript.primary_sender.as_deref(), Some("Mama"));

    let papa_photo = &transcript.records[3];
    assert_eq!(papa_photo.sender(), "Papa");
    assert_eq!(papa_photo.text(), "Der Sonnenaufgang heute");
    let att = papa_photo.attachment().unwrap();
    assert_eq!(att.filename, "00000012-PHOTO-2023-03-12-08-16-02.jpg");
    assert_eq!(att.kind, AttachmentKind::Image);

    // continuation folded into Mama's message
    assert_eq!(transcript.records[4].text(), "Wunderschön!\nWo war das?");

    // service notices are kept but not renderable
    assert_eq!(transcript.renderable_count(), 4);
    assert_eq!(transcript.year_range(), "2023");
}

#[test]
fn test_three_headers_continuation_and_trailing_message() {
    let input = "\
[15.01.24, 10:30:00] Alice: first message
with a continuation
[15.01.24, 10:31:00] Bob: second message
[15.01.24, 10:32:00] Alice: trailing, never terminated";
    let records = ChatParser::new().parse_str(input);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].text(), "first message\nwith a continuation");
    assert_eq!(records[2].text(), "trailing, never terminated");
}

#[test]
fn test_attachment_extraction_contract() {
    let records = ChatParser::new().parse_str("[1.2.23, 10:00] A: \u{200e}<Attachment: photo.jpg>");
    assert_eq!(records.len(), 1);
    let att = records[0].attachment().unwrap();
    assert_eq!(att.filename, "photo.jpg");
    assert_eq!(att.kind, AttachmentKind::Image);
    assert_eq!(records[0].text(), "");
}

#[test]
fn test_merge_contract() {
    let input = "\
[01.02.23, 10:00] Alice: <Attachment: IMG.jpg>
[01.02.23, 10:00] Alice: Nice view";
    let records = ChatParser::new().parse_str(input);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text(), "Nice view");
    assert_eq!(records[0].attachment().unwrap().filename, "IMG.jpg");
}

#[test]
fn test_date_resolution_contract() {
    let d = resolve_date("13.01.23").unwrap();
    assert_eq!((d.year, d.month, d.day), (2023, 1, 13));

    let d = resolve_date("01/13/23").unwrap();
    assert_eq!((d.year, d.month, d.day), (2023, 1, 13));

    let d = resolve_date("01.02.23").unwrap();
    assert_eq!((d.year, d.month, d.day), (2023, 2, 1));
}

#[test]
fn test_dash_format_export() {
    let input = "\
15/01/2024, 10:30 - Alice: Hi there
15/01/2024, 10:31 - Bob: Hey";
    let records = ChatParser::new().parse_str(input);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date(), "15/01/2024");
    assert_eq!(records[0].sender(), "Alice");
}

#[test]
fn test_empty_export_is_valid() {
    let transcript =
        Transcript::from_records(ChatParser::new().parse_str(""), &ParserConfig::default());
    assert!(transcript.is_empty());
    assert_eq!(transcript.language, Language::En);
    assert!(transcript.primary_sender.is_none());
}

#[test]
fn test_output_formats_agree_on_record_count() {
    let transcript = Transcript::from_records(
        ChatParser::new().parse_str(GERMAN_EXPORT),
        &ParserConfig::default(),
    );

    let csv = to_csv(&transcript).unwrap();
    assert_eq!(csv.lines().count(), 1 + transcript.renderable_count());

    let jsonl = to_jsonl(&transcript).unwrap();
    assert_eq!(jsonl.lines().count(), transcript.renderable_count());

    let json: serde_json::Value = serde_json::from_str(&to_json(&transcript).unwrap()).unwrap();
    assert_eq!(
        json["records"].as_array().unwrap().len(),
        transcript.renderable_count()
    );
    assert_eq!(json["language"], "de");
}

#[test]
fn test_retag_then_reparse() {
    let input = "[1.2.23, 10:00] A: \u{200e}<Attachment: clip.MOV>";
    let (rewritten, count) = rewrite_attachment_extensions(input, "mov", "mp4").unwrap();
    assert_eq!(count, 1);

    let records = ChatParser::new().parse_str(&rewritten);
    let att = records[0].attachment().unwrap();
    assert_eq!(att.filename, "clip.mp4");
    assert_eq!(att.kind, AttachmentKind::Video);
}

#[test]
fn test_parse_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("_chat.txt");
    std::fs::write(&path, GERMAN_EXPORT).unwrap();

    let transcript = Transcript::from_path(&path, ParserConfig::default()).unwrap();
    assert_eq!(transcript.len(), 6);

    let err = Transcript::from_path(dir.path().join("missing.txt"), ParserConfig::default())
        .unwrap_err();
    assert!(err.is_missing_input());
}
