//! CSV output writer.

use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::transcript::Transcript;

/// Writes the transcript's renderable records to CSV.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Sender`, `Text`, `Attachment`
/// - Encoding: UTF-8
///
/// The `Attachment` column holds the referenced filename or is empty.
///
/// # Errors
///
/// I/O or CSV serialization errors.
pub fn write_csv<P: AsRef<Path>>(transcript: &Transcript, output_path: P) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(transcript, &mut writer)
}

/// Renders the transcript to a CSV string (same format as [`write_csv`]).
///
/// # Errors
///
/// CSV serialization errors, or if the output is not valid UTF-8.
pub fn to_csv(transcript: &Transcript) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(transcript, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: std::io::Write>(
    transcript: &Transcript,
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    writer.write_record(["Date", "Time", "Sender", "Text", "Attachment"])?;
    for record in transcript.renderable() {
        let attachment = record
            .attachment()
            .map(|a| a.filename.as_str())
            .unwrap_or_default();
        writer.write_record([
            record.date(),
            record.time(),
            record.sender(),
            record.text(),
            attachment,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::record::MessageRecord;

    fn transcript() -> Transcript {
        let records = vec![
            MessageRecord::new("13.01.23", "10:30", "Alice", "Hello; world"),
            MessageRecord::new("13.01.23", "10:31", "Bob", "").with_attachment("v.mp4"),
            MessageRecord::new("13.01.23", "10:32", "WhatsApp", "messages are encrypted"),
        ];
        Transcript::from_records(records, &ParserConfig::default())
    }

    #[test]
    fn test_to_csv_columns_and_filtering() {
        let csv = to_csv(&transcript()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "Date;Time;Sender;Text;Attachment");
        // 2 renderable records; the service message is dropped
        assert_eq!(lines.count(), 2);
        assert!(csv.contains("v.mp4"));
        assert!(!csv.contains("encrypted"));
    }

    #[test]
    fn test_semicolon_in_text_quoted() {
        let csv = to_csv(&transcript()).unwrap();
        assert!(csv.contains("\"Hello; world\""));
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&transcript(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Date;Time;Sender"));
    }
}
