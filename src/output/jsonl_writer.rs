//! JSON Lines output writer, one record per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::transcript::Transcript;

/// Writes the transcript's renderable records as JSON Lines.
///
/// # Errors
///
/// I/O or JSON serialization errors.
pub fn write_jsonl<P: AsRef<Path>>(transcript: &Transcript, output_path: P) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    for record in transcript.renderable() {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders the transcript to a JSON Lines string.
///
/// # Errors
///
/// JSON serialization errors.
pub fn to_jsonl(transcript: &Transcript) -> Result<String> {
    let mut out = String::new();
    for record in transcript.renderable() {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::record::MessageRecord;

    #[test]
    fn test_one_line_per_record() {
        let records = vec![
            MessageRecord::new("13.01.23", "10:30", "Alice", "one"),
            MessageRecord::new("13.01.23", "10:31", "Bob", "two"),
        ];
        let transcript = Transcript::from_records(records, &ParserConfig::default());
        let jsonl = to_jsonl(&transcript).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["sender"].is_string());
        }
    }

    #[test]
    fn test_empty_transcript_empty_output() {
        let transcript = Transcript::from_records(Vec::new(), &ParserConfig::default());
        assert_eq!(to_jsonl(&transcript).unwrap(), "");
    }
}
