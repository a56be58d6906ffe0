//! JSON output writer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::record::MessageRecord;
use crate::transcript::Transcript;

#[derive(Serialize)]
struct JsonExport<'a> {
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_sender: Option<&'a str>,
    records: Vec<&'a MessageRecord>,
}

impl<'a> JsonExport<'a> {
    fn new(transcript: &'a Transcript) -> Self {
        Self {
            language: transcript.language.code(),
            primary_sender: transcript.primary_sender.as_deref(),
            records: transcript.renderable().collect(),
        }
    }
}

/// Writes the transcript as pretty-printed JSON: detected language, primary
/// sender, and the renderable records.
///
/// # Errors
///
/// I/O or JSON serialization errors.
pub fn write_json<P: AsRef<Path>>(transcript: &Transcript, output_path: P) -> Result<()> {
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &JsonExport::new(transcript))?;
    Ok(())
}

/// Renders the transcript to a pretty-printed JSON string.
///
/// # Errors
///
/// JSON serialization errors.
pub fn to_json(transcript: &Transcript) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonExport::new(transcript))?)
}
