//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - top-level CLI argument structure
//! - [`Command`] - the three operations the binary offers
//! - [`OutputFormat`] - export format options

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::lang::Language;

/// Parse WhatsApp chat exports into normalized, structured records.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpress")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpress export _chat.txt
    chatpress export chat-folder/ -o chat.json --format json
    chatpress export _chat.txt --language de --no-merge
    chatpress retag _chat.txt --from mov --to mp4
    chatpress convert chat-folder/ --from mov --to mp4")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse an export and write it in a structured format
    Export {
        /// Export file, or a folder containing `_chat.txt`
        input: PathBuf,

        /// Path to output file
        #[arg(short, long, default_value = "chat.csv")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Pin the language instead of detecting it
        #[arg(short, long, value_enum)]
        language: Option<Language>,

        /// Disable merging attachment records with their captions
        #[arg(long)]
        no_merge: bool,
    },

    /// Rewrite attachment tag extensions inside an export file
    Retag {
        /// Export file to rewrite in place
        input: PathBuf,

        /// Extension to replace (without dot)
        #[arg(long, value_name = "EXT")]
        from: String,

        /// Replacement extension (without dot)
        #[arg(long, value_name = "EXT")]
        to: String,
    },

    /// List media files in a folder that still need conversion
    Convert {
        /// Folder containing the export's media files
        dir: PathBuf,

        /// Source extension (without dot)
        #[arg(long, value_name = "EXT", default_value = "mov")]
        from: String,

        /// Target extension (without dot)
        #[arg(long, value_name = "EXT", default_value = "mp4")]
        to: String,
    },
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// Semicolon-delimited CSV
    Csv,
    /// Pretty-printed JSON with language and primary-sender metadata
    Json,
    /// JSON Lines, one record per line
    Jsonl,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl OutputFormat {
    /// The file extension this format conventionally uses.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}
