//! # chatpress CLI
//!
//! Command-line interface for the chatpress library.

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatpress::cli::{Args, Command, OutputFormat};
use chatpress::media::plan_conversions;
use chatpress::output::{write_csv, write_json, write_jsonl};
use chatpress::rewrite::rewrite_file;
use chatpress::{ChatpressError, ParserConfig, Transcript};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatpressError> {
    let args = <Args as ClapParser>::parse();
    match args.command {
        Command::Export {
            input,
            output,
            format,
            language,
            no_merge,
        } => export(&input, &output, format, language, no_merge),
        Command::Retag { input, from, to } => retag(&input, &from, &to),
        Command::Convert { dir, from, to } => convert(&dir, &from, &to),
    }
}

/// A folder input stands for the `_chat.txt` inside it.
fn resolve_input(input: &Path) -> PathBuf {
    if input.is_dir() {
        input.join("_chat.txt")
    } else {
        input.to_path_buf()
    }
}

fn export(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    language: Option<chatpress::Language>,
    no_merge: bool,
) -> Result<(), ChatpressError> {
    let total_start = Instant::now();
    let input = resolve_input(input);

    println!("📦 chatpress v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", input.display());
    println!("💾 Output:  {}", output.display());
    println!("📄 Format:  {}", format);
    println!();

    let mut config = ParserConfig::new().with_merge_captions(!no_merge);
    if let Some(lang) = language {
        config = config.with_language(lang);
    }

    println!("📖 Parsing chat export...");
    let parse_start = Instant::now();
    let transcript = Transcript::from_path(&input, config)?;
    println!(
        "   Found {} records, {} renderable ({:.2}s)",
        transcript.len(),
        transcript.renderable_count(),
        parse_start.elapsed().as_secs_f64()
    );
    println!("🌐 Language: {}", transcript.language);
    if let Some(ref sender) = transcript.primary_sender {
        println!("👤 Primary sender: {}", sender);
    }
    let years = transcript.year_range();
    if !years.is_empty() {
        println!("📅 Years:   {}", years);
    }

    if transcript.is_empty() {
        println!();
        println!("⚠️  No records parsed; writing empty output.");
    }

    println!("💾 Writing {}...", format);
    match format {
        OutputFormat::Csv => write_csv(&transcript, output)?,
        OutputFormat::Json => write_json(&transcript, output)?,
        OutputFormat::Jsonl => write_jsonl(&transcript, output)?,
    }

    println!();
    println!(
        "✅ Done! Output saved to {} ({:.2}s)",
        output.display(),
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn retag(input: &Path, from: &str, to: &str) -> Result<(), ChatpressError> {
    let input = resolve_input(input);
    println!("📦 chatpress v{}", env!("CARGO_PKG_VERSION"));
    println!("🏷️  Rewriting .{from} tags to .{to} in {}", input.display());

    let count = rewrite_file(&input, from, to)?;
    if count == 0 {
        println!("⚠️  No matching tags found; file unchanged.");
    } else {
        println!("✅ Rewrote {count} tag(s).");
    }
    Ok(())
}

fn convert(dir: &Path, from: &str, to: &str) -> Result<(), ChatpressError> {
    println!("📦 chatpress v{}", env!("CARGO_PKG_VERSION"));
    println!("🎞️  Planning .{from} → .{to} conversions in {}", dir.display());

    let jobs = plan_conversions(dir, from, to)?;
    if jobs.is_empty() {
        println!("✅ Nothing to convert.");
        return Ok(());
    }
    for job in &jobs {
        println!("   {} → {}", job.source.display(), job.target.display());
    }
    println!("✅ {} file(s) pending conversion.", jobs.len());
    Ok(())
}
