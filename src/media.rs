//! Media conversion planning.
//!
//! Scans an export folder for attachment files with a given extension and
//! plans (source, target) conversion pairs. The actual transcoding is done
//! by an external tool behind the [`MediaConverter`] trait; this module only
//! decides what to convert.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChatpressError, Result};

/// One planned conversion: transcode `source` into `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// An external per-file transcoder. Success or failure per file is the whole
/// interface.
pub trait MediaConverter {
    /// Transcodes `job.source` into `job.target`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; a failed job leaves `job.target` absent.
    fn convert(&self, job: &ConversionJob) -> Result<()>;
}

/// Outcome of running a batch of conversion jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub converted: usize,
    pub failed: Vec<PathBuf>,
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Plans conversion pairs for every `*.{from_ext}` file directly in `dir`.
///
/// Files whose target already exists are skipped (a previous run converted
/// them). Extension matching is case-insensitive; results are sorted by
/// source path for stable output.
///
/// # Errors
///
/// [`ChatpressError::MissingInput`] if `dir` does not exist, or I/O errors
/// reading it.
pub fn plan_conversions<P: AsRef<Path>>(
    dir: P,
    from_ext: &str,
    to_ext: &str,
) -> Result<Vec<ConversionJob>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ChatpressError::missing_input(dir));
    }

    let mut jobs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !has_extension(&path, from_ext) {
            continue;
        }
        let target = path.with_extension(to_ext);
        if target.exists() {
            continue;
        }
        jobs.push(ConversionJob {
            source: path,
            target,
        });
    }
    jobs.sort_by(|a, b| a.source.cmp(&b.source));
    Ok(jobs)
}

/// Runs the planned jobs through a converter. A failed job is recorded and
/// the batch continues.
pub fn run_conversions<C: MediaConverter>(converter: &C, jobs: &[ConversionJob]) -> ConversionReport {
    let mut report = ConversionReport::default();
    for job in jobs {
        match converter.convert(job) {
            Ok(()) => report.converted += 1,
            Err(_) => report.failed.push(job.source.clone()),
        }
    }
    report
}
