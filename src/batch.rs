use crate::config::Config;
use crate::error::{Error, Result};
use crate::normalize::clean_transcript;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const TRANSCRIPT_EXTENSION: &str = ".txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Processed,
    /// Target already existed and `force` was off. Not an error.
    AlreadyProcessed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

/// Transcript files directly inside `dir`, sorted by path.
///
/// Only failing to open `dir` is an error; an unreadable entry is logged
/// and left out.
pub fn list_transcripts(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)?.map(|entry| entry.map(|e| e.path()));
    Ok(select_transcripts(entries))
}

fn select_transcripts(entries: impl Iterator<Item = io::Result<PathBuf>>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        if path.is_file() && is_transcript_name(&path) {
            out.push(path);
        }
    }
    out.sort();
    out
}

/// Matches on raw name bytes so non-UTF-8 names are still picked up.
fn is_transcript_name(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.as_encoded_bytes().ends_with(TRANSCRIPT_EXTENSION.as_bytes()))
}

/// `<target_dir>/<source stem><suffix>`. `None` if `source` has no file name.
pub fn target_path(source: &Path, target_dir: &Path, suffix: &str) -> Option<PathBuf> {
    let stem = source.file_stem()?.to_string_lossy();
    Some(target_dir.join(format!("{}{}", stem, suffix)))
}

/// Normalize one transcript into `target`.
///
/// Existence is checked before the source is opened, so an already
/// processed file costs one `stat`. The check and the write are separate
/// steps; two concurrent runs against the same target can both write.
pub fn process_file(source: &Path, target: &Path, force: bool) -> Result<FileOutcome> {
    if !force && target.exists() {
        return Ok(FileOutcome::AlreadyProcessed);
    }

    let raw = fs::read_to_string(source).map_err(|e| Error::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    let cleaned = clean_transcript(&raw);
    debug!(
        "{}: {} bytes in, {} bytes out",
        source.display(),
        raw.len(),
        cleaned.len()
    );

    fs::write(target, cleaned).map_err(|e| Error::Write {
        path: target.to_path_buf(),
        source: e,
    })?;
    Ok(FileOutcome::Processed)
}

/// Run the whole batch described by `config`.
///
/// Only a missing source directory or an uncreatable target directory
/// fail the run. Per-file errors are logged and counted in `failed`.
pub fn process_dir(config: &Config) -> Result<BatchReport> {
    let source_dir = &config.source_dir;
    let target_dir = &config.target_dir;

    if !source_dir.is_dir() {
        return Err(Error::SourceNotFound(source_dir.clone()));
    }

    if target_dir.is_dir() {
        info!("Using existing target directory: {}", target_dir.display());
    } else {
        fs::create_dir_all(target_dir).map_err(|e| Error::CreateDir {
            path: target_dir.clone(),
            source: e,
        })?;
        info!("Created target directory: {}", target_dir.display());
    }

    let files = list_transcripts(source_dir)?;
    let mut report = BatchReport {
        total: files.len(),
        ..BatchReport::default()
    };
    if files.is_empty() {
        info!("No {} files found in {}", TRANSCRIPT_EXTENSION, source_dir.display());
        return Ok(report);
    }
    info!("Found {} transcript files to process", files.len());

    let start = Instant::now();
    for source in &files {
        let Some(target) = target_path(source, target_dir, &config.suffix) else {
            warn!("Skipping {}: no file name", source.display());
            report.failed += 1;
            continue;
        };

        match process_file(source, &target, config.force) {
            Ok(FileOutcome::Processed) => {
                info!("Processed: {} -> {}", display_name(source), display_name(&target));
                report.processed += 1;
            }
            Ok(FileOutcome::AlreadyProcessed) => {
                info!(
                    "Skipping {} - already processed (use --force to process anyway)",
                    display_name(source)
                );
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Error processing {}: {}", source.display(), e);
                report.failed += 1;
            }
        }
    }
    report.elapsed = start.elapsed();

    Ok(report)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
