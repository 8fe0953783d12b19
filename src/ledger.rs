//! Append-only record of handled video identifiers, plus the input queue
//! of identifiers still to fetch.
//!
//! Used by the downloader side of the toolkit, not by the batch cleaner.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    seen: HashSet<String>,
}

impl Ledger {
    /// A missing file is an empty ledger.
    pub fn load(path: impl Into<PathBuf>) -> Result<Ledger> {
        let path = path.into();
        let seen = match fs::read_to_string(&path) {
            Ok(text) => non_empty_lines(&text).collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(Error::Read { path, source: e }),
        };
        debug!("Loaded {} entries from {}", seen.len(), path.display());
        Ok(Ledger { path, seen })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id.trim())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Appends `id` unless already present. Returns whether a line was written.
    pub fn record(&mut self, id: &str) -> Result<bool> {
        let id = id.trim();
        if id.is_empty() || self.seen.contains(id) {
            return Ok(false);
        }

        let write_err = |e| Error::Write {
            path: self.path.clone(),
            source: e,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{}", id).map_err(write_err)?;

        self.seen.insert(id.to_string());
        Ok(true)
    }
}

/// Identifiers or share URLs waiting to be fetched, one per line.
pub fn read_queue(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(non_empty_lines(&text).collect())
}

/// Truncate the queue once every entry has been handled.
pub fn clear_queue(path: &Path) -> Result<()> {
    fs::write(path, "").map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}
