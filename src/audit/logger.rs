//! Audit log file
//!
//! One JSON object per line, appended after each ledger mutation. A line that
//! cannot be parsed (a write cut short by a crash, a hand edit) is skipped
//! with a warning and counted, so the rest of the history stays readable.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::LedgerResult;
use crate::storage::file_io::read_text;

use super::entry::AuditEntry;

/// Entries read back from the log
#[derive(Debug, Clone, Default)]
pub struct AuditHistory {
    /// Readable entries, oldest first
    pub entries: Vec<AuditEntry>,
    /// Lines that could not be parsed
    pub skipped: usize,
}

impl AuditHistory {
    /// The last `count` entries, oldest first
    pub fn recent(&self, count: usize) -> &[AuditEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }
}

/// Append-only audit log at a fixed path
#[derive(Debug, Clone)]
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, creating the file on first use
    pub fn append(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Read the whole log; a missing file is an empty history
    pub fn history(&self) -> LedgerResult<AuditHistory> {
        let Some(text) = read_text(&self.path)? else {
            return Ok(AuditHistory::default());
        };

        let mut history = AuditHistory::default();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<AuditEntry>(line) {
                Ok(entry) => history.entries.push(entry),
                Err(e) => {
                    warn!(line = idx + 1, error = %e, "skipping unreadable audit line");
                    history.skipped += 1;
                }
            }
        }
        Ok(history)
    }

    /// All readable entries, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        Ok(self.history()?.entries)
    }

    /// The last `count` readable entries, oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        Ok(self.history()?.recent(count).to_vec())
    }

    pub fn entry_count(&self) -> LedgerResult<usize> {
        Ok(self.history()?.entries.len())
    }
}
