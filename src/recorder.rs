//! Append-only CSV output.
//!
//! Format (semicolon separated, one header line, then one line per trial):
//!
//! ```text
//! run_id;language;size;run_idx;time_ms;cpu_pct;peak_mib
//! 19/10/14/07;Rust;64;1;0.412;12.5;3.21
//! ```
//!
//! The file is shared across invocations and languages: the header is only
//! written when the file does not exist yet, and rows are only ever
//! appended. Nothing coordinates concurrent writers from separate
//! processes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::BenchError;
use crate::metrics::TrialMetrics;

pub const HEADER: &str = "run_id;language;size;run_idx;time_ms;cpu_pct;peak_mib";
pub const SEP: char = ';';

/// One measured trial, as written to the CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub run_id: String,
    pub language: String,
    pub size: usize,
    /// 1-based within its size group.
    pub run_idx: usize,
    pub metrics: TrialMetrics,
}

impl TrialRecord {
    /// Renders the row without a trailing newline. Rust formatting always
    /// uses `.` as the decimal point.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{}{SEP}{}{SEP}{}{SEP}{}{SEP}{:.3}{SEP}{:.1}{SEP}{:.2}",
            self.run_id,
            self.language,
            self.size,
            self.run_idx,
            self.metrics.time_ms,
            self.metrics.cpu_pct,
            self.metrics.peak_mib,
        )
    }
}

pub struct CsvRecorder {
    path: PathBuf,
}

impl CsvRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvRecorder { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with a header line if it does not exist.
    ///
    /// Returns `true` if the header was written. An existing file is left
    /// untouched, whatever it contains.
    pub fn ensure_header(&self) -> Result<bool, BenchError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BenchError::io(parent, e))?;
        }

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(BenchError::io(&self.path, e)),
        };

        writeln!(file, "{}", HEADER)
            .and_then(|_| file.flush())
            .map_err(|e| BenchError::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "wrote CSV header");
        Ok(true)
    }

    /// Appends one row and closes the file again, so every finished trial
    /// is on disk even if the process dies later.
    pub fn append(&self, record: &TrialRecord) -> Result<(), BenchError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| BenchError::io(&self.path, e))?;

        writeln!(file, "{}", record.to_csv_row())
            .and_then(|_| file.flush())
            .map_err(|e| BenchError::io(&self.path, e))
    }
}
