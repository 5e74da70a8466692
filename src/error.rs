//! Error kinds for the benchmark harness.
//!
//! Every one of these is fatal: the binary prints it and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(
        "kernel self-check failed on {n}x{n} case: max abs error {max_abs_error:e} exceeds {tolerance:e}"
    )]
    Verification {
        n: usize,
        max_abs_error: f64,
        tolerance: f64,
    },

    #[error("dimension mismatch: cannot multiply {}x{} by {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }
}
