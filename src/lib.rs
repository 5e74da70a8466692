//! Naive matrix multiplication baseline and its benchmark harness.
//!
//! The kernel is the textbook triple loop with no blocking, SIMD, or
//! threads. It is meant to be the slow reference point that other
//! implementations are compared against. The harness around it times
//! repeated runs per matrix size and appends one CSV row per trial
//! (wall time, normalized CPU%, resident memory).
//!
//! ## Usage
//!
//! ```
//! use matmul_bench::{Matrix, multiply};
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! ```
//!
//! Running the harness programmatically:
//!
//! ```no_run
//! use matmul_bench::{BenchConfig, Harness};
//!
//! let config = BenchConfig {
//!     sizes: vec![64, 128],
//!     runs: 5,
//!     ..BenchConfig::default()
//! };
//! let records = Harness::new(config).run()?;
//! println!("{} trials recorded", records.len());
//! # Ok::<(), matmul_bench::BenchError>(())
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod matrix;
pub mod metrics;
pub mod recorder;

pub use config::{BenchArgs, BenchConfig};
pub use error::BenchError;
pub use harness::{Harness, run_id_now};
pub use matrix::naive_ijk::{matmul_naive_ijk, multiply};
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use matrix::{Matrix, random_matrix};
pub use metrics::{NullProbe, ProcessProbe, SystemProbe, TrialMetrics};
pub use recorder::{CsvRecorder, TrialRecord};
