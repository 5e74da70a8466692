//! The benchmark driver.
//!
//! ```text
//! Configure → VerifyCorrectness → for each size: Generate → for each run: Measure → Record
//! ```
//!
//! Everything runs on the calling thread. The first error stops the run;
//! rows already appended stay in the file.

use std::hint::black_box;

use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::matrix::naive_ikj::matmul_naive_ikj;
use crate::matrix::{Matrix, random_matrix};
use crate::metrics::{ProcessProbe, SystemProbe, TrialMetrics};
use crate::recorder::{CsvRecorder, TrialRecord};

/// Absolute tolerance for the kernel self-check.
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// Signature of a kernel the harness can time.
pub type Kernel = fn(&Matrix, &Matrix) -> Result<Matrix, BenchError>;

/// Tag shared by every row of one invocation, local time as `DD/MM/HH/MM`.
///
/// Two invocations within the same minute get the same tag.
pub fn run_id_now() -> String {
    Local::now().format("%d/%m/%H/%M").to_string()
}

/// Multiply `a` and `b` with `kernel` and compare against the i-k-j reference.
///
/// Returns the largest absolute element error.
pub fn verify_kernel(kernel: Kernel, a: &Matrix, b: &Matrix) -> Result<f64, BenchError> {
    let got = kernel(a, b)?;

    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let mut expected = Matrix::zeros(m, n);
    matmul_naive_ikj(a.as_slice(), b.as_slice(), expected.as_mut_slice(), m, n, k);

    // A wrong shape can never pass.
    Ok(got.max_abs_diff(&expected).unwrap_or(f64::INFINITY))
}

pub struct Harness<P: ProcessProbe = SystemProbe> {
    config: BenchConfig,
    run_id: String,
    kernel: Kernel,
    probe: P,
}

impl Harness<SystemProbe> {
    pub fn new(config: BenchConfig) -> Self {
        Harness::with_probe(config, SystemProbe::new())
    }
}

impl<P: ProcessProbe> Harness<P> {
    pub fn with_probe(config: BenchConfig, probe: P) -> Self {
        Harness {
            config,
            run_id: run_id_now(),
            kernel: crate::multiply,
            probe,
        }
    }

    /// Replace the kernel under test.
    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = run_id.into();
        self
    }

    /// Check the kernel on a seeded `check_n × check_n` case.
    pub fn verify(&self) -> Result<(), BenchError> {
        let n = self.config.check_n;
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);

        let max_abs_error = verify_kernel(self.kernel, &a, &b)?;
        if max_abs_error.is_nan() || max_abs_error > VERIFY_TOLERANCE {
            return Err(BenchError::Verification {
                n,
                max_abs_error,
                tolerance: VERIFY_TOLERANCE,
            });
        }
        tracing::info!(n, max_abs_error, "kernel self-check passed");
        Ok(())
    }

    /// Verify, then time every (size, run) pair and append each trial to
    /// the CSV as soon as it is measured.
    pub fn run(&mut self) -> Result<Vec<TrialRecord>, BenchError> {
        self.config.validate()?;
        self.verify()?;

        let recorder = CsvRecorder::new(&self.config.out);
        if recorder.ensure_header()? {
            tracing::info!(path = %recorder.path().display(), "created results file");
        }

        let cores = self.probe.logical_cores();
        tracing::info!(
            run_id = %self.run_id,
            sizes = ?self.config.sizes,
            runs = self.config.runs,
            seed = self.config.seed,
            cores,
            "starting benchmark"
        );

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut records = Vec::with_capacity(self.config.sizes.len() * self.config.runs);

        for &n in &self.config.sizes {
            let a = random_matrix(n, &mut rng);
            let b = random_matrix(n, &mut rng);
            tracing::debug!(n, "generated inputs");

            for run_idx in 1..=self.config.runs {
                let metrics = measure(&mut self.probe, self.kernel, &a, &b, cores)?;
                println!(
                    "n={} run={} time={:.2} ms CPU={:.1}% MEM={:.2} MiB",
                    n, run_idx, metrics.time_ms, metrics.cpu_pct, metrics.peak_mib
                );

                let record = TrialRecord {
                    run_id: self.run_id.clone(),
                    language: self.config.language.clone(),
                    size: n,
                    run_idx,
                    metrics,
                };
                recorder.append(&record)?;
                records.push(record);
            }
        }

        tracing::info!(trials = records.len(), "benchmark finished");
        Ok(records)
    }
}

/// One timed kernel call between two probe snapshots.
fn measure<P: ProcessProbe>(
    probe: &mut P,
    kernel: Kernel,
    a: &Matrix,
    b: &Matrix,
    cores: usize,
) -> Result<TrialMetrics, BenchError> {
    let before = probe.start_snapshot();
    let c = kernel(black_box(a), black_box(b))?;
    let after = probe.end_snapshot();
    black_box(c);

    Ok(TrialMetrics::from_snapshots(&before, &after, cores))
}
