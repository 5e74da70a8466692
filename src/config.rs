//! Command-line configuration.
//!
//! ```text
//! matmul-bench [SIZES] [RUNS] [OUT] [SEED] [--check-n N] [--language TAG]
//! matmul-bench 64,128,256 5 output.csv 42
//! ```
//!
//! Every positional is optional; anything left out falls back to the
//! defaults below.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::error::BenchError;

pub const DEFAULT_SIZES: [usize; 5] = [64, 128, 256, 512, 1024];
pub const DEFAULT_RUNS: usize = 3;
pub const DEFAULT_OUT: &str = "results_raw.csv";
pub const DEFAULT_SEED: u64 = 27;
pub const DEFAULT_CHECK_N: usize = 5;
pub const DEFAULT_LANGUAGE: &str = "Rust";

/// Comma separated list of matrix sizes, e.g. `64,128,256`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeList(pub Vec<usize>);

impl FromStr for SizeList {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sizes = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let n: usize = part
                .parse()
                .map_err(|_| BenchError::Config(format!("size '{}' is not a whole number", part)))?;
            sizes.push(n);
        }
        Ok(SizeList(sizes))
    }
}

/// Naive matrix multiplication benchmark.
///
/// Times C = A × B for each size, `runs` times, and appends one row per
/// trial to a semicolon separated CSV file.
#[derive(Parser, Debug, Clone)]
#[command(name = "matmul-bench", version, about)]
pub struct BenchArgs {
    /// Comma separated matrix sizes [default: 64,128,256,512,1024]
    #[arg(value_name = "SIZES")]
    pub sizes: Option<SizeList>,

    /// Timed runs per size [default: 3]
    #[arg(value_name = "RUNS")]
    pub runs: Option<usize>,

    /// Output CSV path [default: results_raw.csv]
    #[arg(value_name = "OUT")]
    pub out: Option<PathBuf>,

    /// Random seed [default: 27]
    #[arg(value_name = "SEED")]
    pub seed: Option<u64>,

    /// Size of the square self-check run before benchmarking
    #[arg(long, default_value_t = DEFAULT_CHECK_N, value_name = "N")]
    pub check_n: usize,

    /// Value written to the `language` column
    #[arg(long, default_value = DEFAULT_LANGUAGE, value_name = "TAG")]
    pub language: String,
}

/// Fully resolved, validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub runs: usize,
    pub out: PathBuf,
    pub seed: u64,
    pub check_n: usize,
    pub language: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            runs: DEFAULT_RUNS,
            out: PathBuf::from(DEFAULT_OUT),
            seed: DEFAULT_SEED,
            check_n: DEFAULT_CHECK_N,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl BenchConfig {
    pub fn from_args(args: BenchArgs) -> Result<Self, BenchError> {
        let defaults = BenchConfig::default();
        let sizes = match args.sizes {
            Some(SizeList(sizes)) if !sizes.is_empty() => sizes,
            _ => defaults.sizes,
        };
        let config = BenchConfig {
            sizes,
            runs: args.runs.unwrap_or(defaults.runs),
            out: args.out.unwrap_or(defaults.out),
            seed: args.seed.unwrap_or(defaults.seed),
            check_n: args.check_n,
            language: args.language,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if let Some(bad) = self.sizes.iter().find(|&&n| n == 0) {
            return Err(BenchError::Config(format!("matrix size must be > 0, got {}", bad)));
        }
        if let Some(bad) = self.sizes.iter().find(|&&n| !fits_in_memory(n)) {
            return Err(BenchError::Config(format!(
                "matrix size {} is too large: {}x{} f64 elements overflow the address space",
                bad, bad, bad
            )));
        }
        if self.sizes.is_empty() {
            return Err(BenchError::Config("no matrix sizes given".into()));
        }
        if self.runs == 0 {
            return Err(BenchError::Config("runs per size must be > 0".into()));
        }
        if self.check_n == 0 || !fits_in_memory(self.check_n) {
            return Err(BenchError::Config(format!(
                "self-check size must be > 0 and addressable, got {}",
                self.check_n
            )));
        }
        if self.language.is_empty() || self.language.contains(['\n', ';']) {
            return Err(BenchError::Config(format!(
                "language tag {:?} cannot be empty or contain ';' or newlines",
                self.language
            )));
        }
        Ok(())
    }
}

/// Whether an `n × n` matrix of `f64` has a byte size a `Vec` can hold.
fn fits_in_memory(n: usize) -> bool {
    n.checked_mul(n)
        .and_then(|len| len.checked_mul(std::mem::size_of::<f64>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<BenchConfig, String> {
        let args = BenchArgs::try_parse_from(argv).map_err(|e| e.to_string())?;
        BenchConfig::from_args(args).map_err(|e| e.to_string())
    }

    #[test]
    fn no_arguments_gives_defaults() {
        assert_eq!(parse(&["matmul-bench"]).unwrap(), BenchConfig::default());
    }

    #[test]
    fn all_positionals() {
        let c = parse(&["matmul-bench", "64,128,256", "5", "output.csv", "42"]).unwrap();
        assert_eq!(c.sizes, vec![64, 128, 256]);
        assert_eq!(c.runs, 5);
        assert_eq!(c.out, PathBuf::from("output.csv"));
        assert_eq!(c.seed, 42);
    }

    #[test]
    fn partial_positionals_fall_back() {
        let c = parse(&["matmul-bench", "32", "2"]).unwrap();
        assert_eq!(c.sizes, vec![32]);
        assert_eq!(c.runs, 2);
        assert_eq!(c.out, PathBuf::from(DEFAULT_OUT));
        assert_eq!(c.seed, DEFAULT_SEED);
    }

    #[test]
    fn empty_size_list_uses_defaults() {
        let c = parse(&["matmul-bench", ""]).unwrap();
        assert_eq!(c.sizes, DEFAULT_SIZES.to_vec());
    }

    #[test]
    fn flags() {
        let c = parse(&["matmul-bench", "8", "--check-n", "7", "--language", "Rust-naive"]).unwrap();
        assert_eq!(c.check_n, 7);
        assert_eq!(c.language, "Rust-naive");
    }

    #[test]
    fn malformed_arguments_fail() {
        assert!(parse(&["matmul-bench", "64,abc"]).unwrap_err().contains("abc"));
        assert!(parse(&["matmul-bench", "64", "three"]).is_err());
        assert!(parse(&["matmul-bench", "64", "3", "out.csv", "-1"]).is_err());
        assert!(parse(&["matmul-bench", "64,0"]).unwrap_err().contains("> 0"));
        assert!(parse(&["matmul-bench", "64", "0"]).is_err());
        assert!(parse(&["matmul-bench", "64", "--check-n", "0"]).is_err());
        assert!(parse(&["matmul-bench", "64", "--language", "a;b"]).is_err());
        assert!(parse(&["matmul-bench", "64,4294967296"]).unwrap_err().contains("too large"));
        assert!(parse(&["matmul-bench", "64", "--check-n", "4294967296"]).is_err());
    }

    #[test]
    fn size_limit_is_byte_size_of_the_matrix() {
        assert!(fits_in_memory(1024));
        assert!(!fits_in_memory(1usize << (usize::BITS / 2)));
        assert!(!fits_in_memory(usize::MAX));
    }

    #[test]
    fn size_list_trims_whitespace() {
        let s: SizeList = " 4, 8 ,16".parse().unwrap();
        assert_eq!(s, SizeList(vec![4, 8, 16]));
    }
}
