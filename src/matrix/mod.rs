//! Dense matrices and the naive multiplication kernels.
//!
//! Nothing in here is optimized on purpose: the kernels are the baseline
//! the harness measures, and the i-k-j variant doubles as the reference
//! the harness checks itself against.

pub mod dense;
pub mod naive_ijk;
pub mod naive_ikj;
pub mod random;

pub use dense::Matrix;
pub use random::random_matrix;
