use crate::error::BenchError;
use crate::matrix::Matrix;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation and the kernel the
/// harness times. The innermost loop walks B with stride `n`
/// (column-wise), so it misses cache on nearly every iteration.
///
/// Each output element is summed in a scalar accumulator and then stored,
/// so whatever `c` held before is overwritten (C = A * B).
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        let row = i * k;
        for j in 0..n {
            let mut acc = 0.0;
            for p in 0..k {
                acc += a[row + p] * b[p * n + j];
            }
            c[i * n + j] = acc;
        }
    }
}

/// C = A × B for an (m × k) and a (k × n) matrix.
///
/// The inner dimension is always checked, square inputs included.
///
/// ```
/// use matmul_bench::{Matrix, multiply};
///
/// let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
///
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, BenchError> {
    if a.cols() != b.rows() {
        return Err(BenchError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let mut c = Matrix::zeros(m, n);
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), m, n, k);
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_previous_contents() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        let mut c = [100.0; 4];

        matmul_naive_ijk(&a, &b, &mut c, 2, 2, 2);

        assert_eq!(c, [19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn rejects_incompatible_inner_dimension() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);

        match multiply(&a, &b) {
            Err(BenchError::DimensionMismatch { left, right }) => {
                assert_eq!(left, (2, 3));
                assert_eq!(right, (2, 2));
            }
            other => panic!("expected dimension mismatch, got {:?}", other),
        }
    }

    #[test]
    fn output_shape_is_rows_of_a_by_cols_of_b() {
        let a = Matrix::zeros(4, 7);
        let b = Matrix::zeros(7, 3);

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (4, 3));
    }
}
