use crate::error::BenchError;

/// Row-major dense matrix of `f64`.
///
/// Element (i, j) lives at `data[i * cols + j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("{}x{} matrix: element count overflows usize", rows, cols));
        Matrix {
            rows,
            cols,
            data: vec![0.0; len],
        }
    }

    /// Wraps row-major `data` as a `rows × cols` matrix.
    ///
    /// Fails if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, BenchError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(BenchError::DimensionMismatch {
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Largest absolute element-wise difference, or `None` if shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_checks_length() {
        assert!(Matrix::from_vec(2, 2, vec![1.0; 4]).is_ok());
        assert!(matches!(
            Matrix::from_vec(2, 2, vec![1.0; 5]),
            Err(BenchError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn from_vec_rejects_overflowing_shape() {
        assert!(matches!(
            Matrix::from_vec(usize::MAX, 2, vec![0.0; 2]),
            Err(BenchError::DimensionMismatch { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn zeros_panics_on_overflowing_shape() {
        Matrix::zeros(usize::MAX, 2);
    }

    #[test]
    fn get_is_row_major() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
    }

    #[test]
    fn max_abs_diff_requires_same_shape() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(3, 2);
        assert_eq!(a.max_abs_diff(&b), None);

        let c = Matrix::from_vec(2, 3, vec![0.0, 0.5, 0.0, -2.0, 0.0, 0.0]).unwrap();
        assert_eq!(a.max_abs_diff(&c), Some(2.0));
    }
}
