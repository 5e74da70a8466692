/// Matrix multiplication using i-k-j loop order.
///
/// Swapping the j and k loops makes the innermost loop walk both B and C
/// sequentially. The harness does not time this one: it is the reference
/// the timed i-j-k kernel is checked against before any benchmarking, so
/// the two share no code path.
///
/// For every (i, j) the products are added in the same `p` order as the
/// i-j-k kernel, so on a zeroed C both produce the same values.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ikj(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for p in 0..k {
            let a_ip = a[i * k + p];
            for j in 0..n {
                c[i * n + j] += a_ip * b[p * n + j];
            }
        }
    }
}
