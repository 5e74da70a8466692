use rand::Rng;
use rand::distributions::Standard;

use crate::matrix::Matrix;

/// Generate an `n × n` matrix with entries drawn uniformly from [0, 1).
///
/// Entries are drawn row by row from `rng`, so the same seed and the same
/// sequence of calls reproduce the same matrices.
pub fn random_matrix<R: Rng>(n: usize, rng: &mut R) -> Matrix {
    let mut m = Matrix::zeros(n, n);
    for x in m.as_mut_slice() {
        *x = rng.sample(Standard);
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn entries_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(27);
        let m = random_matrix(32, &mut rng);

        assert_eq!(m.shape(), (32, 32));
        assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn same_seed_same_matrices() {
        let mut r1 = StdRng::seed_from_u64(27);
        let mut r2 = StdRng::seed_from_u64(27);

        let (a1, b1) = (random_matrix(16, &mut r1), random_matrix(16, &mut r1));
        let (a2, b2) = (random_matrix(16, &mut r2), random_matrix(16, &mut r2));

        let bits = |m: &Matrix| m.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a1), bits(&a2));
        assert_eq!(bits(&b1), bits(&b2));
        assert_ne!(bits(&a1), bits(&b1));
    }

    #[test]
    fn different_seed_different_matrix() {
        let a = random_matrix(8, &mut StdRng::seed_from_u64(27));
        let b = random_matrix(8, &mut StdRng::seed_from_u64(28));
        assert_ne!(a, b);
    }
}
