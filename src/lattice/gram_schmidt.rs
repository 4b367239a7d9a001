//! Gram-Schmidt orthogonalization state
//!
//! Exact Gram-Schmidt data for an `m×n` basis: the orthogonalized (not
//! normalized) row vectors `b*_i`, the projection coefficients
//! `μ_ij = <b_i, b*_j> / ||b*_j||²` and the squared norms `B_i = ||b*_i||²`,
//! all as [`LazyRational`]s.
//!
//! The reduction loop only ever invalidates rows `k..m`, so the state is
//! recomputed incrementally from a given row instead of from scratch. The
//! division producing `μ_ij` is the single place lazy-rational division
//! runs; it is skipped (with `μ_ij = 0`) whenever `B_j = 0`, which happens
//! exactly when row `j` is linearly dependent on its predecessors, the
//! normal state of affairs for these `m > n` generator sets.

use crate::error::Result;
use crate::lattice::basis::LatticeBasis;
use crate::rational::LazyRational;

/// Gram-Schmidt state for an `m×n` basis.
///
/// Owned by a single reduction invocation; never persists between calls.
#[derive(Debug, Clone)]
pub struct GramSchmidt {
    /// Orthogonalized rows `b*_i` (`m×n`).
    pub ortho: Vec<Vec<LazyRational>>,
    /// Coefficients `μ_ij` for `j < i` (`m×m`, lower triangular).
    pub mu: Vec<Vec<LazyRational>>,
    /// Squared norms `B_i = ||b*_i||²`.
    pub norms: Vec<LazyRational>,
    m: usize,
    n: usize,
}

impl GramSchmidt {
    /// Zero-initialized state for an `m×n` basis.
    pub fn new(m: usize, n: usize) -> Self {
        Self {
            ortho: vec![vec![LazyRational::zero(); n]; m],
            mu: vec![vec![LazyRational::zero(); m]; m],
            norms: vec![LazyRational::zero(); m],
            m,
            n,
        }
    }

    /// Compute the full state for a basis.
    pub fn compute(basis: &LatticeBasis) -> Result<Self> {
        let mut gs = Self::new(basis.m, basis.n);
        gs.update_from(basis, 0)?;
        Ok(gs)
    }

    /// Recompute rows `from..m` of the orthogonalization.
    ///
    /// Rows below `from` are taken as still valid. The fresh `μ` values,
    /// norms and orthogonal rows are normalized once per recompute so the
    /// unreduced fractions do not grow across iterations.
    pub fn update_from(&mut self, basis: &LatticeBasis, from: usize) -> Result<()> {
        for i in from..self.m {
            for l in 0..self.n {
                self.ortho[i][l] = LazyRational::from_int(basis.vectors[i][l].clone());
            }

            for j in 0..i {
                if self.norms[j].is_zero() {
                    self.mu[i][j] = LazyRational::zero();
                    continue;
                }

                // μ_ij = <b_i, b*_j> / B_j
                let mut dot = LazyRational::zero();
                for l in 0..self.n {
                    let v = LazyRational::from_int(basis.vectors[i][l].clone());
                    let term = &v * &self.ortho[j][l];
                    dot = &dot + &term;
                }
                let mut mu = dot.quo(&self.norms[j])?;
                mu.normalize();

                // b*_i -= μ_ij * b*_j
                for l in 0..self.n {
                    let term = &mu * &self.ortho[j][l];
                    let updated = &self.ortho[i][l] - &term;
                    self.ortho[i][l] = updated;
                }
                self.mu[i][j] = mu;
            }

            // B_i = ||b*_i||²
            let mut norm = LazyRational::zero();
            for l in 0..self.n {
                let sq = &self.ortho[i][l] * &self.ortho[i][l];
                norm = &norm + &sq;
            }
            norm.normalize();
            self.norms[i] = norm;

            for l in 0..self.n {
                self.ortho[i][l].normalize();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn rat(n: i64, d: i64) -> LazyRational {
        LazyRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_gram_schmidt_2d() {
        let basis = LatticeBasis::from_rows(&[vec![3i64, 1], vec![2, 2]]);
        let gs = GramSchmidt::compute(&basis).unwrap();

        // B_0 = <b_0, b_0> = 9 + 1 = 10
        assert_eq!(gs.norms[0], LazyRational::from_int(10));
        // μ_10 = <b_1, b*_0> / B_0 = (6 + 2) / 10 = 4/5
        assert_eq!(gs.mu[1][0], rat(4, 5));
        // B_1 = ||b_1||² - μ_10² B_0 = 8 - (16/25)·10 = 8/5
        assert_eq!(gs.norms[1], rat(8, 5));
    }

    #[test]
    fn test_dependent_row_has_zero_norm() {
        // Third row = sum of the first two: b*_2 = 0, B_2 = 0,
        // and later μ entries against it stay zero.
        let basis =
            LatticeBasis::from_rows(&[vec![1i64, 0], vec![0, 1], vec![1, 1], vec![2, 3]]);
        let gs = GramSchmidt::compute(&basis).unwrap();

        assert!(gs.norms[2].is_zero());
        assert!(gs.mu[3][2].is_zero());
        // the fourth row still projects onto the first two
        assert_eq!(gs.mu[3][0], LazyRational::from_int(2));
        assert_eq!(gs.mu[3][1], LazyRational::from_int(3));
        assert!(gs.norms[3].is_zero());
    }

    #[test]
    fn test_incremental_update_matches_full_recompute() {
        let mut basis =
            LatticeBasis::from_rows(&[vec![4i64, 1, 0], vec![1, 3, 1], vec![2, 0, 5]]);
        let mut gs = GramSchmidt::compute(&basis).unwrap();

        // mutate row 1 and refresh from there
        basis.reduce_row(1, 0, &BigInt::from(1));
        gs.update_from(&basis, 1).unwrap();

        let fresh = GramSchmidt::compute(&basis).unwrap();
        for i in 0..3 {
            assert_eq!(gs.norms[i], fresh.norms[i]);
            for j in 0..i {
                assert_eq!(gs.mu[i][j], fresh.mu[i][j]);
            }
        }
    }
}
