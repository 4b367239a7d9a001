//! Lattice basis representation
//!
//! A dense basis of `m` row vectors in `Z^n`, together with the fixed
//! constructors for the rational-reconstruction lattices. The bases built
//! here are generator sets rather than bases in the strict sense: every
//! reconstruction lattice has more rows than columns (`m > n`), one
//! `r`-scaled identity row per coordinate plus the rows that link the
//! coordinates through the modular relations being solved.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// A lattice generator matrix: `m` row vectors spanning a lattice in `Z^n`.
///
/// Rows are swapped and rewritten in place during reduction; a basis is
/// owned by a single reduction call and never shared.
#[derive(Debug, Clone)]
pub struct LatticeBasis {
    /// Row vectors, `m` rows of length `n`.
    pub vectors: Vec<Vec<BigInt>>,
    /// Number of rows (generators).
    pub m: usize,
    /// Dimension of the ambient space (columns).
    pub n: usize,
}

impl LatticeBasis {
    /// Create a basis from row vectors.
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty or have inconsistent dimensions.
    pub fn new(vectors: Vec<Vec<BigInt>>) -> Self {
        assert!(!vectors.is_empty(), "basis cannot be empty");
        let n = vectors[0].len();
        assert!(n > 0, "basis rows cannot be empty");
        assert!(
            vectors.iter().all(|v| v.len() == n),
            "all rows must have the same dimension"
        );

        let m = vectors.len();
        Self { vectors, m, n }
    }

    /// Create a basis from integer slices.
    pub fn from_rows<T: Into<BigInt> + Clone>(rows: &[Vec<T>]) -> Self {
        let vectors: Vec<Vec<BigInt>> = rows
            .iter()
            .map(|row| row.iter().map(|x| x.clone().into()).collect())
            .collect();
        Self::new(vectors)
    }

    /// Create a random basis for testing.
    ///
    /// # Arguments
    /// * `m` - Number of rows
    /// * `n` - Dimension of the ambient space
    /// * `bits` - Maximum bit size of the entries (must be below 63)
    pub fn random(m: usize, n: usize, bits: usize) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        let vectors: Vec<Vec<BigInt>> = (0..m)
            .map(|_| {
                (0..n)
                    .map(|_| {
                        let v: i64 = rng.gen_range(-(1i64 << (bits - 1))..(1i64 << (bits - 1)));
                        BigInt::from(v)
                    })
                    .collect()
            })
            .collect();

        Self { vectors, m, n }
    }

    /// The 4×3 lattice for the two-scalar reconstruction
    /// `x1 ≡ k1·z (mod r)`, `x2 ≡ k2·z (mod r)`:
    ///
    /// ```text
    /// [ r   0   0 ]
    /// [ 0   r   0 ]
    /// [ 0   0   r ]
    /// [ k1  k2  1 ]
    /// ```
    pub fn multi_reconstruct(k1: &BigInt, k2: &BigInt, r: &BigInt) -> Self {
        let mut vectors = vec![vec![BigInt::zero(); 3]; 4];
        vectors[0][0] = r.clone();
        vectors[1][1] = r.clone();
        vectors[2][2] = r.clone();
        vectors[3][0] = k1.mod_floor(r);
        vectors[3][1] = k2.mod_floor(r);
        vectors[3][2] = BigInt::one();
        Self::new(vectors)
    }

    /// The 7×4 lattice for the quadratic-extension reconstruction
    /// `x + λy ≡ k·(z + λt) (mod r)`:
    ///
    /// ```text
    /// [ r   0   0   0 ]
    /// [ 0   r   0   0 ]
    /// [ 0   0   r   0 ]
    /// [ 0   0   0   r ]
    /// [ -λ  1   0   0 ]
    /// [ k   0   1   0 ]
    /// [ 0   0  -λ   1 ]
    /// ```
    pub fn reconstruct_ext(k: &BigInt, r: &BigInt, lambda: &BigInt) -> Self {
        let neg_lambda = (-lambda).mod_floor(r);
        let mut vectors = vec![vec![BigInt::zero(); 4]; 7];
        vectors[0][0] = r.clone();
        vectors[1][1] = r.clone();
        vectors[2][2] = r.clone();
        vectors[3][3] = r.clone();
        vectors[4][0] = neg_lambda.clone();
        vectors[4][1] = BigInt::one();
        vectors[5][0] = k.mod_floor(r);
        vectors[5][2] = BigInt::one();
        vectors[6][2] = neg_lambda;
        vectors[6][3] = BigInt::one();
        Self::new(vectors)
    }

    /// The 10×6 lattice for the two-scalar quadratic-extension
    /// reconstruction `x1 + λy1 ≡ k1·(z + λt)`, `x2 + λy2 ≡ k2·(z + λt)`
    /// (mod r):
    ///
    /// ```text
    /// [ r   0   0   0   0   0 ]
    /// [ 0   r   0   0   0   0 ]
    /// [ 0   0   r   0   0   0 ]
    /// [ 0   0   0   r   0   0 ]
    /// [ 0   0   0   0   r   0 ]
    /// [ 0   0   0   0   0   r ]
    /// [ -λ  1   0   0   0   0 ]
    /// [ 0   0  -λ   1   0   0 ]
    /// [ k1  0   k2  0   1   0 ]
    /// [ 0   0   0   0  -λ   1 ]
    /// ```
    pub fn multi_reconstruct_ext(k1: &BigInt, k2: &BigInt, r: &BigInt, lambda: &BigInt) -> Self {
        let neg_lambda = (-lambda).mod_floor(r);
        let mut vectors = vec![vec![BigInt::zero(); 6]; 10];
        for i in 0..6 {
            vectors[i][i] = r.clone();
        }
        vectors[6][0] = neg_lambda.clone();
        vectors[6][1] = BigInt::one();
        vectors[7][2] = neg_lambda.clone();
        vectors[7][3] = BigInt::one();
        vectors[8][0] = k1.mod_floor(r);
        vectors[8][2] = k2.mod_floor(r);
        vectors[8][4] = BigInt::one();
        vectors[9][4] = neg_lambda;
        vectors[9][5] = BigInt::one();
        Self::new(vectors)
    }

    /// Row at index `i`.
    pub fn row(&self, i: usize) -> &[BigInt] {
        &self.vectors[i]
    }

    /// Swap two rows.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.vectors.swap(i, j);
    }

    /// Size-reduction step `b_i ← b_i − q·b_j`.
    pub fn reduce_row(&mut self, i: usize, j: usize, q: &BigInt) {
        for l in 0..self.n {
            let delta = q * &self.vectors[j][l];
            self.vectors[i][l] = &self.vectors[i][l] - delta;
        }
    }
}

impl fmt::Display for LatticeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LatticeBasis ({}×{}):", self.m, self.n)?;
        for (i, v) in self.vectors.iter().enumerate() {
            write!(f, "  b_{}: [", i)?;
            for (j, x) in v.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
