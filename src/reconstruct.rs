//! Rational reconstruction of scalars
//!
//! Given a scalar `k` and a group order `r`, find small integers standing in
//! a modular relation to `k`: `k ≡ x/z (mod r)`, or the 4- and 6-coordinate
//! variants over a quadratic extension generated by `λ`. Scalar
//! multiplication code uses these small coefficients to replace one
//! full-width scalar by several short ones.
//!
//! The 2D problem is solved directly by [`half_gcd`]; the larger variants
//! build a fixed lattice whose short vectors are the answers and reduce it
//! with [`LLL`], stopping early once a row fits under the variant's size
//! threshold (`r^(2/3)`, `r^(1/4)` or `r^(1/3)`).
//!
//! [`Reconstructor`] caches the integer roots of `r` so that repeated
//! reconstructions against one modulus amortize their cost; the free
//! functions build a throwaway cache and delegate, so both paths return
//! identical tuples for identical inputs.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};
use crate::halfgcd::half_gcd;
use crate::lattice::{EarlyExit, LatticeBasis, LLLConfig, LLL};
use crate::roots::{icbrt, isqrt};

/// Per-modulus cache for rational reconstruction.
///
/// Holds `r` and the derived thresholds `⌊√r⌋`, `⌊∛r⌋`, `⌊r^(2/3)⌋` and
/// `⌊r^(1/4)⌋`, plus the optional extension generator `λ`. Read-only after
/// construction (apart from the one-time [`Reconstructor::set_lambda`]), so
/// a built value is safe to share across threads for concurrent
/// reconstructions.
#[derive(Debug, Clone)]
pub struct Reconstructor {
    r: BigInt,
    sqrt_r: BigInt,
    cbrt_r: BigInt,
    r_two_thirds: BigInt,
    r_fourth: BigInt,
    lambda: Option<BigInt>,
}

impl Reconstructor {
    /// Build the cache for a modulus. Fails with
    /// [`Error::InvalidModulus`] unless `r > 1`.
    pub fn new(r: BigInt) -> Result<Self> {
        if r <= BigInt::one() {
            return Err(Error::InvalidModulus);
        }
        let sqrt_r = isqrt(&r);
        let cbrt_r = icbrt(&r);
        let r_two_thirds = icbrt(&(&r * &r));
        let r_fourth = isqrt(&sqrt_r);
        Ok(Self { r, sqrt_r, cbrt_r, r_two_thirds, r_fourth, lambda: None })
    }

    /// Attach the quadratic extension generator required by the `*_ext`
    /// reconstructions. Intended to be called once, at construction time,
    /// before the value is shared.
    pub fn set_lambda(mut self, lambda: BigInt) -> Self {
        self.lambda = Some(lambda);
        self
    }

    /// The modulus this cache was built for.
    pub fn modulus(&self) -> &BigInt {
        &self.r
    }

    /// Find small `(x, z)` with `x ≡ z·k (mod r)` and
    /// `|x|, |z| < (2/√3)·√r`.
    pub fn rational_reconstruct(&self, k: &BigInt) -> (BigInt, BigInt) {
        half_gcd(k, &self.r, &self.sqrt_r)
    }

    /// Find small `(x1, x2, z)` with `x1 ≡ k1·z` and `x2 ≡ k2·z (mod r)`,
    /// all of magnitude about `r^(2/3)`.
    pub fn multi_rational_reconstruct(&self, k1: &BigInt, k2: &BigInt) -> (BigInt, BigInt, BigInt) {
        let basis = LatticeBasis::multi_reconstruct(k1, k2, &self.r);
        let [x1, x2, z] = reduce_and_select(basis, &[2], &self.r_two_thirds);
        (x1, x2, z)
    }

    /// Find small `(x, y, z, t)` with `x + λy ≡ k·(z + λt) (mod r)`, all of
    /// magnitude about `r^(1/4)`. Fails with [`Error::MissingLambda`] until
    /// [`Reconstructor::set_lambda`] has been called.
    pub fn rational_reconstruct_ext(&self, k: &BigInt) -> Result<(BigInt, BigInt, BigInt, BigInt)> {
        let lambda = self.lambda.as_ref().ok_or(Error::MissingLambda)?;
        let basis = LatticeBasis::reconstruct_ext(k, &self.r, lambda);
        let [x, y, z, t] = reduce_and_select(basis, &[2, 3], &self.r_fourth);
        Ok((x, y, z, t))
    }

    /// Find small `(x1, y1, x2, y2, z, t)` with
    /// `x1 + λy1 ≡ k1·(z + λt)` and `x2 + λy2 ≡ k2·(z + λt) (mod r)`, all
    /// of magnitude about `r^(1/3)`. Fails with [`Error::MissingLambda`]
    /// until [`Reconstructor::set_lambda`] has been called.
    pub fn multi_rational_reconstruct_ext(
        &self,
        k1: &BigInt,
        k2: &BigInt,
    ) -> Result<(BigInt, BigInt, BigInt, BigInt, BigInt, BigInt)> {
        let lambda = self.lambda.as_ref().ok_or(Error::MissingLambda)?;
        let basis = LatticeBasis::multi_reconstruct_ext(k1, k2, &self.r, lambda);
        let [x1, y1, x2, y2, z, t] = reduce_and_select(basis, &[4, 5], &self.cbrt_r);
        Ok((x1, y1, x2, y2, z, t))
    }
}

/// Reduce a reconstruction basis and pick the winning row.
///
/// An early-exit row is returned as-is (first found wins). After a completed
/// full reduction the winner is, among rows with a non-zero entry in one of
/// the denominator columns, the row of minimal infinity norm, ties broken by
/// row order.
///
/// # Panics
///
/// Panics when the reduction errors out or no row has a non-zero
/// denominator entry after a completed reduction. Both indicate a bug in
/// the basis construction, not a caller error: the basis always contains a
/// row with a `1` in a denominator column, and reduction preserves its span.
fn reduce_and_select<const N: usize>(
    mut basis: LatticeBasis,
    denominator_columns: &[usize],
    bound: &BigInt,
) -> [BigInt; N] {
    let config = LLLConfig {
        early_exit: Some(EarlyExit {
            denominator_columns: denominator_columns.to_vec(),
            bound: bound.clone(),
        }),
        ..LLLConfig::default()
    };

    let outcome = match LLL::reduce(&mut basis, &config) {
        Ok(outcome) => outcome,
        Err(err) => panic!("lattice reduction failed on a reconstruction basis: {err}"),
    };

    let winner = match outcome.early_row {
        Some(i) => i,
        None => match best_row(&basis, denominator_columns) {
            Some(i) => i,
            None => panic!("reduced basis has no row with a non-zero denominator component"),
        },
    };

    match <[BigInt; N]>::try_from(basis.vectors.swap_remove(winner)) {
        Ok(coordinates) => coordinates,
        Err(_) => unreachable!("reconstruction basis rows have {} components", N),
    }
}

/// Among rows with a non-zero entry in one of the denominator columns, the
/// index of the row with minimal infinity norm (first occurrence wins ties).
fn best_row(basis: &LatticeBasis, denominator_columns: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, BigInt)> = None;
    for (i, row) in basis.vectors.iter().enumerate() {
        if denominator_columns.iter().all(|&c| row[c].is_zero()) {
            continue;
        }
        let norm = row.iter().map(|v| v.abs()).max().unwrap_or_else(BigInt::zero);
        match &best {
            Some((_, smallest)) if *smallest <= norm => {}
            _ => best = Some((i, norm)),
        }
    }
    best.map(|(i, _)| i)
}

/// Standalone form of [`Reconstructor::rational_reconstruct`]; builds the
/// root cache for `r` on the fly.
pub fn rational_reconstruct(k: &BigInt, r: &BigInt) -> Result<(BigInt, BigInt)> {
    Ok(Reconstructor::new(r.clone())?.rational_reconstruct(k))
}

/// Standalone form of [`Reconstructor::multi_rational_reconstruct`].
pub fn multi_rational_reconstruct(
    k1: &BigInt,
    k2: &BigInt,
    r: &BigInt,
) -> Result<(BigInt, BigInt, BigInt)> {
    Ok(Reconstructor::new(r.clone())?.multi_rational_reconstruct(k1, k2))
}

/// Standalone form of [`Reconstructor::rational_reconstruct_ext`].
pub fn rational_reconstruct_ext(
    k: &BigInt,
    r: &BigInt,
    lambda: &BigInt,
) -> Result<(BigInt, BigInt, BigInt, BigInt)> {
    Reconstructor::new(r.clone())?
        .set_lambda(lambda.clone())
        .rational_reconstruct_ext(k)
}

/// Standalone form of [`Reconstructor::multi_rational_reconstruct_ext`].
pub fn multi_rational_reconstruct_ext(
    k1: &BigInt,
    k2: &BigInt,
    r: &BigInt,
    lambda: &BigInt,
) -> Result<(BigInt, BigInt, BigInt, BigInt, BigInt, BigInt)> {
    Reconstructor::new(r.clone())?
        .set_lambda(lambda.clone())
        .multi_rational_reconstruct_ext(k1, k2)
}
