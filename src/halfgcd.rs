//! Half-GCD rational reconstruction
//!
//! The 2D reconstruction problem, finding small `(x, z)` with
//! `x ≡ z·k (mod r)`, does not need lattice reduction at all: the extended Euclidean
//! algorithm, stopped as soon as the remainder drops below `√r`, produces a
//! pair with `|x|, |z| < (2/√3)·√r`. The loop maintains the invariant
//! `r_i ≡ t_i·k (mod r)`, so the first remainder below the threshold is the
//! answer.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Extended Euclidean iteration on `(r, k mod r)`, halted at `remainder < √r`.
///
/// Returns `(x, z) = (r_i, t_i)` satisfying `x ≡ z·k (mod r)`. The caller
/// supplies the precomputed `⌊√r⌋` threshold; `r` must be positive.
pub fn half_gcd(k: &BigInt, r: &BigInt, sqrt_r: &BigInt) -> (BigInt, BigInt) {
    let mut r0 = r.clone();
    let mut r1 = k.mod_floor(r);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while &r1 >= sqrt_r {
        let q = &r0 / &r1;

        let rem = &r0 - &q * &r1;
        r0 = r1;
        r1 = rem;

        let t = &t0 - &q * &t1;
        t0 = t1;
        t1 = t;
    }

    (r1, t1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::isqrt;

    fn congruent(x: &BigInt, z: &BigInt, k: &BigInt, r: &BigInt) -> bool {
        (x - z * k).mod_floor(r).is_zero()
    }

    #[test]
    fn test_half_gcd_small_modulus_exhaustive() {
        let r = BigInt::from(1009);
        let sqrt_r = isqrt(&r);
        // 1.5 * sqrt(1009) ≈ 47.6
        let bound = BigInt::from(48);

        for k in 1..1009i64 {
            let k = BigInt::from(k);
            let (x, z) = half_gcd(&k, &r, &sqrt_r);
            assert!(congruent(&x, &z, &k, &r), "congruence failed for k={k}");
            assert!(x.magnitude() <= bound.magnitude(), "x too large for k={k}");
            assert!(z.magnitude() <= bound.magnitude(), "z too large for k={k}");
        }
    }

    #[test]
    fn test_half_gcd_zero_scalar() {
        let r = BigInt::from(1009);
        let sqrt_r = isqrt(&r);
        let (x, z) = half_gcd(&BigInt::zero(), &r, &sqrt_r);
        assert_eq!(x, BigInt::zero());
        assert_eq!(z, BigInt::one());
    }

    #[test]
    fn test_half_gcd_reduces_scalar_first() {
        let r = BigInt::from(1009);
        let sqrt_r = isqrt(&r);
        let k = BigInt::from(5);
        // k + 3r and k must reconstruct to the same pair
        let shifted = &k + BigInt::from(3) * &r;
        assert_eq!(half_gcd(&k, &r, &sqrt_r), half_gcd(&shifted, &r, &sqrt_r));
        // and a negative representative too
        let negative = &k - BigInt::from(2) * &r;
        assert_eq!(half_gcd(&k, &r, &sqrt_r), half_gcd(&negative, &r, &sqrt_r));
    }
}
