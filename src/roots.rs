//! Integer root helpers
//!
//! Floor square and cube roots over `BigInt`, used to derive the size
//! thresholds `√r`, `∛r`, `r^(2/3)` and `r^(1/4)` cached by the
//! [`Reconstructor`](crate::Reconstructor). Both are Newton iterations that
//! converge from above and land exactly on the floor root.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Floor square root `⌊√n⌋`. Returns zero for `n ≤ 0`.
pub fn isqrt(n: &BigInt) -> BigInt {
    if !n.is_positive() {
        return BigInt::zero();
    }
    let mut x = n.clone();
    let mut y: BigInt = (&x + 1) / 2;
    while y < x {
        x = y;
        y = (&x + n / &x) / 2;
    }
    x
}

/// Floor cube root `⌊∛n⌋`. Returns zero for `n ≤ 0`.
///
/// Newton iteration `x ← (2x + n/x²) / 3` starting from
/// `2^⌈(bitlen(n)+2)/3⌉`, which is guaranteed to sit above the root. The
/// iteration decreases strictly until it stabilizes at the floor root or one
/// above it; the trailing loop corrects the overshoot.
pub fn icbrt(n: &BigInt) -> BigInt {
    if !n.is_positive() {
        return BigInt::zero();
    }
    let shift = (n.bits() + 2).div_ceil(3);
    let mut x: BigInt = BigInt::one() << shift;
    loop {
        let x_sq = &x * &x;
        let next: BigInt = (&x + &x + n / &x_sq) / 3;
        if next >= x {
            break;
        }
        x = next;
    }
    while &x * &x * &x > *n {
        x = x - 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_isqrt_small_values() {
        assert_eq!(isqrt(&big(0)), big(0));
        assert_eq!(isqrt(&big(1)), big(1));
        assert_eq!(isqrt(&big(2)), big(1));
        assert_eq!(isqrt(&big(3)), big(1));
        assert_eq!(isqrt(&big(4)), big(2));
        assert_eq!(isqrt(&big(99)), big(9));
        assert_eq!(isqrt(&big(100)), big(10));
        assert_eq!(isqrt(&big(101)), big(10));
        assert_eq!(isqrt(&big(-5)), big(0));
    }

    #[test]
    fn test_icbrt_small_values() {
        assert_eq!(icbrt(&big(0)), big(0));
        assert_eq!(icbrt(&big(1)), big(1));
        assert_eq!(icbrt(&big(7)), big(1));
        assert_eq!(icbrt(&big(8)), big(2));
        assert_eq!(icbrt(&big(26)), big(2));
        assert_eq!(icbrt(&big(27)), big(3));
        assert_eq!(icbrt(&big(28)), big(3));
        assert_eq!(icbrt(&big(999)), big(9));
        assert_eq!(icbrt(&big(1000)), big(10));
        assert_eq!(icbrt(&big(-27)), big(0));
    }

    #[test]
    fn test_roots_bracket_large_input() {
        // BN254 group order
        let r = BigInt::parse_bytes(
            b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
            10,
        )
        .unwrap();

        let s = isqrt(&r);
        assert!(&s * &s <= r);
        let s1 = &s + 1;
        assert!(&s1 * &s1 > r);

        let c = icbrt(&r);
        assert!(&c * &c * &c <= r);
        let c1 = &c + 1;
        assert!(&c1 * &c1 * &c1 > r);

        // r^(2/3) through the same cube-root routine
        let r_sq = &r * &r;
        let c23 = icbrt(&r_sq);
        assert!(&c23 * &c23 * &c23 <= r_sq);
    }

    #[test]
    fn test_icbrt_perfect_cubes() {
        for v in [2i64, 3, 10, 255, 1 << 20] {
            let cube = big(v) * big(v) * big(v);
            assert_eq!(icbrt(&cube), big(v));
            assert_eq!(icbrt(&(&cube - 1)), big(v - 1));
            assert_eq!(icbrt(&(&cube + 1)), big(v));
        }
    }
}
