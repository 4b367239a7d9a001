//! Exact lattice-based rational reconstruction for scalar decomposition
//!
//! Given a scalar `k` modulo a group order `r`, this library finds small
//! integer tuples standing in a modular relation to `k`: `(x, z)` with
//! `k ≡ x/z (mod r)` and `|x|, |z| ≲ √r`, or the 3-, 4- and 6-coordinate
//! variants with bounds `r^(2/3)`, `r^(1/4)` and `r^(1/3)`. GLV/GLS-style
//! scalar multiplication uses exactly these decompositions to trade one
//! full-width scalar for several short ones; this crate is the
//! reconstruction step only.
//!
//! # Overview
//!
//! The 2D problem is solved by the extended Euclidean algorithm halted at
//! `√r` (half-GCD). The larger variants encode their congruences as fixed
//! integer lattices and run LLL reduction over exact lazy-rational
//! arithmetic, with an early-exit bound that stops the reduction as soon as
//! an acceptable short row appears. Everything is exact; no floating point
//! is involved at any step.
//!
//! # Key components
//!
//! - [`Reconstructor`] - per-modulus cache (integer roots of `r`, optional
//!   `λ`) with the four reconstruction methods
//! - [`rational_reconstruct`], [`multi_rational_reconstruct`],
//!   [`rational_reconstruct_ext`], [`multi_rational_reconstruct_ext`] -
//!   standalone forms of the same operations
//! - [`lattice`] - the `m×n` basis type, Gram-Schmidt state and the LLL
//!   engine
//! - [`LazyRational`] - exact fraction type with explicit (amortized) GCD
//!   normalization
//!
//! The reconstructions are variable-time by design; none of this code is
//! suitable where side-channel resistance is required.

pub mod error;
pub mod halfgcd;
pub mod lattice;
pub mod rational;
pub mod reconstruct;
pub mod roots;

pub use error::{Error, Result};
pub use lattice::{EarlyExit, GramSchmidt, LatticeBasis, LLLConfig, LLLOutcome, LLLStats, LLL};
pub use rational::LazyRational;
pub use reconstruct::{
    multi_rational_reconstruct, multi_rational_reconstruct_ext, rational_reconstruct,
    rational_reconstruct_ext, Reconstructor,
};
