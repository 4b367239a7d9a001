//! Lattice basis reduction
//!
//! Exact-arithmetic LLL reduction for the reconstruction lattices: a dense
//! basis type with the fixed basis constructors, incremental Gram-Schmidt
//! state over lazy rationals, and the reduction engine with its optional
//! early-exit bound.
//!
//! # Key components
//!
//! - [`LatticeBasis`] - `m×n` integer basis and the reconstruction builders
//! - [`GramSchmidt`] - orthogonalized rows, `μ` coefficients, squared norms
//! - [`LLL`] - in-place reduction with size reduction + Lovász condition

pub mod basis;
pub mod gram_schmidt;
pub mod lll;

pub use basis::LatticeBasis;
pub use gram_schmidt::GramSchmidt;
pub use lll::{EarlyExit, LLLConfig, LLLOutcome, LLLStats, LLL};
