//! LLL lattice reduction over exact rationals
//!
//! In-place reduction of an `m×n` integer basis (`m ≥ n`, degenerate rows
//! allowed) with size reduction and the Lovász condition at δ = 99/100.
//! All Gram-Schmidt bookkeeping is exact [`LazyRational`] arithmetic, with
//! no floating point anywhere, so the reduction is correct for inputs of
//! any magnitude.
//!
//! # Early exit
//!
//! The reconstruction callers do not need a fully reduced basis: they need
//! *one* row that is short enough and usable as a denominator. An
//! [`EarlyExit`] bound describes such a row (non-zero in at least one of
//! the named denominator columns, every component at most `bound` in
//! absolute value) and the loop returns the first row satisfying it. The
//! predicate is checked against every initial row, after every
//! size-reduction sub-step and after every swap; that checkpoint
//! granularity decides *which* row is returned, not just whether one is.

use log::{debug, trace};
use num_bigint::BigInt;

use crate::error::Result;
use crate::lattice::basis::LatticeBasis;
use crate::lattice::gram_schmidt::GramSchmidt;
use crate::rational::LazyRational;

/// LLL configuration parameters.
#[derive(Debug, Clone)]
pub struct LLLConfig {
    /// Lovász parameter δ as an exact fraction. Default 99/100.
    pub delta_num: i64,
    pub delta_den: i64,
    /// Optional early-exit bound; `None` reduces to completion.
    pub early_exit: Option<EarlyExit>,
}

impl Default for LLLConfig {
    fn default() -> Self {
        Self { delta_num: 99, delta_den: 100, early_exit: None }
    }
}

/// Acceptance predicate for a single row, letting the reduction stop before
/// full convergence.
///
/// A row satisfies the bound iff at least one of `denominator_columns` is
/// non-zero in it and every component has absolute value at most `bound`.
/// The column indices must be valid for the basis being reduced.
#[derive(Debug, Clone)]
pub struct EarlyExit {
    pub denominator_columns: Vec<usize>,
    pub bound: BigInt,
}

impl EarlyExit {
    fn satisfied_by(&self, row: &[BigInt]) -> bool {
        use num_traits::Zero;
        self.denominator_columns.iter().any(|&c| !row[c].is_zero())
            && row.iter().all(|v| v.magnitude() <= self.bound.magnitude())
    }
}

/// Counters from a reduction run.
#[derive(Debug, Clone, Default)]
pub struct LLLStats {
    /// Number of size-reduction steps performed.
    pub size_reductions: usize,
    /// Number of Lovász swaps performed.
    pub swaps: usize,
    /// Number of (partial) Gram-Schmidt recomputations.
    pub gs_updates: usize,
}

/// Result of a reduction run.
#[derive(Debug)]
pub struct LLLOutcome {
    /// Index of the first row that satisfied the early-exit bound, or `None`
    /// after a completed full reduction (or when no bound was set).
    pub early_row: Option<usize>,
    pub stats: LLLStats,
}

/// LLL lattice reduction.
pub struct LLL;

impl LLL {
    /// Reduce a basis in place.
    ///
    /// Returns the early-exit row index if the configured bound was
    /// satisfied, together with the run counters. The only error path is a
    /// division by zero inside the exact arithmetic, which the `B_j = 0`
    /// guards make unreachable for well-formed bases.
    pub fn reduce(basis: &mut LatticeBasis, config: &LLLConfig) -> Result<LLLOutcome> {
        trace!("lll: reducing {}x{} basis", basis.m, basis.n);

        let mut state = LLLState::new(basis, config)?;
        let early_row = state.run()?;
        let stats = state.stats;

        debug!(
            "lll: done, {} size reductions, {} swaps, {} gs updates, early row {:?}",
            stats.size_reductions, stats.swaps, stats.gs_updates, early_row
        );
        Ok(LLLOutcome { early_row, stats })
    }

    /// Check whether a basis is LLL-reduced under the given parameters
    /// (size-reduced and Lovász at every non-degenerate index).
    pub fn is_reduced(basis: &LatticeBasis, config: &LLLConfig) -> Result<bool> {
        let gs = GramSchmidt::compute(basis)?;
        let half = LazyRational::new(BigInt::from(1), BigInt::from(2));
        let delta = LazyRational::new(BigInt::from(config.delta_num), BigInt::from(config.delta_den));

        for i in 1..basis.m {
            for j in 0..i {
                if gs.norms[j].is_zero() {
                    continue;
                }
                if gs.mu[i][j].abs() > half {
                    return Ok(false);
                }
            }
        }
        for k in 1..basis.m {
            if gs.norms[k - 1].is_zero() {
                continue;
            }
            let mu = &gs.mu[k][k - 1];
            let mu_sq = mu * mu;
            let threshold = &delta - &mu_sq;
            let rhs = &threshold * &gs.norms[k - 1];
            if gs.norms[k] < rhs {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Working state of one reduction invocation: the basis borrow, its
/// Gram-Schmidt data and the loop counters.
struct LLLState<'a> {
    basis: &'a mut LatticeBasis,
    gs: GramSchmidt,
    delta: LazyRational,
    early_exit: Option<&'a EarlyExit>,
    stats: LLLStats,
}

impl<'a> LLLState<'a> {
    fn new(basis: &'a mut LatticeBasis, config: &'a LLLConfig) -> Result<Self> {
        let mut gs = GramSchmidt::new(basis.m, basis.n);
        gs.update_from(basis, 0)?;

        Ok(Self {
            delta: LazyRational::new(
                BigInt::from(config.delta_num),
                BigInt::from(config.delta_den),
            ),
            early_exit: config.early_exit.as_ref(),
            basis,
            gs,
            stats: LLLStats { gs_updates: 1, ..Default::default() },
        })
    }

    /// Check row `i` against the early-exit bound, if one is set.
    fn bound_satisfied(&self, i: usize) -> bool {
        match self.early_exit {
            Some(exit) => exit.satisfied_by(self.basis.row(i)),
            None => false,
        }
    }

    /// Refresh Gram-Schmidt data for rows `from..m`.
    fn refresh_from(&mut self, from: usize) -> Result<()> {
        self.gs.update_from(self.basis, from)?;
        self.stats.gs_updates += 1;
        Ok(())
    }

    fn run(&mut self) -> Result<Option<usize>> {
        let m = self.basis.m;

        // A row of the unreduced basis may already be acceptable.
        for i in 0..m {
            if self.bound_satisfied(i) {
                trace!("lll: initial row {i} satisfies the bound");
                return Ok(Some(i));
            }
        }

        let half = LazyRational::new(BigInt::from(1), BigInt::from(2));
        let mut k = 1usize;

        while k < m {
            // Size-reduce row k against rows k-1 .. 0, repeating until no
            // coefficient exceeds 1/2. Each subtraction invalidates rows
            // k..m and may already have produced an acceptable row.
            loop {
                let mut reduced = false;
                for j in (0..k).rev() {
                    if self.gs.norms[j].is_zero() {
                        continue;
                    }
                    if self.gs.mu[k][j].abs() > half {
                        let q = self.gs.mu[k][j].round_to_int();
                        self.basis.reduce_row(k, j, &q);
                        self.refresh_from(k)?;
                        self.stats.size_reductions += 1;
                        if self.bound_satisfied(k) {
                            return Ok(Some(k));
                        }
                        reduced = true;
                    }
                }
                if !reduced {
                    break;
                }
            }

            // A degenerate predecessor has no Lovász test to fail.
            if self.gs.norms[k - 1].is_zero() {
                k += 1;
                continue;
            }

            // Lovász condition: B_k ≥ (δ - μ²) B_{k-1}
            let mu = &self.gs.mu[k][k - 1];
            let mu_sq = mu * mu;
            let threshold = &self.delta - &mu_sq;
            let rhs = &threshold * &self.gs.norms[k - 1];

            if self.gs.norms[k] >= rhs {
                k += 1;
            } else {
                self.basis.swap(k, k - 1);
                self.refresh_from(k - 1)?;
                self.stats.swaps += 1;
                if self.bound_satisfied(k - 1) {
                    return Ok(Some(k - 1));
                }
                if self.bound_satisfied(k) {
                    return Ok(Some(k));
                }
                k = if k > 1 { k - 1 } else { 1 };
            }
        }

        Ok(None)
    }
}
