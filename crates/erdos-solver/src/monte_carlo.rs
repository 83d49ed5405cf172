//! Monte Carlo search.

use std::cell::RefCell;

use erdos_core::arith::{min_x, solve_for_z};
use erdos_core::{SearchResult, Solution};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::strategy::{ensure_positive, Strategy};

/// Samples `x` uniformly from `[n/4 + 1, 2n]` and `y` from `[x, 3n]`.
///
/// Each sample solves for `z` directly; the first triple with `z >= y` wins.
/// Results differ between runs unless the search is seeded. The generator
/// lives behind a `RefCell`, so a search is not `Sync`.
///
/// # Example
///
/// ```
/// use erdos_core::is_valid;
/// use erdos_solver::{MonteCarloSearch, Strategy};
/// use num_bigint::BigUint;
///
/// let n = BigUint::from(5u32);
/// let search = MonteCarloSearch::with_seed(10_000, 42);
/// let found = search.search(&n).unwrap();
/// assert!(is_valid(&n, found.as_ref()));
/// ```
#[derive(Debug)]
pub struct MonteCarloSearch {
    trials: u64,
    rng: RefCell<ChaCha8Rng>,
}

impl MonteCarloSearch {
    /// Creates an unseeded search.
    pub fn new(trials: u64) -> Self {
        Self {
            trials,
            rng: RefCell::new(ChaCha8Rng::from_os_rng()),
        }
    }

    /// Creates a search with a fixed seed for reproducible runs.
    pub fn with_seed(trials: u64, seed: u64) -> Self {
        Self {
            trials,
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }
}

impl Default for MonteCarloSearch {
    fn default() -> Self {
        Self::new(1_000_000)
    }
}

impl Strategy for MonteCarloSearch {
    fn name(&self) -> &str {
        "MonteCarlo"
    }

    fn search(&self, n: &BigUint) -> SearchResult {
        ensure_positive(n)?;

        let x_low = min_x(n);
        let x_high = n << 1u32;
        let y_high = n * 3u32;
        let mut rng = self.rng.borrow_mut();

        for trial in 0..self.trials {
            let x = sample_inclusive(&mut *rng, &x_low, &x_high);
            let y = sample_inclusive(&mut *rng, &x, &y_high);
            if let Some(z) = solve_for_z(n, &x, &y) {
                if z >= y {
                    debug!(strategy = "MonteCarlo", %n, trial, "solution found");
                    return Ok(Some(Solution::new(x, y, z)));
                }
            }
        }

        debug!(strategy = "MonteCarlo", %n, trials = self.trials, "budget exhausted");
        Ok(None)
    }
}

/// Uniform sample from `[low, high]`. Requires `low <= high`.
fn sample_inclusive<R: Rng>(rng: &mut R, low: &BigUint, high: &BigUint) -> BigUint {
    let span = high - low + 1u32;
    low + sample_below(rng, &span)
}

/// Uniform sample from `[0, bound)`. Requires `bound > 0`.
fn sample_below<R: Rng>(rng: &mut R, bound: &BigUint) -> BigUint {
    if let Some(small) = bound.to_u64() {
        return BigUint::from(rng.random_range(0..small));
    }

    // Rejection sampling on bit-length-sized draws; expected < 2 draws.
    let bits = bound.bits();
    let words = bits.div_ceil(32) as usize;
    let top_bits = bits - (words as u64 - 1) * 32;
    let top_mask = if top_bits == 32 {
        u32::MAX
    } else {
        (1u32 << top_bits) - 1
    };
    loop {
        let mut digits: Vec<u32> = (0..words).map(|_| rng.next_u32()).collect();
        if let Some(top) = digits.last_mut() {
            *top &= top_mask;
        }
        let candidate = BigUint::from_slice(&digits);
        if candidate < *bound {
            return candidate;
        }
    }
}
