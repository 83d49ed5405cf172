//! Misbehaving search functions for resilience tests.
//!
//! Each function has the shape `Fn(&BigUint) -> SearchResult` so it can be
//! wrapped in `erdos_solver::FnStrategy`.

use erdos_core::{SearchError, SearchResult, Solution};
use num_bigint::BigUint;

/// Always returns an internal error.
pub fn always_error(n: &BigUint) -> SearchResult {
    Err(SearchError::Internal(format!("injected failure for n = {}", n)))
}

/// Always panics.
pub fn always_panic(n: &BigUint) -> SearchResult {
    panic!("injected panic for n = {}", n)
}

/// Never finds anything.
pub fn never_found(_n: &BigUint) -> SearchResult {
    Ok(None)
}

/// Returns `(1, 1, 1)`, which is only correct for `4/n = 3` (never).
pub fn wrong_answer(_n: &BigUint) -> SearchResult {
    Ok(Some(Solution::new(1u32, 1u32, 1u32)))
}

/// Even-`n` identity that errors on every odd `n`.
pub fn even_or_error(n: &BigUint) -> SearchResult {
    if n.bit(0) {
        Err(SearchError::Internal(format!("odd n = {}", n)))
    } else {
        let half = n >> 1u32;
        Ok(Some(Solution::new(half, n.clone(), n.clone())))
    }
}

/// Returns a search that panics only for `bad_n`, delegating elsewhere.
pub fn panics_on<F>(bad_n: u64, inner: F) -> impl Fn(&BigUint) -> SearchResult
where
    F: Fn(&BigUint) -> SearchResult,
{
    move |n: &BigUint| {
        if *n == BigUint::from(bad_n) {
            panic!("injected panic for n = {}", n);
        }
        inner(n)
    }
}
