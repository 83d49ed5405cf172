//! The `Strategy` capability shared by every search.

use std::fmt::{self, Debug};

use erdos_core::{SearchError, SearchResult};
use num_bigint::BigUint;
use num_traits::Zero;

/// A search for `(x, y, z)` with `4/n = 1/x + 1/y + 1/z`.
///
/// Implementations return `Ok(None)` when their bounds are exhausted and
/// reserve `Err` for inputs they cannot handle at all. Results are candidates:
/// callers that report success re-check them with [`erdos_core::is_valid`].
pub trait Strategy: Debug {
    /// Human-readable name used in logs and benchmark tables.
    fn name(&self) -> &str;

    /// Searches for a decomposition of `4/n`.
    fn search(&self, n: &BigUint) -> SearchResult;
}

impl<T: Strategy + ?Sized> Strategy for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn search(&self, n: &BigUint) -> SearchResult {
        (**self).search(n)
    }
}

/// Adapts a closure into a [`Strategy`].
///
/// # Example
///
/// ```
/// use erdos_core::Solution;
/// use erdos_solver::{FnStrategy, Strategy};
/// use num_bigint::BigUint;
///
/// let even_only = FnStrategy::new("EvenOnly", |n: &BigUint| {
///     let half = n >> 1u32;
///     Ok((&half << 1u32 == *n).then(|| Solution::new(half, n.clone(), n.clone())))
/// });
///
/// assert_eq!(even_only.name(), "EvenOnly");
/// assert!(even_only.search(&BigUint::from(10u32)).unwrap().is_some());
/// assert!(even_only.search(&BigUint::from(11u32)).unwrap().is_none());
/// ```
pub struct FnStrategy<F> {
    name: String,
    search_fn: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&BigUint) -> SearchResult,
{
    pub fn new(name: impl Into<String>, search_fn: F) -> Self {
        Self {
            name: name.into(),
            search_fn,
        }
    }
}

impl<F> Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> Strategy for FnStrategy<F>
where
    F: Fn(&BigUint) -> SearchResult,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn search(&self, n: &BigUint) -> SearchResult {
        (self.search_fn)(n)
    }
}

/// Rejects `n = 0`, the only input outside the equation's domain.
pub(crate) fn ensure_positive(n: &BigUint) -> Result<(), SearchError> {
    if n.is_zero() {
        Err(SearchError::zero_n())
    } else {
        Ok(())
    }
}
