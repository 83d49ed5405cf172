//! Erdős–Straus Core - shared types for unit fraction searches
//!
//! This crate provides the fundamental pieces every search strategy builds on:
//! - [`Solution`] triples of arbitrary-precision positive integers
//! - Exact validation of `4/n = 1/x + 1/y + 1/z` via rational arithmetic
//! - Integer helpers (ceiling division, solving for `z`, prime factors)
//! - The [`SearchError`] type shared by all strategies
//!
//! # Example
//!
//! ```
//! use erdos_core::{is_valid, Solution};
//! use num_bigint::BigUint;
//!
//! let n = BigUint::from(5u32);
//! let solution = Solution::new(2u32, 4u32, 20u32);
//! assert!(is_valid(&n, Some(&solution)));
//! ```

pub mod arith;
pub mod error;
pub mod solution;
pub mod validate;

pub use error::{SearchError, SearchResult};
pub use solution::Solution;
pub use validate::{is_valid, is_valid_triple};

// Re-exported so downstream crates agree on the integer type.
pub use num_bigint::BigUint;
