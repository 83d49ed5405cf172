//! Shared test fixtures for Erdős–Straus crates.
//!
//! This crate provides data and plain search functions for testing.
//! It does NOT depend on `erdos-solver` to avoid circular dependencies;
//! wrap the functions in [`faulty`] with `erdos_solver::FnStrategy`.
//!
//! - [`known`] - Hand-checked decompositions and reference `n` values
//! - [`faulty`] - Search functions that error, panic or lie
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! erdos-test = { workspace = true }
//! ```

pub mod faulty;
pub mod known;

pub use known::{big, known_solution, KNOWN_DECOMPOSITIONS};
