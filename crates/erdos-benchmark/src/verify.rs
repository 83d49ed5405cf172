//! Conjecture check over large `n`.

use erdos_core::{is_valid, Solution};
use erdos_solver::Strategy;
use num_bigint::BigUint;
use tracing::{info, warn};

/// Result of checking one `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecord {
    pub n: BigUint,
    pub solution: Option<Solution>,
    /// Whether `solution` validates against `n`.
    pub valid: bool,
}

/// Runs `solver` once per `n` and validates each answer.
///
/// Errors are logged and recorded as invalid; one `verify` event is emitted
/// per value.
///
/// # Example
///
/// ```
/// use erdos_benchmark::verify_values;
/// use erdos_solver::UniversalSolver;
/// use num_bigint::BigUint;
///
/// let ns = [BigUint::from(100_000_000_000_001u64), BigUint::from(100_000_000_000_004u64)];
/// let records = verify_values(&UniversalSolver::default(), &ns);
///
/// assert_eq!(records.len(), 2);
/// assert!(records.iter().all(|r| r.valid));
/// ```
pub fn verify_values(solver: &dyn Strategy, ns: &[BigUint]) -> Vec<VerificationRecord> {
    ns.iter()
        .map(|n| {
            let solution = match solver.search(n) {
                Ok(found) => found,
                Err(err) => {
                    warn!(event = "verify_failed", strategy = solver.name(), n = %n, error = %err);
                    None
                }
            };
            let valid = is_valid(n, solution.as_ref());
            info!(
                event = "verify",
                strategy = solver.name(),
                n = %n,
                solution = %solution.as_ref().map_or_else(|| "-".to_string(), ToString::to_string),
                valid,
            );
            VerificationRecord {
                n: n.clone(),
                solution,
                valid,
            }
        })
        .collect()
}
