//! The `(x, y, z)` triple produced by a search.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

/// A candidate decomposition `4/n = 1/x + 1/y + 1/z`.
///
/// Components are stored as arbitrary-precision integers. Search strategies
/// usually produce `x <= y <= z`, but the order is not enforced; use
/// [`Solution::is_ordered`] to check it. Ordering between solutions is
/// lexicographic on `(x, y, z)`.
///
/// # Example
///
/// ```
/// use erdos_core::Solution;
///
/// let a = Solution::new(2u32, 4u32, 20u32);
/// let b = Solution::new(2u32, 5u32, 10u32);
/// assert!(a < b);
/// assert!(a.is_ordered());
/// assert_eq!(a.to_string(), "(2, 4, 20)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Solution {
    /// Creates a solution from three components.
    pub fn new(x: impl Into<BigUint>, y: impl Into<BigUint>, z: impl Into<BigUint>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn z(&self) -> &BigUint {
        &self.z
    }

    /// Returns the components as a tuple of references.
    pub fn components(&self) -> (&BigUint, &BigUint, &BigUint) {
        (&self.x, &self.y, &self.z)
    }

    /// Consumes the solution, returning its components.
    pub fn into_components(self) -> (BigUint, BigUint, BigUint) {
        (self.x, self.y, self.z)
    }

    /// Returns true if every component is strictly positive.
    pub fn is_positive(&self) -> bool {
        !(self.x.is_zero() || self.y.is_zero() || self.z.is_zero())
    }

    /// Returns true if `x <= y <= z`.
    pub fn is_ordered(&self) -> bool {
        self.x <= self.y && self.y <= self.z
    }

    /// Returns the same triple with components sorted ascending.
    ///
    /// ```
    /// use erdos_core::Solution;
    ///
    /// let s = Solution::new(5u32, 2u32, 10u32).sorted();
    /// assert_eq!(s, Solution::new(2u32, 5u32, 10u32));
    /// ```
    pub fn sorted(&self) -> Self {
        let mut parts = [self.x.clone(), self.y.clone(), self.z.clone()];
        parts.sort();
        let [x, y, z] = parts;
        Self { x, y, z }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<A, B, C> From<(A, B, C)> for Solution
where
    A: Into<BigUint>,
    B: Into<BigUint>,
    C: Into<BigUint>,
{
    fn from((x, y, z): (A, B, C)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_order() {
        let mut solutions = [
            Solution::new(3u32, 4u32, 5u32),
            Solution::new(2u32, 5u32, 10u32),
            Solution::new(2u32, 4u32, 20u32),
        ];
        solutions.sort();
        assert_eq!(solutions[0], Solution::new(2u32, 4u32, 20u32));
        assert_eq!(solutions[2], Solution::new(3u32, 4u32, 5u32));
    }

    #[test]
    fn test_is_positive() {
        assert!(Solution::new(1u32, 1u32, 1u32).is_positive());
        assert!(!Solution::new(0u32, 1u32, 1u32).is_positive());
        assert!(!Solution::new(1u32, 1u32, 0u32).is_positive());
    }

    #[test]
    fn test_closed_form_triple_is_unordered() {
        // The congruence identity for n = 5 yields (n, (n+1)/3, ...).
        let s = Solution::new(5u32, 2u32, 10u32);
        assert!(!s.is_ordered());
        assert!(s.sorted().is_ordered());
    }

    #[test]
    fn test_from_tuple() {
        let s: Solution = (5u64, 10u64, 10u64).into();
        assert_eq!(s.x(), &BigUint::from(5u32));
        assert_eq!(s.into_components().2, BigUint::from(10u32));
    }
}
