//! Lexicographic enumeration of `k`-subsets.
//!
//! The cover search walks through all `k`-element subsets of the candidate prime
//! implicants. Candidates are materialized into a `Vec` beforehand, and a
//! combination is an increasing vector of indices into it.
//!
//! # Example
//!
//! ```
//! use qmc_rs::combination::Combinations;
//!
//! let mut combinations = Combinations::new(4, 2);
//! let mut all = Vec::new();
//! while let Some(indices) = combinations.next_combination() {
//!     all.push(indices.to_vec());
//! }
//! assert_eq!(all, vec![
//!     vec![0, 1], vec![0, 2], vec![0, 3],
//!     vec![1, 2], vec![1, 3], vec![2, 3],
//! ]);
//! ```

use num_bigint::BigUint;

/// State of a `k`-subset enumeration over `0..n`.
///
/// The first combination is `[0, 1, .., k-1]`. Each step finds the rightmost index
/// that can still advance, increments it, and resets all subsequent indices to its
/// consecutive successors.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// `indices` holds the first combination, not yet yielded
    Start,
    /// `indices` holds the last yielded combination
    Running,
    Exhausted,
}

impl Combinations {
    /// Creates the enumeration of all `k`-subsets of `0..n`.
    ///
    /// For `k > n` there is no combination; for `k == 0` there is exactly one, the
    /// empty one.
    pub fn new(n: usize, k: usize) -> Self {
        let state = if k > n { State::Exhausted } else { State::Start };
        Self {
            n,
            indices: (0..k.min(n)).collect(),
            state,
        }
    }

    /// Moves to the next combination and returns it, or `None` when exhausted.
    pub fn next_combination(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Start => self.state = State::Running,
            State::Running => {
                if !self.advance() {
                    self.state = State::Exhausted;
                }
            }
            State::Exhausted => {}
        }
        match self.state {
            State::Exhausted => None,
            _ => Some(&self.indices),
        }
    }

    /// Successor function. Returns `false` if `indices` is the last combination.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        for i in (0..k).rev() {
            // The largest value position `i` can hold is n - k + i
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[i] + (j - i);
                }
                return true;
            }
        }
        false
    }
}

/// Binomial coefficient `C(n, k)`.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    let k = k.min(n - k);
    let mut result = BigUint::from(1u32);
    for i in 0..k {
        result *= n - i;
        result /= i + 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut combinations = Combinations::new(n, k);
        let mut all = Vec::new();
        while let Some(indices) = combinations.next_combination() {
            all.push(indices.to_vec());
        }
        all
    }

    #[test]
    fn test_single_element_subsets() {
        assert_eq!(collect(3, 1), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_full_subset() {
        assert_eq!(collect(3, 3), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(collect(3, 0), vec![Vec::<usize>::new()]);
        assert!(collect(2, 3).is_empty());
        assert!(collect(0, 1).is_empty());
    }

    #[test]
    fn test_lexicographic_and_distinct() {
        let all = collect(6, 3);
        assert_eq!(all.len(), 20);
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for c in &all {
            assert!(c.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut combinations = Combinations::new(2, 2);
        assert!(combinations.next_combination().is_some());
        assert!(combinations.next_combination().is_none());
        assert!(combinations.next_combination().is_none());
    }

    #[test]
    fn test_counts_match_binomial() {
        for n in 0..8 {
            for k in 0..=n {
                assert_eq!(BigUint::from(collect(n, k).len()), binomial(n, k));
            }
        }
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), BigUint::from(10u32));
        assert_eq!(binomial(2, 5), BigUint::ZERO);
        assert_eq!(binomial(100, 50).to_string(), "100891344545564193334812497256");
    }
}
