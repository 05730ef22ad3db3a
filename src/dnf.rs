//! Disjunctive normal forms: canonically ordered sets of implicants.
//!
//! A [`Dnf`] is a sum of product terms. Terms are kept in a [`BTreeSet`] ordered by
//! the [`Implicant`] ordering, so duplicates are impossible and iteration order is
//! deterministic. `Dnf` is itself ordered, which lets sets of minimal forms be
//! stored as `BTreeSet<Dnf>`.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::dnf::Dnf;
//!
//! let (dnf, n) = Dnf::parse("AB'C+A'B", None).unwrap();
//! assert_eq!(n, 3);
//! assert_eq!(dnf.len(), 2);
//! // Terms with more variables come first
//! assert_eq!(dnf.to_literal_string(n).unwrap(), "AB'C+A'B");
//! ```

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::implicant::Implicant;
use crate::types::{Var, MAX_VARIABLES};

/// Sum of product terms without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dnf {
    terms: BTreeSet<Implicant>,
}

impl Dnf {
    /// Creates an empty DNF (the constant false function).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term. Returns `false` if it was already present.
    pub fn insert(&mut self, term: Implicant) -> bool {
        self.terms.insert(term)
    }

    pub fn contains(&self, term: &Implicant) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, Implicant> {
        self.terms.iter()
    }

    /// Total number of literals over all terms.
    pub fn literal_count(&self) -> u32 {
        self.terms.iter().map(Implicant::variable_count).sum()
    }

    /// Returns whether some term of this DNF covers `minterm`.
    pub fn covers(&self, minterm: &Implicant) -> bool {
        self.terms.iter().any(|term| term.implied_by(minterm))
    }

    /// Returns whether every term fits into an `n`-variable function.
    pub fn fits(&self, n: u32) -> bool {
        self.terms.iter().all(|term| term.fits(n))
    }

    /// Smallest variable count able to hold every term (0 for the empty DNF).
    pub fn inferred_variable_count(&self) -> u32 {
        let mask = self.terms.iter().fold(0u64, |acc, term| acc | term.mask());
        MAX_VARIABLES - mask.leading_zeros()
    }

    /// Upper bound on the number of minterms of an `n`-variable function covered by
    /// this DNF (overlapping terms are counted once per term).
    pub fn minterm_count(&self, n: u32) -> BigUint {
        self.terms.iter().map(|term| term.minterm_count(n)).sum()
    }

    /// Textual representation of the terms joined with `+`.
    ///
    /// When `n` is zero, the variable count is inferred from the highest variable in use.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalVariableCount`] if `n` exceeds [`MAX_VARIABLES`].
    pub fn to_literal_string(&self, n: u32) -> Result<String> {
        if n > MAX_VARIABLES {
            return Err(Error::IllegalVariableCount { count: n });
        }
        let n = if n == 0 { self.inferred_variable_count() } else { n };
        let mut literal = String::new();
        for (i, term) in self.terms.iter().enumerate() {
            if i != 0 {
                literal.push('+');
            }
            literal.push_str(&term.to_literal(n)?);
        }
        Ok(literal)
    }

    /// Parses a `+`-separated expression such as `"ABC+AB'C"`.
    ///
    /// Returns the DNF together with the variable count, which is inferred from the
    /// highest letter in the whole expression when `n` is `None`.
    pub fn parse(expression: &str, n: Option<u32>) -> Result<(Self, u32)> {
        Self::parse_delimited(expression, '+', n)
    }

    /// Parses terms separated by `delimiter`. See [`Dnf::parse`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLiteral`] for malformed terms, including empty ones, and
    /// [`Error::IllegalVariableCount`] if `n` exceeds [`MAX_VARIABLES`].
    pub fn parse_delimited(expression: &str, delimiter: char, n: Option<u32>) -> Result<(Self, u32)> {
        let n = match n {
            Some(n) => n,
            None => expression
                .chars()
                .filter(|&c| c != delimiter)
                .filter_map(Var::from_letter)
                .map(|var| var.position() + 1)
                .max()
                .unwrap_or(0),
        };
        if n > MAX_VARIABLES {
            return Err(Error::IllegalVariableCount { count: n });
        }

        let mut dnf = Dnf::new();
        let mut offset = 0;
        for term in expression.split(delimiter) {
            if term.is_empty() {
                return Err(Error::InvalidLiteral {
                    literal: Arc::from(expression),
                    position: offset,
                });
            }
            let implicant = Implicant::from_literal(term, Some(n)).map_err(|err| match err {
                Error::InvalidLiteral { position, .. } => Error::InvalidLiteral {
                    literal: Arc::from(expression),
                    position: offset + position,
                },
                other => other,
            })?;
            dnf.insert(implicant);
            offset += term.len() + delimiter.len_utf8();
        }
        Ok((dnf, n))
    }

    /// Parses a comma-separated list of minterm indices such as `"0,1,5,10"`.
    ///
    /// When `n` is `None`, the variable count is the smallest `n >= 1` such that every
    /// index is below `2^n`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] for tokens that are not non-negative integers or do not
    /// fit into `n` variables, and [`Error::IllegalVariableCount`] for an explicit `n`
    /// that is zero or exceeds [`MAX_VARIABLES`].
    pub fn parse_indices(list: &str, n: Option<u32>) -> Result<(Self, u32)> {
        let mut indices = BTreeSet::new();
        for token in list.split(',') {
            let token = token.trim();
            let index: u64 = token.parse().map_err(|_| Error::InvalidIndex {
                token: Arc::from(token),
            })?;
            indices.insert((index, token));
        }

        let n = match n {
            Some(n) => n,
            None => indices
                .iter()
                .map(|&(index, _)| (MAX_VARIABLES - index.leading_zeros()).max(1))
                .max()
                .unwrap_or(1),
        };

        let mut dnf = Dnf::new();
        for (index, token) in indices {
            let minterm = Implicant::from_index(index, n)?;
            if minterm.form() != index {
                return Err(Error::InvalidIndex {
                    token: Arc::from(token),
                });
            }
            dnf.insert(minterm);
        }
        Ok((dnf, n))
    }
}

impl fmt::Display for Dnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.inferred_variable_count();
        for (i, term) in self.terms.iter().enumerate() {
            if i != 0 {
                write!(f, "+")?;
            }
            let literal = term.to_literal(n).map_err(|_| fmt::Error)?;
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

impl FromIterator<Implicant> for Dnf {
    fn from_iter<I: IntoIterator<Item = Implicant>>(iter: I) -> Self {
        Dnf {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Extend<Implicant> for Dnf {
    fn extend<I: IntoIterator<Item = Implicant>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

impl<'a> Extend<&'a Implicant> for Dnf {
    fn extend<I: IntoIterator<Item = &'a Implicant>>(&mut self, iter: I) {
        self.terms.extend(iter.into_iter().copied());
    }
}

impl IntoIterator for Dnf {
    type Item = Implicant;
    type IntoIter = btree_set::IntoIter<Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dnf {
    type Item = &'a Implicant;
    type IntoIter = btree_set::Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str, n: u32) -> Implicant {
        Implicant::from_literal(s, Some(n)).unwrap()
    }

    #[test]
    fn test_no_duplicates() {
        let mut dnf = Dnf::new();
        assert!(dnf.insert(lit("AB", 3)));
        assert!(!dnf.insert(lit("AB", 3)));
        assert_eq!(dnf.len(), 1);
        assert!(dnf.contains(&lit("AB", 3)));
    }

    #[test]
    fn test_canonical_order() {
        let dnf: Dnf = [lit("C", 3), lit("AB", 3), lit("ABC", 3)].into_iter().collect();
        let terms: Vec<_> = dnf.iter().copied().collect();
        assert_eq!(terms, vec![lit("ABC", 3), lit("AB", 3), lit("C", 3)]);
    }

    #[test]
    fn test_literal_count() {
        let dnf: Dnf = [lit("AB", 3), lit("C", 3)].into_iter().collect();
        assert_eq!(dnf.literal_count(), 3);
    }

    #[test]
    fn test_covers() {
        let dnf: Dnf = [lit("AB", 3), lit("C", 3)].into_iter().collect();
        assert!(dnf.covers(&lit("ABC'", 3)));
        assert!(dnf.covers(&lit("A'B'C", 3)));
        assert!(!dnf.covers(&lit("A'BC'", 3)));
    }

    #[test]
    fn test_to_literal_string() {
        let dnf: Dnf = [lit("AB", 3), lit("C", 3)].into_iter().collect();
        assert_eq!(dnf.to_literal_string(3).unwrap(), "AB+C");
        assert_eq!(dnf.to_literal_string(0).unwrap(), "AB+C");
        assert_eq!(dnf.to_string(), "AB+C");
        assert_eq!(Dnf::new().to_literal_string(4).unwrap(), "");
        assert!(dnf.to_literal_string(65).is_err());
    }

    #[test]
    fn test_parse() {
        let (dnf, n) = Dnf::parse("ABC+AB'C", None).unwrap();
        assert_eq!(n, 3);
        assert!(dnf.contains(&lit("ABC", 3)));
        assert!(dnf.contains(&lit("AB'C", 3)));

        let (dnf, n) = Dnf::parse("ABC+A'C", Some(4)).unwrap();
        assert_eq!(n, 4);
        assert_eq!(dnf.to_literal_string(4).unwrap(), "ABC+A'C");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Dnf::parse("AB++C", None),
            Err(Error::InvalidLiteral { position: 3, .. })
        ));
        assert!(matches!(
            Dnf::parse("AB+CX'", Some(3)),
            Err(Error::InvalidLiteral { position: 4, .. })
        ));
        assert!(matches!(Dnf::parse("", None), Err(Error::InvalidLiteral { .. })));
    }

    #[test]
    fn test_parse_delimited() {
        let (dnf, n) = Dnf::parse_delimited("ABC',ABC", ',', Some(4)).unwrap();
        assert_eq!(n, 4);
        assert_eq!(dnf.len(), 2);
        assert!(dnf.contains(&lit("ABC'", 4)));
    }

    #[test]
    fn test_parse_indices() {
        let (dnf, n) = Dnf::parse_indices("0,1,5,10,13,14", None).unwrap();
        assert_eq!(n, 4);
        assert_eq!(dnf.len(), 6);
        assert!(dnf.contains(&Implicant::from_index(13, 4).unwrap()));

        let (_, n) = Dnf::parse_indices("0", None).unwrap();
        assert_eq!(n, 1);
        let (_, n) = Dnf::parse_indices("4, 2", None).unwrap();
        assert_eq!(n, 3);
        let (dnf, n) = Dnf::parse_indices("1,1,2", Some(5)).unwrap();
        assert_eq!((dnf.len(), n), (2, 5));
    }

    #[test]
    fn test_parse_indices_errors() {
        assert!(matches!(Dnf::parse_indices("1,x", None), Err(Error::InvalidIndex { .. })));
        assert!(matches!(Dnf::parse_indices("1,-2", None), Err(Error::InvalidIndex { .. })));
        assert!(matches!(Dnf::parse_indices("16", Some(4)), Err(Error::InvalidIndex { .. })));
        assert_eq!(
            Dnf::parse_indices("1", Some(0)),
            Err(Error::IllegalVariableCount { count: 0 })
        );
    }

    #[test]
    fn test_inferred_variable_count() {
        let dnf: Dnf = [lit("AB", 5), lit("E", 5)].into_iter().collect();
        assert_eq!(dnf.inferred_variable_count(), 5);
        assert_eq!(Dnf::new().inferred_variable_count(), 0);
    }

    #[test]
    fn test_minterm_count() {
        let dnf: Dnf = [lit("AB", 3), lit("C", 3)].into_iter().collect();
        assert_eq!(dnf.minterm_count(3), BigUint::from(6u32));
    }
}
