//! Product terms encoded as bitmasks.
//!
//! An [`Implicant`] is a conjunction of literals stored as two `u64` words:
//!
//! - `mask`: bit *i* is set iff the term constrains the variable at bit *i*;
//! - `form`: for every bit of `mask`, 1 if the variable appears un-negated and 0 if
//!   it appears negated. Bits outside of `mask` are always clear.
//!
//! See [`types`][crate::types] for how letters map to bits.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::implicant::Implicant;
//!
//! // A'B'C over four variables: A, B, C are present, only C is positive
//! let x = Implicant::from_literal("A'B'C", Some(4)).unwrap();
//! assert_eq!(x.mask(), 0b1110);
//! assert_eq!(x.form(), 0b0010);
//! assert_eq!(x.to_literal(4).unwrap(), "A'B'C");
//!
//! // Adjacent terms combine into a coarser one
//! let y = Implicant::from_literal("A'BC", Some(4)).unwrap();
//! assert!(x.can_combine_with(&y));
//! assert_eq!(x.combine(&y).unwrap().to_literal(4).unwrap(), "A'C");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::types::{Lit, Var, MAX_VARIABLES};

/// Returns the mask with the low `n` bits set (all bits for `n >= 64`).
pub fn full_mask(n: u32) -> u64 {
    if n >= MAX_VARIABLES {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// An elementary conjunction of at most [`MAX_VARIABLES`] variables.
///
/// Implicants are immutable values. The ordering used for canonical sets puts
/// implicants with larger masks first and, within equal masks, smaller forms first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Implicant {
    form: u64,
    mask: u64,
}

impl Implicant {
    /// Creates an implicant from its binary form and mask.
    ///
    /// Bits of `form` outside of `mask` are dropped.
    pub const fn new(form: u64, mask: u64) -> Self {
        Self {
            form: form & mask,
            mask,
        }
    }

    /// Parses an implicant from its textual representation, e.g. `"AB'C"`.
    ///
    /// Letters starting from `A` denote variables; an apostrophe right after a letter
    /// negates it. When `n` is `None`, the number of variables is one more than the
    /// highest letter used.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLiteral`] for letters outside `[A, A+n)`, repeated letters,
    ///   apostrophes not preceded by a letter, and any other character;
    /// - [`Error::IllegalVariableCount`] if `n` exceeds [`MAX_VARIABLES`].
    pub fn from_literal(literal: &str, n: Option<u32>) -> Result<Self> {
        let n = match n {
            Some(n) => n,
            None => literal
                .chars()
                .filter_map(Var::from_letter)
                .map(|var| var.position() + 1)
                .max()
                .unwrap_or(0),
        };
        if n > MAX_VARIABLES {
            return Err(Error::IllegalVariableCount { count: n });
        }

        let invalid = |position: usize| Error::InvalidLiteral {
            literal: Arc::from(literal),
            position,
        };

        let mut form = 0u64;
        let mut mask = 0u64;
        // Bit of the letter right before the current character, if any
        let mut last: Option<u64> = None;
        for (position, c) in literal.char_indices() {
            if c == '\'' {
                let bit = last.take().ok_or_else(|| invalid(position))?;
                form &= !bit;
                continue;
            }
            let var = Var::from_letter(c)
                .filter(|var| var.position() < n)
                .ok_or_else(|| invalid(position))?;
            let bit = 1u64 << var.bit(n);
            if mask & bit != 0 {
                return Err(invalid(position));
            }
            mask |= bit;
            form |= bit;
            last = Some(bit);
        }
        Ok(Self::new(form, mask))
    }

    /// Creates the minterm with index `index` of an `n`-variable function.
    ///
    /// Bits of `index` above `n` are dropped.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalVariableCount`] if `n` is zero or exceeds [`MAX_VARIABLES`].
    pub fn from_index(index: u64, n: u32) -> Result<Self> {
        if n == 0 || n > MAX_VARIABLES {
            return Err(Error::IllegalVariableCount { count: n });
        }
        Ok(Self::new(index, full_mask(n)))
    }

    /// Binary representation of the polarities. Clear bits are negated variables.
    pub fn form(&self) -> u64 {
        self.form
    }

    /// Binary representation of the variables present in this implicant.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Returns whether the variable at `bit` appears in this implicant.
    pub fn contains(&self, bit: u32) -> bool {
        bit < MAX_VARIABLES && self.mask & (1u64 << bit) != 0
    }

    /// Returns `true` if the variable at `bit` appears un-negated.
    ///
    /// # Errors
    ///
    /// [`Error::VariableNotPresent`] if the variable does not appear at all.
    pub fn polarity_of(&self, bit: u32) -> Result<bool> {
        if !self.contains(bit) {
            return Err(Error::VariableNotPresent { bit });
        }
        Ok(self.form & (1u64 << bit) != 0)
    }

    /// Number of negated variables.
    pub fn negation_count(&self) -> u32 {
        (self.mask & !self.form).count_ones()
    }

    /// Number of variables, i.e. the literal count of this term.
    pub fn variable_count(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Returns whether all variables of this implicant belong to an `n`-variable function.
    pub fn fits(&self, n: u32) -> bool {
        self.mask & !full_mask(n) == 0
    }

    /// Returns whether this is a minterm (every variable present) of an `n`-variable function.
    pub fn is_minterm(&self, n: u32) -> bool {
        self.mask == full_mask(n)
    }

    /// Returns the implicant with the variable at `bit` added with the given polarity.
    pub fn with_variable(&self, bit: u32, positive: bool) -> Self {
        let sampler = 1u64 << bit;
        let form = if positive {
            self.form | sampler
        } else {
            self.form & !sampler
        };
        Self::new(form, self.mask | sampler)
    }

    /// Returns whether this implicant can be combined with `other`.
    ///
    /// Two implicants combine iff they contain the same variables and differ in the
    /// polarity of exactly one of them.
    pub fn can_combine_with(&self, other: &Implicant) -> bool {
        self.mask == other.mask && (self.form ^ other.form).is_power_of_two()
    }

    /// Returns whether `other` implies `self`.
    ///
    /// Every variable of `self` must appear in `other` with the same polarity. For a
    /// minterm `m`, `p.implied_by(&m)` reads "`p` covers `m`".
    pub fn implied_by(&self, other: &Implicant) -> bool {
        self.mask & (!other.mask | (self.form ^ other.form)) == 0
    }

    /// Returns whether `self` implies `other`.
    pub fn implies(&self, other: &Implicant) -> bool {
        other.implied_by(self)
    }

    /// Combines this implicant with an adjacent one, dropping the differing variable.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleImplicants`] unless [`can_combine_with`](Self::can_combine_with) holds.
    pub fn combine(&self, other: &Implicant) -> Result<Implicant> {
        self.merge(other).ok_or(Error::IncompatibleImplicants {
            left: *self,
            right: *other,
        })
    }

    /// Like [`combine`](Self::combine), but `None` for implicants that are not adjacent.
    pub(crate) fn merge(&self, other: &Implicant) -> Option<Implicant> {
        if !self.can_combine_with(other) {
            return None;
        }
        let difference = self.form ^ other.form;
        Some(Self::new(self.form, self.mask ^ difference))
    }

    /// Textual representation starting from the letter `A`, with apostrophes after
    /// negated letters.
    ///
    /// `n` is the number of variables of the function this implicant belongs to.
    /// When `n` is zero, the highest variable present is taken as `A`.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalVariableCount`] if `n` exceeds [`MAX_VARIABLES`].
    pub fn to_literal(&self, n: u32) -> Result<String> {
        if n > MAX_VARIABLES {
            return Err(Error::IllegalVariableCount { count: n });
        }
        Ok(self.render(n))
    }

    fn render(&self, n: u32) -> String {
        let top = match n {
            0 if self.mask == 0 => return String::new(),
            0 => MAX_VARIABLES - 1 - self.mask.leading_zeros(),
            n => n - 1,
        };
        let mut literal = String::new();
        for bit in (0..=top).rev() {
            let sampler = 1u64 << bit;
            if self.mask & sampler != 0 {
                literal.push(Var::new(top - bit).letter());
                if self.form & sampler == 0 {
                    literal.push('\'');
                }
            }
        }
        literal
    }

    /// Iterates over the literals of this implicant in an `n`-variable function, `A` first.
    pub fn literals(&self, n: u32) -> impl Iterator<Item = Lit> + '_ {
        let n = n.min(MAX_VARIABLES);
        (0..n).filter_map(move |position| {
            let var = Var::new(position);
            let bit = var.bit(n);
            self.contains(bit).then(|| {
                if self.form & (1u64 << bit) != 0 {
                    Lit::pos(var)
                } else {
                    Lit::neg(var)
                }
            })
        })
    }

    /// Number of minterms of an `n`-variable function covered by this implicant.
    pub fn minterm_count(&self, n: u32) -> BigUint {
        let present = (self.mask & full_mask(n)).count_ones();
        BigUint::from(1u32) << n.saturating_sub(present)
    }
}

impl Ord for Implicant {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .mask
            .cmp(&self.mask)
            .then_with(|| self.form.cmp(&other.form))
    }
}

impl PartialOrd for Implicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(0))
    }
}
