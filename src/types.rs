//! Type-safe wrappers for variables and literals.
//!
//! Variables are named by letters starting at `A`. Inside an [`Implicant`][crate::implicant::Implicant]
//! they are stored as bits of a `u64`, with the first letter at the most significant
//! bit of the function: for `n` variables, `A` lives at bit `n - 1` and the last
//! letter at bit 0. This makes minterm index `i` read as the binary word `AB...`.
//! [`Var`] keeps the letter position and converts to and from bit indices.
use std::fmt;

/// Maximum number of variables of a boolean function (the width of `u64`).
pub const MAX_VARIABLES: u32 = u64::BITS;

/// A variable, identified by its letter position (0-indexed, `A` = 0).
///
/// # Invariants
///
/// - The position is below [`MAX_VARIABLES`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable at the given letter position.
    ///
    /// # Panics
    ///
    /// Panics if `position >= MAX_VARIABLES`.
    pub fn new(position: u32) -> Self {
        assert!(position < MAX_VARIABLES, "Variable position must be below {}", MAX_VARIABLES);
        Var(position)
    }

    /// Returns the letter position (`A` = 0).
    pub fn position(self) -> u32 {
        self.0
    }

    /// Returns the variable denoted by `letter`, if it is one.
    ///
    /// Letters continue past `Z` in code point order, so all 64 variables have a name.
    pub fn from_letter(letter: char) -> Option<Self> {
        let position = (letter as u32).checked_sub('A' as u32)?;
        (position < MAX_VARIABLES).then_some(Var(position))
    }

    /// Returns the letter naming this variable.
    pub fn letter(self) -> char {
        char::from_u32('A' as u32 + self.0).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Returns the bit index of this variable in a function of `n` variables.
    ///
    /// # Panics
    ///
    /// Panics if the variable does not belong to an `n`-variable function.
    pub fn bit(self, n: u32) -> u32 {
        assert!(self.0 < n, "Variable {} is not part of a {}-variable function", self, n);
        n - 1 - self.0
    }

    /// Returns the variable stored at `bit` in a function of `n` variables.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= n`.
    pub fn from_bit(bit: u32, n: u32) -> Self {
        assert!(bit < n, "Bit {} is not part of a {}-variable function", bit, n);
        Var(n - 1 - bit)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A variable together with its polarity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lit {
    var: Var,
    negated: bool,
}

impl Lit {
    /// The un-negated literal of `var`.
    pub fn pos(var: Var) -> Self {
        Lit { var, negated: false }
    }

    /// The negated literal of `var`.
    pub fn neg(var: Var) -> Self {
        Lit { var, negated: true }
    }

    pub fn var(self) -> Var {
        self.var
    }

    pub fn is_negated(self) -> bool {
        self.negated
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.var, if self.negated { "'" } else { "" })
    }
}
