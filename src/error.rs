//! Error type shared by every fallible operation of the crate.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::implicant::Implicant;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while constructing, combining or minimizing implicants.
///
/// All of them are local and synchronous: they are reported at the point of the
/// offending operation and retrying with the same input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested variable count is zero or exceeds the supported maximum.
    IllegalVariableCount {
        /// The rejected count
        count: u32,
    },
    /// A literal contains a character that cannot be interpreted.
    InvalidLiteral {
        /// The literal text as given
        literal: Arc<str>,
        /// Byte offset of the offending character
        position: usize,
    },
    /// Polarity was queried for a variable the implicant does not constrain.
    VariableNotPresent {
        /// Bit index of the variable
        bit: u32,
    },
    /// Two implicants that are not adjacent were combined.
    IncompatibleImplicants {
        /// Left operand
        left: Implicant,
        /// Right operand
        right: Implicant,
    },
    /// An implicant constrains a variable outside of the function's variables.
    ImplicantOutOfRange {
        /// The offending implicant
        implicant: Implicant,
        /// Number of variables of the function
        count: u32,
    },
    /// A minterm index list contains a malformed or oversized index.
    InvalidIndex {
        /// The offending token
        token: Arc<str>,
    },
    /// The cover search tested more combinations than allowed.
    SearchLimitExceeded {
        /// The configured limit
        limit: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IllegalVariableCount { count } => {
                write!(f, "Illegal number of variables: {}", count)
            }
            Error::InvalidLiteral { literal, position } => {
                write!(f, "Invalid literal '{}' at position {}", literal, position)
            }
            Error::VariableNotPresent { bit } => {
                write!(f, "Variable at bit {} does not appear in this implicant", bit)
            }
            Error::IncompatibleImplicants { left, right } => write!(
                f,
                "Implicants {:?} and {:?} are incompatible and cannot be combined",
                left, right
            ),
            Error::ImplicantOutOfRange { implicant, count } => write!(
                f,
                "Implicant {:?} does not fit into a function of {} variables",
                implicant, count
            ),
            Error::InvalidIndex { token } => write!(f, "Invalid minterm index '{}'", token),
            Error::SearchLimitExceeded { limit } => {
                write!(f, "Cover search exceeded the limit of {} combinations", limit)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
