//! Error types for the logic minimizer
//!
//! Every failure is returned to the caller as a [`MinimizeError`] value. Constant
//! functions (always true, always false) are not errors: they minimize to the
//! identity strings `"1"` and `"0"`.

use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for the logic minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// A boolean expression could not be parsed
    ///
    /// Produced by the expression parser that feeds truth tables into this crate.
    /// The minimizer itself never creates this variant, it only carries it.
    MalformedExpression {
        /// The error message from the parser
        message: String,
        /// Position of the offending token, when known
        position: Option<usize>,
    },

    /// The geometric method was asked to handle an unsupported number of variables
    ///
    /// Karnaugh maps are built for 1 to `max` variables. Callers can recover by
    /// switching to the consensus or tabular method.
    UnsupportedVariableCount {
        /// The number of variables in the truth table
        count: usize,
        /// The largest supported variable count
        max: usize,
    },

    /// Two distinct inputs produced the same ternary encoding
    ///
    /// Raised for duplicate truth-table assignments and for literal lists that
    /// assign one variable twice with different values.
    DuplicateEncodingConflict {
        /// The encoding both inputs mapped to
        encoding: String,
    },

    /// A literal names a variable that is not part of the variable order
    UnknownVariable {
        /// The unknown variable name
        name: Arc<str>,
    },

    /// The same variable name appears twice in a variable order
    DuplicateVariable {
        /// The repeated variable name
        name: Arc<str>,
    },

    /// A ternary string contains a character other than `0`, `1` or `-`
    InvalidTernary {
        /// The offending character
        character: char,
        /// Its position in the string
        position: usize,
    },

    /// A term or assignment has the wrong number of positions
    LengthMismatch {
        /// The number of variables in the order
        expected: usize,
        /// The length that was supplied
        actual: usize,
    },

    /// A truth table does not hold exactly one row per assignment
    RowCount {
        /// `2^n` for `n` variables
        expected: usize,
        /// The number of rows supplied
        actual: usize,
    },

    /// The cover solver was left with targets no candidate covers
    ///
    /// This indicates a broken invariant in candidate generation.
    IncompleteCover {
        /// Number of targets left uncovered
        uncovered: usize,
    },
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::MalformedExpression { message, position } => {
                if let Some(pos) = position {
                    write!(f, "Malformed expression at position {}: {}", pos, message)
                } else {
                    write!(f, "Malformed expression: {}", message)
                }
            }
            MinimizeError::UnsupportedVariableCount { count, max } => write!(
                f,
                "Unsupported variable count {} for the geometric method (supported: 1..={})",
                count, max
            ),
            MinimizeError::DuplicateEncodingConflict { encoding } => {
                write!(f, "Duplicate encoding conflict for term '{}'", encoding)
            }
            MinimizeError::UnknownVariable { name } => {
                write!(f, "Variable '{}' is not part of the variable order", name)
            }
            MinimizeError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' appears more than once", name)
            }
            MinimizeError::InvalidTernary {
                character,
                position,
            } => write!(
                f,
                "Invalid ternary character {:?} at position {}. Expected '0', '1' or '-'.",
                character, position
            ),
            MinimizeError::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch: expected {} positions, got {}",
                expected, actual
            ),
            MinimizeError::RowCount { expected, actual } => write!(
                f,
                "Truth table must have {} rows, got {}",
                expected, actual
            ),
            MinimizeError::IncompleteCover { uncovered } => write!(
                f,
                "Internal error: {} target(s) not covered by any candidate",
                uncovered
            ),
        }
    }
}

impl std::error::Error for MinimizeError {}

impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        let kind = match err {
            MinimizeError::IncompleteCover { .. } => io::ErrorKind::Other,
            MinimizeError::UnsupportedVariableCount { .. } => io::ErrorKind::Unsupported,
            _ => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MinimizeError>;
