//! Error types for the PA-LISP runtime.
//!
//! Every builtin validates its operands before computing and reports failures
//! through [`RuntimeError`]. Nothing is coerced and nothing is recovered here;
//! the caller (normally the evaluator) decides what to do with the error.
//!
//! # Examples
//!
//! ```rust
//! use palisp_runtime::{ops, RuntimeError, Value};
//!
//! let err = ops::divide(&Value::Integer(10), &Value::Integer(0)).unwrap_err();
//! assert_eq!(err, RuntimeError::DivisionByZero { dividend: 10 });
//! assert_eq!(err.kind_name(), "division-by-zero");
//! ```

use thiserror::Error;

use crate::value::Kind;

/// A failure signalled by a builtin or by the builtin call interface.
///
/// The first three variants are the operand failures every builtin honors.
/// The remaining ones belong to calling a builtin by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An operand has a kind the operation does not accept.
    #[error("type error in `{operation}`: operand {position} expected {expected}, found {found}")]
    TypeError {
        /// Name of the operation that rejected the operand
        operation: &'static str,
        /// 1-based position of the offending operand
        position: usize,
        expected: Kind,
        found: Kind,
    },

    /// Integer division with a divisor of exactly zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i64 },

    /// An integer outside `{0, 1}` was used where a boolean is required.
    #[error("not a boolean: {value}")]
    InvalidBoolean { value: i64 },

    #[error("arity mismatch: `{builtin}` expects {expected} arguments, got {found}")]
    ArityMismatch {
        builtin: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unknown builtin: {0}")]
    UnknownBuiltin(String),

    /// Writing the rendering of a value to the output stream failed.
    #[error("output error: {0}")]
    Output(String),
}

impl RuntimeError {
    /// Stable, machine-readable name of the error kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RuntimeError::TypeError { .. } => "type-error",
            RuntimeError::DivisionByZero { .. } => "division-by-zero",
            RuntimeError::InvalidBoolean { .. } => "invalid-boolean",
            RuntimeError::ArityMismatch { .. } => "arity-mismatch",
            RuntimeError::UnknownBuiltin(_) => "unknown-builtin",
            RuntimeError::Output(_) => "output",
        }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self {
        RuntimeError::Output(err.to_string())
    }
}

/// A specialized `Result` type for PA-LISP runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
