//! Value types for the PA-LISP runtime.
//!
//! PA-LISP is dynamically typed, so every builtin takes and returns a [`Value`].
//! There is no boolean kind: truth is the integer `1` and falsity the integer `0`
//! (see [`Value::TRUE`] and [`Value::FALSE`]).

use std::fmt;

use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    /// A 64-bit signed integer value
    Integer(i64),
    /// A UTF-8 encoded string value
    Str(String),
    /// The absent value, produced by an `if` without an else branch
    Nil,
}

/// The kind tag of a [`Value`], used in type errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    String,
    Nil,
}

impl Value {
    /// Truth under the boolean convention.
    pub const TRUE: Value = Value::Integer(1);
    /// Falsity under the boolean convention.
    pub const FALSE: Value = Value::Integer(0);

    /// Builds `1` for `true` and `0` for `false`.
    pub fn from_bool(b: bool) -> Self {
        if b {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Str(_) => Kind::String,
            Value::Nil => Kind::Nil,
        }
    }

    /// Extracts the underlying integer.
    ///
    /// Fails with [`RuntimeError::TypeError`] when the value is not an integer.
    pub fn to_integer(&self) -> Result<i64> {
        self.integer_operand("to-integer", 1)
    }

    /// Extracts an integer operand for `operation`, reporting `position`
    /// (1-based) if the operand has the wrong kind.
    pub(crate) fn integer_operand(&self, operation: &'static str, position: usize) -> Result<i64> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(RuntimeError::TypeError {
                operation,
                position,
                expected: Kind::Integer,
                found: other.kind(),
            }),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Nil => write!(f, "nil"),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Integer => "integer",
            Kind::String => "string",
            Kind::Nil => "nil",
        };
        f.write_str(name)
    }
}
