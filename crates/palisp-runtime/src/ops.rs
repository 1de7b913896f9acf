//! The builtin operations.
//!
//! Arithmetic and comparison accept integers only and fail loudly on anything
//! else; [`equal`] and [`print`] accept every kind. Integer arithmetic wraps on
//! overflow (two's complement over `i64`), so no operation here can panic.

use std::io::{self, Write};

use crate::error::{Result, RuntimeError};
use crate::value::Value;

fn int_operands(operation: &'static str, a: &Value, b: &Value) -> Result<(i64, i64)> {
    let x = a.integer_operand(operation, 1)?;
    let y = b.integer_operand(operation, 2)?;
    Ok((x, y))
}

pub fn add(a: &Value, b: &Value) -> Result<Value> {
    let (x, y) = int_operands("+", a, b)?;
    Ok(Value::Integer(x.wrapping_add(y)))
}

pub fn subtract(a: &Value, b: &Value) -> Result<Value> {
    let (x, y) = int_operands("-", a, b)?;
    Ok(Value::Integer(x.wrapping_sub(y)))
}

pub fn multiply(a: &Value, b: &Value) -> Result<Value> {
    let (x, y) = int_operands("*", a, b)?;
    Ok(Value::Integer(x.wrapping_mul(y)))
}

/// Truncating integer division.
///
/// `i64::MIN / -1` wraps to `i64::MIN`.
pub fn divide(a: &Value, b: &Value) -> Result<Value> {
    let (x, y) = int_operands("/", a, b)?;
    if y == 0 {
        return Err(RuntimeError::DivisionByZero { dividend: x });
    }
    Ok(Value::Integer(x.wrapping_div(y)))
}

pub fn less_than(a: &Value, b: &Value) -> Result<Value> {
    let (x, y) = int_operands("<", a, b)?;
    Ok(Value::from_bool(x < y))
}

pub fn greater_than(a: &Value, b: &Value) -> Result<Value> {
    let (x, y) = int_operands(">", a, b)?;
    Ok(Value::from_bool(x > y))
}

/// Structural equality over every kind. Values of different kinds are never
/// equal, and comparing them is not an error.
pub fn equal(a: &Value, b: &Value) -> Value {
    Value::from_bool(a == b)
}

/// Writes the rendering of `value` and a newline to `out`, then hands the
/// value back.
///
/// The line goes out in a single `write_all` so that concurrent printers
/// sharing a locked sink never interleave within a line.
pub fn print_to<W: Write + ?Sized>(out: &mut W, value: Value) -> Result<Value> {
    let line = format!("{}\n", value);
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(value)
}

/// [`print_to`] on the process's standard output.
pub fn print(value: Value) -> Result<Value> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_to(&mut handle, value)
}

/// Checks that `value` is a boolean under the 0/1 convention and returns it.
pub fn check_boolean(value: &Value) -> Result<i64> {
    match value.integer_operand("check-boolean", 1)? {
        n @ (0 | 1) => Ok(n),
        n => Err(RuntimeError::InvalidBoolean { value: n }),
    }
}
