//! PA-LISP runtime: values, builtins and the runtime error taxonomy.
//!
//! This crate is the support layer compiled PA-LISP programs and evaluators call
//! into. It provides a closed dynamic [`Value`] type and a fixed table of
//! [`Builtin`] operations over it. Reading and evaluating PA-LISP source is not
//! part of this crate.
//!
//! # Conventions
//!
//! - There is no boolean kind. Comparisons produce the integers `1` and `0`,
//!   and [`ops::check_boolean`] is the only operation that rejects other
//!   integers where a truth value is expected.
//! - Integer arithmetic wraps on overflow. Division truncates toward zero and a
//!   zero divisor is reported as [`RuntimeError::DivisionByZero`].
//! - Builtins are stateless. Values are immutable and `Send + Sync`, so
//!   builtins may be called from several threads at once.
//!
//! # Examples
//!
//! ```rust
//! use palisp_runtime::{Builtin, Value};
//!
//! let product = Builtin::lookup("*")?.call(&[Value::Integer(3), Value::Integer(50)])?;
//! let quotient = Builtin::Divide.call(&[product, Value::Integer(10)])?;
//! assert_eq!(quotient, Value::Integer(15));
//! # Ok::<(), palisp_runtime::RuntimeError>(())
//! ```

pub mod builtin;
pub mod error;
pub mod ops;
pub mod value;

pub use builtin::{call_by_name, Builtin};
pub use error::{Result, RuntimeError};
pub use value::{Kind, Value};

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn int(n: i64) -> Value {
        Value::Integer(n)
    }

    fn call(name: &str, args: &[Value], out: &mut Vec<u8>) -> Result<Value> {
        Builtin::lookup(name)?.call_with_output(args, out)
    }

    // (if cond then else) the way compiled code does it: check the condition,
    // then branch on 0.
    fn branch(cond: &Value, then: &str, otherwise: &str) -> Result<Value> {
        let taken = if ops::check_boolean(cond)? == 0 { otherwise } else { then };
        Ok(Value::from(taken))
    }

    #[test]
    fn test_larger_program_trace() {
        let mut out = Vec::new();
        call("println", &[Value::from("(3*50)/10 should be 15. Output:")], &mut out).unwrap();
        let product = call("*", &[int(3), int(50)], &mut out).unwrap();
        let quotient = call("/", &[product, int(10)], &mut out).unwrap();
        let quotient = call("println", &[quotient], &mut out).unwrap();

        call("println", &[Value::from("check for equality with 15")], &mut out).unwrap();
        let eq = call("=", &[quotient, int(15)], &mut out).unwrap();
        let msg = branch(&eq, "15 as expected", "not 15").unwrap();
        call("println", &[msg], &mut out).unwrap();

        call("println", &[Value::from("is 4 bigger than 5?")], &mut out).unwrap();
        let gt = call(">", &[int(4), int(5)], &mut out).unwrap();
        call("println", &[branch(&gt, "yes", "no").unwrap()], &mut out).unwrap();

        call("println", &[Value::from("is 10 bigger than 9?")], &mut out).unwrap();
        let gt = call(">", &[int(10), int(9)], &mut out).unwrap();
        call("println", &[branch(&gt, "yes", "no").unwrap()], &mut out).unwrap();

        let expected = "(3*50)/10 should be 15. Output:\n15\ncheck for equality with 15\n\
                        15 as expected\nis 4 bigger than 5?\nno\nis 10 bigger than 9?\nyes\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_fibonacci_with_builtins() {
        fn fib(n: &Value) -> Result<Value> {
            let small = ops::less_than(n, &int(2))?;
            if ops::check_boolean(&small)? == 1 {
                return Ok(n.clone());
            }
            let a = fib(&ops::subtract(n, &int(1))?)?;
            let b = fib(&ops::subtract(n, &int(2))?)?;
            ops::add(&a, &b)
        }
        assert_eq!(fib(&int(10)).unwrap(), int(55));
    }

    #[test]
    fn test_condition_must_be_boolean() {
        let sum = ops::add(&int(1), &int(1)).unwrap();
        assert_eq!(
            branch(&sum, "a", "b"),
            Err(RuntimeError::InvalidBoolean { value: 2 })
        );
        assert_eq!(branch(&Value::Nil, "a", "b").unwrap_err().kind_name(), "type-error");
    }

    #[test]
    fn test_values_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
        assert_send_sync::<RuntimeError>();
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..8i64)
            .map(|t| {
                thread::spawn(move || {
                    let mut acc = int(0);
                    for i in 0..1000i64 {
                        let step = ops::multiply(&int(t), &int(i)).unwrap();
                        acc = ops::add(&acc, &step).unwrap();
                    }
                    acc
                })
            })
            .collect();
        for (t, h) in handles.into_iter().enumerate() {
            let expected = t as i64 * (999 * 1000 / 2);
            assert_eq!(h.join().unwrap(), int(expected));
        }
    }
}
