//! Builtin function identifiers and the call-by-name interface.

use std::io::{self, Write};

use crate::error::{Result, RuntimeError};
use crate::ops;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
    // Comparisons
    LessThan,
    GreaterThan,
    Equal,
    // Output
    Println,
    // Boolean convention
    CheckBoolean,
}

impl Builtin {
    pub const ALL: [Builtin; 9] = [
        Builtin::Plus,
        Builtin::Minus,
        Builtin::Multiply,
        Builtin::Divide,
        Builtin::LessThan,
        Builtin::GreaterThan,
        Builtin::Equal,
        Builtin::Println,
        Builtin::CheckBoolean,
    ];

    /// The name PA-LISP source code uses for this builtin.
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Plus => "+",
            Builtin::Minus => "-",
            Builtin::Multiply => "*",
            Builtin::Divide => "/",
            Builtin::LessThan => "<",
            Builtin::GreaterThan => ">",
            Builtin::Equal => "=",
            Builtin::Println => "println",
            Builtin::CheckBoolean => "check-boolean",
        }
    }

    /// A spelled-out alternative name, handy where operator symbols are awkward
    /// (shell arguments, for instance).
    pub fn alias(&self) -> &'static str {
        match self {
            Builtin::Plus => "plus",
            Builtin::Minus => "minus",
            Builtin::Multiply => "multiply",
            Builtin::Divide => "divide",
            Builtin::LessThan => "less-than",
            Builtin::GreaterThan => "greater-than",
            Builtin::Equal => "equal",
            Builtin::Println => "print",
            Builtin::CheckBoolean => "boolean",
        }
    }

    /// Resolves a canonical name or an alias.
    pub fn from_name(name: &str) -> Option<Self> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.name() == name || b.alias() == name)
    }

    /// Like [`Builtin::from_name`], but unknown names are an error.
    pub fn lookup(name: &str) -> Result<Self> {
        Builtin::from_name(name).ok_or_else(|| RuntimeError::UnknownBuiltin(name.to_string()))
    }

    pub fn arity(&self) -> usize {
        match self {
            Builtin::Println | Builtin::CheckBoolean => 1,
            _ => 2,
        }
    }

    /// Calls the builtin, printing to standard output.
    ///
    /// Stdout is locked only for `println`; the other builtins never touch it.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Builtin::Println => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                self.call_with_output(args, &mut handle)
            }
            _ => self.call_with_output(args, &mut io::sink()),
        }
    }

    /// Calls the builtin with `out` as the sink for `println`.
    pub fn call_with_output<W: Write + ?Sized>(&self, args: &[Value], out: &mut W) -> Result<Value> {
        if args.len() != self.arity() {
            return Err(RuntimeError::ArityMismatch {
                builtin: self.name(),
                expected: self.arity(),
                found: args.len(),
            });
        }

        match (self, args) {
            (Builtin::Plus, [a, b]) => ops::add(a, b),
            (Builtin::Minus, [a, b]) => ops::subtract(a, b),
            (Builtin::Multiply, [a, b]) => ops::multiply(a, b),
            (Builtin::Divide, [a, b]) => ops::divide(a, b),
            (Builtin::LessThan, [a, b]) => ops::less_than(a, b),
            (Builtin::GreaterThan, [a, b]) => ops::greater_than(a, b),
            (Builtin::Equal, [a, b]) => Ok(ops::equal(a, b)),
            (Builtin::Println, [v]) => ops::print_to(out, v.clone()),
            (Builtin::CheckBoolean, [v]) => ops::check_boolean(v).map(Value::Integer),
            // arity was checked above
            _ => unreachable!("arity mismatch for `{}`", self.name()),
        }
    }
}

/// Looks up `name` and calls it with `args`.
pub fn call_by_name(name: &str, args: &[Value]) -> Result<Value> {
    Builtin::lookup(name)?.call(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::Integer(n)
    }

    fn run(b: Builtin, args: &[Value]) -> (Result<Value>, String) {
        let mut out: Vec<u8> = Vec::new();
        let res = b.call_with_output(args, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_names_round_trip() {
        for b in Builtin::ALL {
            assert_eq!(Builtin::from_name(b.name()), Some(b));
            assert_eq!(Builtin::from_name(b.alias()), Some(b));
        }
        assert_eq!(Builtin::from_name("car"), None);
        assert_eq!(
            Builtin::lookup("car"),
            Err(RuntimeError::UnknownBuiltin("car".to_string()))
        );
    }

    #[test]
    fn test_arities() {
        for name in ["+", "-", "*", "/", "<", ">", "="] {
            assert_eq!(Builtin::lookup(name).unwrap().arity(), 2, "{}", name);
        }
        assert_eq!(Builtin::Println.arity(), 1);
        assert_eq!(Builtin::CheckBoolean.arity(), 1);
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(run(Builtin::Plus, &[int(2), int(3)]).0.unwrap(), int(5));
        assert_eq!(run(Builtin::Minus, &[int(2), int(3)]).0.unwrap(), int(-1));
        assert_eq!(run(Builtin::Multiply, &[int(3), int(50)]).0.unwrap(), int(150));
        assert_eq!(run(Builtin::Divide, &[int(150), int(10)]).0.unwrap(), int(15));
        assert_eq!(run(Builtin::LessThan, &[int(1), int(2)]).0.unwrap(), int(1));
        assert_eq!(run(Builtin::GreaterThan, &[int(4), int(5)]).0.unwrap(), int(0));
        assert_eq!(run(Builtin::Equal, &[int(15), int(15)]).0.unwrap(), int(1));
        assert_eq!(run(Builtin::CheckBoolean, &[int(1)]).0.unwrap(), int(1));
    }

    #[test]
    fn test_println_writes_and_returns() {
        let (res, out) = run(Builtin::Println, &[Value::from("hello")]);
        assert_eq!(res.unwrap(), Value::from("hello"));
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_arity_mismatch() {
        let (res, out) = run(Builtin::Println, &[int(1), int(2)]);
        assert_eq!(
            res,
            Err(RuntimeError::ArityMismatch { builtin: "println", expected: 1, found: 2 })
        );
        assert!(out.is_empty());
        assert_eq!(run(Builtin::Plus, &[int(1)]).0.unwrap_err().kind_name(), "arity-mismatch");
        assert_eq!(run(Builtin::Equal, &[]).0.unwrap_err().kind_name(), "arity-mismatch");
    }

    #[test]
    fn test_errors_pass_through() {
        assert_eq!(
            run(Builtin::Divide, &[int(8), int(0)]).0,
            Err(RuntimeError::DivisionByZero { dividend: 8 })
        );
        assert_eq!(
            run(Builtin::CheckBoolean, &[int(2)]).0,
            Err(RuntimeError::InvalidBoolean { value: 2 })
        );
        assert_eq!(
            run(Builtin::Plus, &[Value::Nil, int(2)]).0.unwrap_err().kind_name(),
            "type-error"
        );
    }

    #[test]
    fn test_pure_builtins_do_not_wait_on_stdout() {
        // While this thread holds stdout, another thread can still do arithmetic.
        let stdout = io::stdout();
        let _held = stdout.lock();
        let worker = std::thread::spawn(|| {
            let sum = Builtin::Plus.call(&[int(2), int(3)]).unwrap();
            let lt = Builtin::LessThan.call(&[sum.clone(), int(9)]).unwrap();
            (sum, lt)
        });
        assert_eq!(worker.join().unwrap(), (int(5), int(1)));
    }

    #[test]
    fn test_call_by_name() {
        assert_eq!(call_by_name("*", &[int(6), int(7)]).unwrap(), int(42));
        assert_eq!(call_by_name("less-than", &[int(4), int(5)]).unwrap(), int(1));
        assert_eq!(call_by_name("cons", &[]).unwrap_err().kind_name(), "unknown-builtin");
    }
}
