use std::io::{self, Write};

use owo_colors::OwoColorize;
use palisp_runtime::{Builtin, RuntimeError};

/// Colors diagnostics unless color has been turned off.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    /// Color is on unless `--no-color` was given or `NO_COLOR` is set.
    pub fn from_env(no_color_flag: bool) -> Self {
        let no_color_env = std::env::var("NO_COLOR").map(|v| !v.is_empty()).unwrap_or(false);
        Self { color: !(no_color_flag || no_color_env) }
    }

    pub fn kind(&self, s: &str) -> String {
        if self.color { s.red().bold().to_string() } else { s.to_string() }
    }

    pub fn message(&self, s: &str) -> String {
        if self.color { s.red().to_string() } else { s.to_string() }
    }

    pub fn help(&self, s: &str) -> String {
        if self.color { s.yellow().to_string() } else { s.to_string() }
    }

    pub fn hint(&self, s: &str) -> String {
        if self.color { s.bright_black().to_string() } else { s.to_string() }
    }

    pub fn name(&self, s: &str) -> String {
        if self.color { s.yellow().to_string() } else { s.to_string() }
    }
}

pub fn render_error(palette: Palette, kind: &str, msg: &str) {
    eprintln!("{}: {}", palette.kind(kind), palette.message(msg));
}

pub fn render_runtime_error(palette: Palette, err: &RuntimeError) {
    render_error(palette, err.kind_name(), &err.to_string());
    provide_error_suggestions(palette, err);
}

pub fn provide_error_suggestions(palette: Palette, err: &RuntimeError) {
    match err {
        RuntimeError::TypeError { operation, .. } => {
            eprintln!("{}", palette.help(&format!("Help: `{}` works only with integers.", operation)));
            eprintln!("    {}", palette.hint("Only `=` and `println` accept strings and nil."));
        }
        RuntimeError::DivisionByZero { .. } => {
            eprintln!("{}", palette.help("Help: You cannot divide by zero."));
            eprintln!("    {}", palette.hint("Check if the divisor is zero before the operation."));
        }
        RuntimeError::InvalidBoolean { .. } => {
            eprintln!("{}", palette.help("Help: Booleans are the integers 0 (false) and 1 (true)."));
            eprintln!("    {}", palette.hint("Comparisons like (< a b) and (= a b) produce them."));
        }
        RuntimeError::ArityMismatch { builtin, expected, .. } => {
            eprintln!("{}", palette.help("Help: Builtin called with wrong number of arguments."));
            eprintln!(
                "    {}",
                palette.hint(&format!("`{}` takes exactly {} argument(s).", builtin, expected))
            );
        }
        RuntimeError::UnknownBuiltin(_) => {
            eprintln!("{}", palette.help("Help: Check if the builtin name is spelled correctly."));
            let names: Vec<&str> = Builtin::ALL.iter().map(|b| b.name()).collect();
            eprintln!("    {}", palette.hint(&format!("Available builtins: {}", names.join(", "))));
        }
        RuntimeError::Output(_) => {
            eprintln!("{}", palette.help("Help: Writing to standard output failed."));
            eprintln!("    {}", palette.hint("Check that the output pipe or terminal is still open."));
        }
    }
}

/// Lists every builtin as `name/arity (alias)`.
pub fn write_builtins<W: Write + ?Sized>(out: &mut W, palette: Palette) -> io::Result<()> {
    for b in Builtin::ALL {
        writeln!(out, "{}/{} ({})", palette.name(b.name()), b.arity(), b.alias())?;
    }
    out.flush()
}
