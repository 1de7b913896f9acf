mod common;
mod literal;

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;

use palisp_runtime::{Builtin, RuntimeError, Value};

use common::{render_error, render_runtime_error, write_builtins, Palette};

#[derive(Parser, Debug)]
#[command(name = "palisp", about = "Call a PA-LISP builtin with literal arguments")]
struct Cli {
    /// Builtin to call, by name or alias (e.g. `+`, `less-than`, `println`)
    #[arg(required_unless_present = "list")]
    builtin: Option<String>,

    /// Literal arguments: integers, `nil`, or strings ("quoted" to force a string)
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,

    /// Print the call and its outcome as JSON
    #[arg(long = "json", default_value_t = false)]
    json: bool,

    /// List the available builtins and exit
    #[arg(long = "list", default_value_t = false)]
    list: bool,

    /// Disable colored diagnostics (also disabled by a non-empty NO_COLOR)
    #[arg(long = "no-color", default_value_t = false)]
    no_color: bool,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    kind: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct CallReport<'a> {
    builtin: &'a str,
    args: &'a [Value],
    /// Text `println` wrote during the call
    #[serde(skip_serializing_if = "String::is_empty")]
    output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

fn call<W: Write + ?Sized>(name: &str, args: &[Value], out: &mut W) -> Result<(Builtin, Value), RuntimeError> {
    let builtin = Builtin::lookup(name)?;
    let value = builtin.call_with_output(args, out)?;
    Ok((builtin, value))
}

/// Writes the JSON report. `println` output is captured into the report so
/// stdout carries nothing but the JSON line.
fn report_json<W: Write + ?Sized>(out: &mut W, name: &str, args: &[Value]) -> Result<bool, RuntimeError> {
    let mut captured: Vec<u8> = Vec::new();
    let outcome = call(name, args, &mut captured);
    let report = CallReport {
        builtin: name,
        args,
        output: String::from_utf8_lossy(&captured).into_owned(),
        result: outcome.as_ref().ok().map(|(_, v)| v),
        error: outcome.as_ref().err().map(|e| ErrorReport {
            kind: e.kind_name(),
            message: e.to_string(),
        }),
    };
    serde_json::to_writer(&mut *out, &report).map_err(|e| RuntimeError::Output(e.to_string()))?;
    writeln!(out)?;
    out.flush()?;
    Ok(outcome.is_ok())
}

fn report_plain<W: Write + ?Sized>(palette: Palette, out: &mut W, name: &str, args: &[Value]) -> Result<bool, RuntimeError> {
    match call(name, args, out) {
        // println already wrote the rendering
        Ok((Builtin::Println, _)) => Ok(true),
        Ok((_, value)) => {
            writeln!(out, "{}", value)?;
            out.flush()?;
            Ok(true)
        }
        Err(e @ RuntimeError::Output(_)) => Err(e),
        Err(e) => {
            render_runtime_error(palette, &e);
            Ok(false)
        }
    }
}

/// Runs the command against `out` and returns the process exit code.
fn run<W: Write + ?Sized>(cli: &Cli, palette: Palette, out: &mut W) -> i32 {
    if cli.list {
        return match write_builtins(out, palette) {
            Ok(()) => 0,
            Err(e) => {
                render_runtime_error(palette, &RuntimeError::from(e));
                1
            }
        };
    }

    let Some(name) = cli.builtin.as_deref() else {
        render_error(palette, "error", "No builtin given. Try --list.");
        return 2;
    };

    let args = match literal::decode_all(&cli.args) {
        Ok(a) => a,
        Err(msg) => {
            render_error(palette, "argument error", &msg);
            return 1;
        }
    };

    let reported = if cli.json {
        report_json(out, name, &args)
    } else {
        report_plain(palette, out, name, &args)
    };

    match reported {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            render_runtime_error(palette, &e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let palette = Palette::from_env(cli.no_color);
    let stdout = io::stdout();
    let code = run(&cli, palette, &mut stdout.lock());
    std::process::exit(code);
}
