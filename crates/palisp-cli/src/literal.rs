//! Decoding of command-line literals into runtime values.
//!
//! A literal is a single token, never an expression: an integer, `nil`, or a
//! string. Wrapping a token in double quotes forces it to be a string.

use palisp_runtime::Value;

pub fn decode(token: &str) -> Result<Value, String> {
    if let Some(inner) = token.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        return Ok(Value::Str(inner.to_string()));
    }
    if token == "nil" {
        return Ok(Value::Nil);
    }
    if looks_numeric(token) {
        return token
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| format!("Integer literal out of range: {}", token));
    }
    Ok(Value::Str(token.to_string()))
}

pub fn decode_all(tokens: &[String]) -> Result<Vec<Value>, String> {
    tokens.iter().map(|t| decode(t)).collect()
}

fn looks_numeric(token: &str) -> bool {
    let digits = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
