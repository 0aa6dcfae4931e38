//! Scalar value inference for configuration entries.
//!
//! Every value on the right-hand side of `key = value` goes through
//! [`parse_value`]. Numbers may carry a multiplicative unit suffix, a small
//! vocabulary of words maps to booleans, and everything else is kept as text.

use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Unit suffixes and their factors. Two-character suffixes come first so
/// `1Ki` is never read as `1K` followed by a stray `i`.
pub const UNITS: &[(&str, i64)] = &[
    ("Ki", 1 << 10),
    ("Mi", 1 << 20),
    ("Gi", 1 << 30),
    ("K", 1_000),
    ("M", 1_000_000),
    ("G", 1_000_000_000),
];

const TRUE_WORDS: &[&str] = &["true", "enable", "yes", "1"];
const FALSE_WORDS: &[&str] = &["false", "disable", "no", "0"];

/// A typed configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

impl Value {
    /// Short type name used in error messages and dumps
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
        }
    }

    /// Integer view of the value.
    ///
    /// Floats truncate toward zero and booleans read as 0/1. Text has no
    /// integer view.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            Value::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            Value::Float(_) => None,
            Value::Boolean(b) => Some(i64::from(*b)),
            Value::String(_) => None,
        }
    }

    /// Loose truthiness: zero and empty text are false, everything else true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::Boolean(b) => *b,
            Value::String(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            // Positional notation only, the grammar has no exponents.
            // Integral floats keep a ".0" so they read back as floats.
            Value::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{}.0", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_value(s))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

/// Parse a raw configuration value into a typed [`Value`].
///
/// Never fails. Input that is neither a number nor a boolean word comes back
/// as the trimmed string, so an empty value yields `Value::String("")`.
///
/// Numbers are tried before booleans, which means `1` and `0` are integers.
pub fn parse_value(raw: &str) -> Value {
    let text = raw.trim();
    if text.is_empty() {
        return Value::String(String::new());
    }

    if let Some(number) = parse_number(text) {
        return number;
    }

    if let Some(flag) = parse_bool(text) {
        return Value::Boolean(flag);
    }

    Value::String(text.to_string())
}

/// Match `[+-]?[0-9]*\.?[0-9]+` with an optional unit suffix
fn parse_number(text: &str) -> Option<Value> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (literal, factor) = split_unit(unsigned);
    if !is_numeric_literal(literal) {
        return None;
    }

    if literal.contains('.') {
        let magnitude: f64 = literal.parse().ok()?;
        let value = if negative { -magnitude } else { magnitude };
        return Some(match factor {
            Some(factor) => integral_or_float(value * factor as f64),
            None => Value::Float(value),
        });
    }

    // Digits that overflow i64 are not treated as a number at all
    let magnitude: i64 = literal.parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    Some(match factor {
        Some(factor) => value
            .checked_mul(factor)
            .map(Value::Integer)
            .unwrap_or_else(|| Value::Float(value as f64 * factor as f64)),
        None => Value::Integer(value),
    })
}

fn split_unit(text: &str) -> (&str, Option<i64>) {
    UNITS
        .iter()
        .find_map(|(suffix, factor)| {
            text.strip_suffix(suffix)
                .map(|literal| (literal, Some(*factor)))
        })
        .unwrap_or((text, None))
}

fn is_numeric_literal(text: &str) -> bool {
    let (whole, fraction) = text.split_once('.').unwrap_or(("", text));
    !fraction.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

fn integral_or_float(value: f64) -> Value {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Value::Integer(value as i64)
    } else {
        Value::Float(value)
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(text)) {
        Some(true)
    } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(text)) {
        Some(false)
    } else {
        None
    }
}
