//! Binary operators and the arithmetic helper behind `=` and chained operators.
//!
//! Operands are coerced to `f64` and results are rendered back to decimal
//! strings, so the calculator state never holds anything but text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CalcError;

// =============================================================================
// OPERATOR
// =============================================================================

/// A pending binary operation. Serialized as its keypad symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "x")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
    #[serde(rename = "%")]
    Modulo,
}

impl Operator {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
            Self::Modulo => "%",
        }
    }

    /// Raw floating-point result. Division and modulus by zero follow IEEE 754.
    #[must_use]
    pub fn evaluate(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Modulo => a % b,
        }
    }

    /// Evaluate and format the result as a decimal string.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> String {
        format_number(self.evaluate(a, b))
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "x" => Ok(Self::Multiply),
            "÷" => Ok(Self::Divide),
            "%" => Ok(Self::Modulo),
            other => Err(CalcError::UnsupportedOperator(other.to_owned())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// OPERAND
// =============================================================================

/// Either side of an operation, as typed on the keypad or sent over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(f64),
    Text(String),
}

impl Operand {
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => coerce(s),
        }
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Coerce display text to a number. Blank text is zero, anything unparseable is NaN.
///
/// Only the exact spellings `Infinity` and `-Infinity` are infinite. Letters
/// other than an exponent marker make the text NaN, so `inf` and `nan` (which
/// `f64::from_str` accepts in any case) do not sneak through.
#[must_use]
pub fn coerce(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        _ => trimmed.parse().unwrap_or(f64::NAN),
    }
}

// =============================================================================
// OPERATE
// =============================================================================

/// Apply `operation` to two operands and return the result as a decimal string.
///
/// # Errors
///
/// Returns [`CalcError::UnsupportedOperator`] if `operation` is not one of
/// `+ - x ÷ %`.
pub fn operate(a: impl Into<Operand>, b: impl Into<Operand>, operation: &str) -> Result<String, CalcError> {
    let operator: Operator = operation.parse()?;
    Ok(operator.apply(a.into().value(), b.into().value()))
}

/// Render a float the way the calculator display expects.
///
/// Integral values drop the fractional part, non-finite values print as
/// `Infinity` / `-Infinity` / `NaN`, and very large or very small magnitudes
/// switch to exponent form with an explicit sign (`1e+21`, `1e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    // Also folds -0 into 0.
    if value == 0.0 {
        return "0".into();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
            _ => formatted,
        };
    }

    format!("{value}")
}

#[cfg(test)]
#[path = "operator_test.rs"]
mod tests;
