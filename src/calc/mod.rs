//! Calculator reducer — keypad token + current state → next state.
//!
//! DESIGN
//! ======
//! A running-total, four-function calculator. There is no precedence and no
//! expression tree: each operator is applied against the running total as
//! soon as a new operator or `=` arrives. The reducer is pure; every press
//! returns a fresh `CalculatorState` and never touches its input.
//!
//! `next` holds the operand being typed, `total` the last committed result,
//! `operation` the operator waiting for its right-hand side. All numbers are
//! kept as display text so in-progress entries like `"8."` survive.

pub mod button;
pub mod operator;

use serde::{Deserialize, Serialize};

pub use button::Button;
pub use operator::{Operand, Operator, coerce, format_number, operate};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("unsupported operator: {0:?}")]
    UnsupportedOperator(String),
}

impl crate::error::ErrorCode for CalcError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedOperator(_) => "E_UNSUPPORTED_OPERATOR",
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculatorState {
    pub total: Option<String>,
    pub next: Option<String>,
    pub operation: Option<Operator>,
}

impl CalculatorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What the display shows: `next`, else `total`, else the pending operator, else `0`.
    #[must_use]
    pub fn display(&self) -> String {
        non_empty(self.next.as_deref())
            .or_else(|| non_empty(self.total.as_deref()))
            .map(str::to_owned)
            .or_else(|| self.operation.map(|op| op.symbol().to_owned()))
            .unwrap_or_else(|| "0".to_owned())
    }

    /// Apply one button press.
    #[must_use]
    pub fn press(&self, button: Button) -> Self {
        match button {
            Button::Clear => Self::new(),
            Button::ToggleSign => self.toggle_sign(),
            Button::Percent => self.percent(),
            Button::Decimal => self.decimal(),
            Button::Operator(op) => self.apply_operator(op),
            Button::Equals => self.equals(),
            Button::Digit(digit) => self.digit(digit),
            Button::Unrecognized => self.clone(),
        }
    }

    fn total_value(&self) -> f64 {
        self.total.as_deref().map_or(0.0, coerce)
    }

    fn toggle_sign(&self) -> Self {
        if let Some(next) = &self.next {
            Self { next: Some(negate(next)), ..self.clone() }
        } else if let Some(total) = &self.total {
            Self { total: Some(negate(total)), ..self.clone() }
        } else {
            self.clone()
        }
    }

    fn percent(&self) -> Self {
        if let Some(next) = &self.next {
            Self { next: Some(format_number(coerce(next) / 100.0)), ..self.clone() }
        } else if let Some(total) = &self.total {
            Self { total: Some(format_number(coerce(total) / 100.0)), ..self.clone() }
        } else {
            self.clone()
        }
    }

    fn decimal(&self) -> Self {
        let next = match (&self.next, self.operation, &self.total) {
            (Some(next), _, _) if next.contains('.') => return self.clone(),
            (Some(next), _, _) => format!("{next}."),
            (None, Some(_), _) | (None, None, None) => "0.".to_owned(),
            // Fresh entry right after a result: keep building on the result.
            (None, None, Some(total)) if total.contains('.') => return self.clone(),
            (None, None, Some(total)) => format!("{total}."),
        };
        Self { next: Some(next), ..self.clone() }
    }

    fn apply_operator(&self, op: Operator) -> Self {
        match (&self.next, self.operation) {
            (Some(next), Some(pending)) => Self {
                total: Some(pending.apply(self.total_value(), coerce(next))),
                next: None,
                operation: Some(op),
            },
            (Some(next), None) => Self {
                total: Some(next.strip_suffix('.').unwrap_or(next).to_owned()),
                next: None,
                operation: Some(op),
            },
            (None, _) => Self { operation: Some(op), ..self.clone() },
        }
    }

    fn equals(&self) -> Self {
        match (&self.next, self.operation) {
            (Some(next), Some(op)) => Self {
                total: Some(op.apply(self.total_value(), coerce(next))),
                next: None,
                operation: None,
            },
            _ => self.clone(),
        }
    }

    fn digit(&self, digit: char) -> Self {
        let next = match self.next.as_deref() {
            None | Some("0") => digit.to_string(),
            Some("-0") => format!("-{digit}"),
            Some(current) => format!("{current}{digit}"),
        };
        // Without a pending operator a new entry replaces the previous result.
        let total = if self.operation.is_some() { self.total.clone() } else { None };
        Self { total, next: Some(next), operation: self.operation }
    }
}

// =============================================================================
// CALCULATE
// =============================================================================

/// Decode `token` and apply it to `state`. Unknown tokens return `state` unchanged.
#[must_use]
pub fn calculate(state: &CalculatorState, token: &str) -> CalculatorState {
    state.press(Button::from_token(token))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn negate(value: &str) -> String {
    if value == "NaN" {
        return value.to_owned();
    }
    match value.strip_prefix('-') {
        Some(rest) => rest.to_owned(),
        None => format!("-{value}"),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
