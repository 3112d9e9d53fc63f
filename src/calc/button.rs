//! Keypad tokens decoded into buttons.

use super::Operator;

/// One press on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// `AC`
    Clear,
    /// `+/-`
    ToggleSign,
    /// `%`
    Percent,
    /// `.`
    Decimal,
    /// `=`
    Equals,
    /// `+ - x ÷`
    Operator(Operator),
    /// `0`-`9`
    Digit(char),
    /// Any token the keypad does not produce. Pressing it leaves the state as is.
    Unrecognized,
}

impl Button {
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "AC" => Self::Clear,
            "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            "." => Self::Decimal,
            "=" => Self::Equals,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "x" => Self::Operator(Operator::Multiply),
            "÷" => Self::Operator(Operator::Divide),
            _ => single_digit(token).map_or(Self::Unrecognized, Self::Digit),
        }
    }
}

impl From<&str> for Button {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

fn single_digit(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}

#[cfg(test)]
#[path = "button_test.rs"]
mod tests;
