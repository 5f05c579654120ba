//! The four arithmetic operations a problem can ask for.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Arithmetic operation of a problem.
///
/// The set is closed: every `match` over it is exhaustive, so an "unknown
/// operator" cannot reach the generator or the hint logic.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Operator {
    /// `+`
    Addition,
    /// `-`
    Subtraction,
    /// `*`
    Multiplication,
    /// `/`
    Division,
}

impl Operator {
    /// ASCII symbol used when printing a problem.
    pub fn symbol(self) -> char {
        match self {
            Operator::Addition => '+',
            Operator::Subtraction => '-',
            Operator::Multiplication => '*',
            Operator::Division => '/',
        }
    }

    /// Display label for settings screens.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Operator::Addition => "Addition (+)",
            Operator::Subtraction => "Subtraction (-)",
            Operator::Multiplication => "Multiplication (×)",
            Operator::Division => "Division (÷)",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when text does not name an operator.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unrecognized operator: {:?}", _0)]
pub struct ParseOperatorError(pub String);

impl std::error::Error for ParseOperatorError {}

impl std::str::FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" | "addition" => Ok(Operator::Addition),
            "-" | "sub" | "subtraction" => Ok(Operator::Subtraction),
            "*" | "x" | "×" | "mul" | "multiplication" => Ok(Operator::Multiplication),
            "/" | "÷" | "div" | "division" => Ok(Operator::Division),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbols_round_trip_through_from_str() {
        for op in Operator::iter() {
            let parsed: Operator = op.symbol().to_string().parse().unwrap();
            assert_eq!(parsed, op);
        }
    }

    #[test]
    fn test_alternate_spellings() {
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiplication);
        assert_eq!(" x ".parse::<Operator>().unwrap(), Operator::Multiplication);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Division);
        assert!("%".parse::<Operator>().is_err());
    }
}
