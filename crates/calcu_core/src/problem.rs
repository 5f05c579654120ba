//! The immutable arithmetic problem value.

use crate::Operator;
use serde::Serialize;
use tracing::{debug, instrument};

/// Error raised when a problem cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ProblemError {
    /// Division with a zero divisor.
    #[display("Divisor must not be zero")]
    ZeroDivisor,

    /// Division that would leave a remainder.
    #[display("{} is not evenly divisible by {}", dividend, divisor)]
    InexactDivision {
        /// Dividend of the rejected problem.
        dividend: u64,
        /// Divisor of the rejected problem.
        divisor: u64,
    },

    /// The answer does not fit in an `i64`.
    #[display("Answer of {} {} {} overflows", _0, _1, _2)]
    Overflow(u64, Operator, u64),

    /// A problem invariant failed after construction.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ProblemError {}

/// An arithmetic problem and its answer.
///
/// Problems are only built through [`Problem::new`], so the answer always
/// agrees with the operands and operator. A new problem replaces the old one;
/// nothing mutates a problem in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Problem {
    operand1: u64,
    operand2: u64,
    operator: Operator,
    answer: i64,
}

impl Problem {
    /// Builds a problem, computing its answer.
    ///
    /// Division must be exact and have a nonzero divisor.
    #[instrument]
    pub fn new(operand1: u64, operand2: u64, operator: Operator) -> Result<Self, ProblemError> {
        let overflow = || ProblemError::Overflow(operand1, operator, operand2);
        let a = i64::try_from(operand1).map_err(|_| overflow())?;
        let b = i64::try_from(operand2).map_err(|_| overflow())?;

        let answer = match operator {
            Operator::Addition => a.checked_add(b),
            Operator::Subtraction => a.checked_sub(b),
            Operator::Multiplication => a.checked_mul(b),
            Operator::Division => {
                if b == 0 {
                    return Err(ProblemError::ZeroDivisor);
                }
                if a % b != 0 {
                    return Err(ProblemError::InexactDivision {
                        dividend: operand1,
                        divisor: operand2,
                    });
                }
                Some(a / b)
            }
        }
        .ok_or_else(overflow)?;

        debug!(answer, "Problem constructed");
        Ok(Self {
            operand1,
            operand2,
            operator,
            answer,
        })
    }

    /// First operand (minuend, dividend).
    pub fn operand1(&self) -> u64 {
        self.operand1
    }

    /// Second operand (subtrahend, divisor).
    pub fn operand2(&self) -> u64 {
        self.operand2
    }

    /// The operation.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The correct answer. Negative only for subtraction with negatives allowed.
    pub fn answer(&self) -> i64 {
        self.answer
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.operand1, self.operator, self.operand2)
    }
}
