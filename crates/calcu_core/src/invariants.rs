//! First-class invariants for problems and their hint data.
//!
//! Invariants are logical properties that must hold for every value the
//! generator or the analyzers hand out. They are checked in debug builds
//! and can be tested independently.

use crate::{BorrowTrace, Configuration, Operator, Problem};
use crate::config::MAX_MULTIPLICATION_DIGITS;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2)>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(v) => v,
        };
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Joins violation descriptions into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// ─────────────────────────────────────────────────────────────
//  Problem invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: the answer is what the operator yields for the operands.
pub struct AnswerMatchesOperator;

impl Invariant<Problem> for AnswerMatchesOperator {
    fn holds(problem: &Problem) -> bool {
        let a = i128::from(problem.operand1());
        let b = i128::from(problem.operand2());
        let expected = match problem.operator() {
            Operator::Addition => a + b,
            Operator::Subtraction => a - b,
            Operator::Multiplication => a * b,
            Operator::Division => {
                if b == 0 {
                    return false;
                }
                a / b
            }
        };
        expected == i128::from(problem.answer())
    }

    fn description() -> &'static str {
        "Answer matches the operator applied to the operands"
    }
}

/// Invariant: a division has a nonzero divisor and `dividend = divisor × answer`.
pub struct DivisionIsExact;

impl Invariant<Problem> for DivisionIsExact {
    fn holds(problem: &Problem) -> bool {
        if problem.operator() != Operator::Division {
            return true;
        }
        problem.operand2() != 0
            && i128::from(problem.operand1())
                == i128::from(problem.operand2()) * i128::from(problem.answer())
    }

    fn description() -> &'static str {
        "Division has a nonzero divisor and an exact quotient"
    }
}

/// Invariants every problem satisfies.
pub type ProblemInvariants = (AnswerMatchesOperator, DivisionIsExact);

// ─────────────────────────────────────────────────────────────
//  Generation invariants
// ─────────────────────────────────────────────────────────────

/// A freshly generated problem together with the configuration it came from.
#[derive(Debug, Clone, Copy)]
pub struct Generated<'a> {
    /// The generated problem.
    pub problem: &'a Problem,
    /// The configuration passed to the generator.
    pub config: &'a Configuration,
}

/// Invariant: subtraction is non-negative unless negatives are allowed.
pub struct NonNegativeWhenRequired;

impl Invariant<Generated<'_>> for NonNegativeWhenRequired {
    fn holds(state: &Generated<'_>) -> bool {
        let problem = state.problem;
        if problem.operator() != Operator::Subtraction || *state.config.allow_negative_results() {
            return true;
        }
        problem.operand1() >= problem.operand2() && problem.answer() >= 0
    }

    fn description() -> &'static str {
        "Subtraction keeps the larger operand first when negatives are disallowed"
    }
}

/// Invariant: multiplication factors have at most three digits.
pub struct MultiplicationDigitsCapped;

impl Invariant<Generated<'_>> for MultiplicationDigitsCapped {
    fn holds(state: &Generated<'_>) -> bool {
        let problem = state.problem;
        if problem.operator() != Operator::Multiplication {
            return true;
        }
        let limit = 10u64.pow(MAX_MULTIPLICATION_DIGITS);
        problem.operand1() < limit && problem.operand2() < limit
    }

    fn description() -> &'static str {
        "Multiplication factors have at most three digits"
    }
}

/// Invariant: the problem's operator was one the generator could pick.
pub struct OperatorWasEnabled;

impl Invariant<Generated<'_>> for OperatorWasEnabled {
    fn holds(state: &Generated<'_>) -> bool {
        state.config.operations().contains(&state.problem.operator())
    }

    fn description() -> &'static str {
        "Operator comes from the enabled operations"
    }
}

/// Invariants every generated problem satisfies.
pub type GenerationInvariants = (
    NonNegativeWhenRequired,
    MultiplicationDigitsCapped,
    OperatorWasEnabled,
);

// ─────────────────────────────────────────────────────────────
//  Borrow invariants
// ─────────────────────────────────────────────────────────────

/// A subtraction problem and its borrow trace.
#[derive(Debug, Clone, Copy)]
pub struct SubtractionWorking<'a> {
    /// The subtraction problem.
    pub problem: &'a Problem,
    /// Its borrow trace.
    pub trace: &'a BorrowTrace,
}

/// Invariant: what was borrowed rightward equals what was lent leftward,
/// so the regrouped minuend still has the minuend's value.
pub struct RegroupingPreservesMinuend;

impl Invariant<SubtractionWorking<'_>> for RegroupingPreservesMinuend {
    fn holds(state: &SubtractionWorking<'_>) -> bool {
        !state.trace.is_resolved()
            || state.trace.regrouped_value() == u128::from(state.problem.operand1())
    }

    fn description() -> &'static str {
        "Regrouped minuend equals the original minuend"
    }
}

/// Invariant: after regrouping no column subtracts a larger digit, and the
/// column differences reassemble the answer.
pub struct ColumnsReassembleAnswer;

impl Invariant<SubtractionWorking<'_>> for ColumnsReassembleAnswer {
    fn holds(state: &SubtractionWorking<'_>) -> bool {
        if !state.trace.is_resolved() {
            return true;
        }
        state
            .trace
            .digits()
            .iter()
            .all(|d| d.regrouped() >= d.subtrahend())
            && state.trace.column_difference_value() == i128::from(state.problem.answer())
    }

    fn description() -> &'static str {
        "Column differences reassemble the answer"
    }
}

/// Invariants every resolved borrow trace satisfies.
pub type BorrowInvariants = (RegroupingPreservesMinuend, ColumnsReassembleAnswer);
