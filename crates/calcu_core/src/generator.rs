//! Random problem generation.

use crate::config::MAX_MULTIPLICATION_DIGITS;
use crate::{Configuration, Operator, Problem, ProblemError};
use std::ops::Range;
use tracing::{debug, info, instrument, warn};

/// Quotients of generated division problems are drawn from this range.
pub const QUOTIENT_RANGE: Range<u64> = 1..20;

/// Source of uniformly distributed integers.
///
/// Any [`rand::Rng`] is a random source.
pub trait RandomSource {
    /// Returns an integer in `range` (start inclusive, end exclusive).
    ///
    /// `range` is never empty when called by the generator.
    fn next_in(&mut self, range: Range<u64>) -> u64;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_in(&mut self, range: Range<u64>) -> u64 {
        self.random_range(range)
    }
}

/// Range of numbers with exactly `digits` decimal digits.
pub fn operand_range(digits: u32) -> Range<u64> {
    10u64.pow(digits - 1)..10u64.pow(digits)
}

/// Generates one problem from `config`.
///
/// The two default operands are always drawn first, then the operator.
/// Multiplication and division draw their own operands. Errors only if a
/// constructed problem breaks an invariant or the random source answers
/// outside the requested range.
#[instrument(skip(config, rng))]
pub fn generate<R: RandomSource + ?Sized>(
    config: &Configuration,
    rng: &mut R,
) -> Result<Problem, ProblemError> {
    let digits1 = config.effective_digits1();
    let digits2 = config.effective_digits2();

    let operand1 = rng.next_in(operand_range(digits1));
    let operand2 = rng.next_in(operand_range(digits2));

    if config.enabled_operations().is_empty() {
        warn!("No operations enabled, falling back to addition");
    }
    let operations = config.operations();
    let pick = rng.next_in(0..operations.len() as u64) as usize;
    let operator = operations.get(pick).copied().ok_or_else(|| {
        ProblemError::InvariantViolation(format!(
            "Operator draw {} outside {} enabled operations",
            pick,
            operations.len()
        ))
    })?;
    debug!(operand1, operand2, ?operator, "Drew operands and operator");

    let problem = match operator {
        Operator::Addition => Problem::new(operand1, operand2, operator)?,
        Operator::Subtraction => {
            if *config.allow_negative_results() {
                Problem::new(operand1, operand2, operator)?
            } else {
                Problem::new(operand1.max(operand2), operand1.min(operand2), operator)?
            }
        }
        Operator::Multiplication => {
            let factor1 = rng.next_in(operand_range(digits1.min(MAX_MULTIPLICATION_DIGITS)));
            let factor2 = rng.next_in(operand_range(digits2.min(MAX_MULTIPLICATION_DIGITS)));
            Problem::new(factor1, factor2, operator)?
        }
        Operator::Division => {
            // Divisor first, dividend derived, so the quotient is always exact.
            let divisor = rng.next_in(1..10u64.pow(digits2)).max(1);
            let quotient = rng.next_in(QUOTIENT_RANGE);
            Problem::new(divisor * quotient, divisor, operator)?
        }
    };

    #[cfg(debug_assertions)]
    {
        use crate::invariants::{
            Generated, GenerationInvariants, InvariantSet, ProblemInvariants, describe,
        };

        ProblemInvariants::check_all(&problem)
            .map_err(|v| ProblemError::InvariantViolation(describe(&v)))?;
        let generated = Generated {
            problem: &problem,
            config,
        };
        GenerationInvariants::check_all(&generated)
            .map_err(|v| ProblemError::InvariantViolation(describe(&v)))?;
    }

    info!(%problem, answer = problem.answer(), "Generated problem");
    Ok(problem)
}
