//! Carry analysis for addition problems.

use crate::digits::Columns;
use crate::{Operator, Problem};
use serde::Serialize;
use tracing::{debug, instrument};

/// Where carries occur in a column addition.
///
/// Indexed by place value (0 = ones). A carry generated at place `p` is
/// written above place `p + 1`; a carry out of the leftmost column becomes a
/// new leading digit of the answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CarryTrace {
    generated: Vec<bool>,
}

impl CarryTrace {
    /// Number of aligned columns (0 for a non-addition problem).
    pub fn width(&self) -> usize {
        self.generated.len()
    }

    /// Per-place carry-out flags, ones place first.
    pub fn generated(&self) -> &[bool] {
        &self.generated
    }

    /// True when the column at `place` produces a carry.
    pub fn generated_at(&self, place: usize) -> bool {
        self.generated.get(place).copied().unwrap_or(false)
    }

    /// True when a carry lands on `place` from the column to its right.
    pub fn carried_into(&self, place: usize) -> bool {
        place > 0 && self.generated_at(place - 1)
    }

    /// True when the leftmost column carries out into a new digit.
    pub fn has_leading_carry(&self) -> bool {
        self.generated.last().copied().unwrap_or(false)
    }

    /// True when no column carries.
    pub fn is_empty(&self) -> bool {
        !self.generated.iter().any(|&c| c)
    }

    /// The carry row written above the operands, e.g. `"1 "` for 18 + 7.
    ///
    /// One character per column, plus a leading `'1'` when the leftmost
    /// column carries out. Empty when nothing carries.
    pub fn carry_row(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let width = self.width();
        let mut row = String::with_capacity(width + 1);
        if self.has_leading_carry() {
            row.push('1');
        }
        for index in 0..width {
            // Column `index` shows the carry coming from the column to its right.
            let place = width - 1 - index;
            row.push(if self.carried_into(place) { '1' } else { ' ' });
        }
        row
    }
}

/// Computes the carry trace of an addition problem.
///
/// Any other operator yields an empty trace.
#[instrument(fields(problem = %problem))]
pub fn compute_carries(problem: &Problem) -> CarryTrace {
    if problem.operator() != Operator::Addition {
        debug!("Carry trace requested for non-addition problem");
        return CarryTrace::default();
    }

    let cols = Columns::align(problem.operand1(), problem.operand2());
    let width = cols.width();
    let mut generated = vec![false; width];
    let mut carry = 0u8;

    for index in (0..width).rev() {
        let sum = cols.top[index] + cols.bottom[index] + carry;
        carry = sum / 10;
        generated[cols.place_of(index)] = carry > 0;
    }

    debug!(?generated, "Carries computed");
    CarryTrace { generated }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(a: u64, b: u64) -> Problem {
        Problem::new(a, b, Operator::Addition).unwrap()
    }

    #[test]
    fn test_carry_into_tens() {
        let trace = compute_carries(&add(18, 7));
        assert!(trace.generated_at(0));
        assert!(trace.carried_into(1));
        assert!(!trace.has_leading_carry());
        assert_eq!(trace.carry_row(), "1 ");
    }

    #[test]
    fn test_no_carries() {
        let trace = compute_carries(&add(123, 456));
        assert!(trace.is_empty());
        assert_eq!(trace.carry_row(), "");
    }

    #[test]
    fn test_chained_carries_with_leading_digit() {
        // 999 + 1: every column carries, including out of the hundreds.
        let trace = compute_carries(&add(999, 1));
        assert_eq!(trace.generated(), &[true, true, true]);
        assert!(trace.has_leading_carry());
        assert_eq!(trace.carry_row(), "111 ");
    }

    #[test]
    fn test_carry_propagated_by_nine() {
        // 95 + 5: ones carries; tens 9 + 0 + 1 carries too.
        let trace = compute_carries(&add(95, 5));
        assert_eq!(trace.generated(), &[true, true]);
        assert_eq!(trace.carry_row(), "11 ");
    }

    #[test]
    fn test_non_addition_is_empty() {
        let problem = Problem::new(18, 7, Operator::Subtraction).unwrap();
        let trace = compute_carries(&problem);
        assert_eq!(trace.width(), 0);
        assert_eq!(trace.carry_row(), "");
    }
}
