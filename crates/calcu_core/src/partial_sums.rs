//! Place-by-place decomposition of an addition ("multi-layer" view).

use crate::digits::Columns;
use crate::{Operator, Problem};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Sum of one column scaled by its place value.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct PartialSum {
    /// The value right-aligned to the display width, e.g. `"  500"`.
    numeral: String,
    /// Place value of the column (0 = ones).
    place: usize,
    /// `(digit1 + digit2) × 10^place`.
    value: u64,
}

/// Width the multi-layer view aligns to: the answer plus an operator and a space.
pub fn display_width(problem: &Problem) -> usize {
    problem.answer().unsigned_abs().to_string().len() + 2
}

/// Computes the partial sums of an addition problem, most significant first.
///
/// Columns whose digits sum to zero are left out. Any operator other than
/// addition yields an empty list.
#[instrument(fields(problem = %problem))]
pub fn compute_partial_sums(problem: &Problem) -> Vec<PartialSum> {
    if problem.operator() != Operator::Addition {
        debug!("Partial sums requested for non-addition problem");
        return Vec::new();
    }

    let cols = Columns::align(problem.operand1(), problem.operand2());
    let width = display_width(problem);

    let sums: Vec<PartialSum> = (0..cols.width())
        .filter_map(|i| {
            let digit_sum = u64::from(cols.top[i] + cols.bottom[i]);
            if digit_sum == 0 {
                return None;
            }
            let place = cols.place_of(i);
            let value = digit_sum * 10u64.pow(place as u32);
            Some(PartialSum {
                numeral: format!("{value:>width$}"),
                place,
                value,
            })
        })
        .collect();

    debug!(rows = sums.len(), "Partial sums computed");
    sums
}
