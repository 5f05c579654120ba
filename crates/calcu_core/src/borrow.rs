//! Borrow analysis for subtraction problems.
//!
//! Columns are processed from the ones place leftwards. A column whose
//! current value is smaller than the subtrahend digit borrows ten from the
//! nearest nonzero column to its left. Zero columns crossed on the way each
//! become 9: they receive ten from their left neighbour and pass one on.
//!
//! Every borrow event gets a group id (`event index mod palette size`) shared
//! by the borrowing column and every column in its lending chain, so a view
//! can draw one chain in one colour.

use crate::digits::Columns;
use crate::invariants::{
    ColumnsReassembleAnswer, Invariant, RegroupingPreservesMinuend, SubtractionWorking,
};
use crate::{Operator, Problem};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Number of distinct group ids handed out before they repeat.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// One column of the minuend as written in a borrow explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorrowDigit {
    place: usize,
    original: u8,
    subtrahend: u8,
    after_borrowing: Option<u8>,
    after_lending: Option<u8>,
    borrow_group: Option<usize>,
    lend_group: Option<usize>,
}

impl BorrowDigit {
    fn new(place: usize, original: u8, subtrahend: u8) -> Self {
        Self {
            place,
            original,
            subtrahend,
            after_borrowing: None,
            after_lending: None,
            borrow_group: None,
            lend_group: None,
        }
    }

    /// Place value of this column (0 = ones).
    pub fn place(&self) -> usize {
        self.place
    }

    /// Minuend digit before any regrouping.
    pub fn original(&self) -> u8 {
        self.original
    }

    /// Subtrahend digit in the same column (0 when padded).
    pub fn subtrahend(&self) -> u8 {
        self.subtrahend
    }

    /// Value after this column borrowed ten, in `10..=19`.
    pub fn after_borrowing(&self) -> Option<u8> {
        self.after_borrowing
    }

    /// Value after this column lent one to the right; 9 for a zero that
    /// passed the borrow along.
    pub fn after_lending(&self) -> Option<u8> {
        self.after_lending
    }

    /// Group of the borrow event this column initiated.
    pub fn borrow_group(&self) -> Option<usize> {
        self.borrow_group
    }

    /// Group of the first borrow chain this column lent to.
    pub fn lend_group(&self) -> Option<usize> {
        self.lend_group
    }

    /// The value the column holds once all regrouping is done.
    pub fn regrouped(&self) -> u8 {
        self.after_borrowing
            .or(self.after_lending)
            .unwrap_or(self.original)
    }
}

/// Borrow explanation for a subtraction problem.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BorrowTrace {
    /// Columns, most significant first.
    digits: Vec<BorrowDigit>,
    /// Places of the borrowing columns in the order they borrowed.
    steps: Vec<usize>,
    /// False when a borrow chain ran past the leftmost column.
    resolved: bool,
}

impl BorrowTrace {
    /// Columns of the minuend, most significant first.
    pub fn digits(&self) -> &[BorrowDigit] {
        &self.digits
    }

    /// Column at the given place value.
    pub fn at_place(&self, place: usize) -> Option<&BorrowDigit> {
        let width = self.digits.len();
        if place >= width {
            return None;
        }
        self.digits.get(width - 1 - place)
    }

    /// Places that borrowed, ones side first.
    pub fn borrow_steps(&self) -> &[usize] {
        &self.steps
    }

    /// True when at least one column borrowed.
    pub fn has_borrows(&self) -> bool {
        !self.steps.is_empty()
    }

    /// True when every borrow found a lender.
    ///
    /// Only a subtraction with a negative result can leave a borrow unpaid.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Value of the regrouped minuend, `Σ regrouped × 10^place`.
    ///
    /// Equals the minuend whenever the trace is resolved. Widened to `u128`
    /// so an unresolved trace over 19-digit operands still has a value.
    pub fn regrouped_value(&self) -> u128 {
        self.digits
            .iter()
            .map(|d| u128::from(d.regrouped()) * 10u128.pow(d.place as u32))
            .sum()
    }

    /// Per-column differences `regrouped − subtrahend`, reassembled.
    ///
    /// Equals the answer whenever the trace is resolved.
    pub fn column_difference_value(&self) -> i128 {
        self.digits
            .iter()
            .map(|d| {
                (i128::from(d.regrouped()) - i128::from(d.subtrahend))
                    * 10i128.pow(d.place as u32)
            })
            .sum()
    }
}

/// Computes the borrow trace with the default palette size.
///
/// Any operator other than subtraction yields an empty trace.
#[instrument(fields(problem = %problem))]
pub fn compute_borrow_trace(problem: &Problem) -> BorrowTrace {
    compute_borrow_trace_with_palette(problem, DEFAULT_PALETTE_SIZE)
}

/// Computes the borrow trace, cycling group ids through `palette_size` values.
#[instrument(fields(problem = %problem))]
pub fn compute_borrow_trace_with_palette(problem: &Problem, palette_size: usize) -> BorrowTrace {
    if problem.operator() != Operator::Subtraction {
        debug!("Borrow trace requested for non-subtraction problem");
        return BorrowTrace {
            resolved: true,
            ..BorrowTrace::default()
        };
    }
    let palette_size = palette_size.max(1);

    let cols = Columns::align(problem.operand1(), problem.operand2());
    let width = cols.width();
    let mut digits: Vec<BorrowDigit> = (0..width)
        .map(|i| BorrowDigit::new(cols.place_of(i), cols.top[i], cols.bottom[i]))
        .collect();
    let mut effective: Vec<u8> = cols.top.clone();
    let mut steps = Vec::new();
    let mut resolved = true;

    for i in (0..width).rev() {
        if effective[i] >= cols.bottom[i] {
            continue;
        }

        let group = steps.len() % palette_size;
        effective[i] += 10;
        digits[i].after_borrowing = Some(effective[i]);
        digits[i].borrow_group = Some(group);
        steps.push(cols.place_of(i));
        debug!(place = cols.place_of(i), group, "Column borrows");

        let mut lender_found = false;
        for j in (0..i).rev() {
            let before = effective[j];
            // A zero takes ten from its own left neighbour before lending one.
            effective[j] = if before == 0 { 9 } else { before - 1 };
            digits[j].after_lending = Some(effective[j]);
            digits[j].lend_group.get_or_insert(group);
            if before > 0 {
                lender_found = true;
                break;
            }
            debug!(place = cols.place_of(j), "Zero column passes the borrow on");
        }

        if !lender_found {
            warn!(place = cols.place_of(i), "Borrow chain ran past the leftmost column");
            resolved = false;
        }
    }

    let trace = BorrowTrace {
        digits,
        steps,
        resolved,
    };

    let working = SubtractionWorking {
        problem,
        trace: &trace,
    };
    debug_assert!(
        RegroupingPreservesMinuend::holds(&working),
        "Regrouping changed the minuend"
    );
    debug_assert!(
        ColumnsReassembleAnswer::holds(&working),
        "Column differences do not reassemble the answer"
    );

    trace
}
