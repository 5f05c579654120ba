//! The hint data exposed for each hint state.

use calcu_core::{
    BorrowTrace, CarryTrace, HintState, Operator, PartialSum, Problem, compute_borrow_trace,
    compute_carries, compute_partial_sums,
};
use serde::Serialize;
use tracing::instrument;

/// Column working shown by the standard hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StandardBreakdown {
    /// Carries of an addition.
    Carries {
        /// The carry row written above the operands.
        carry_row: String,
        /// Per-place carry flags.
        trace: CarryTrace,
    },
    /// Borrows of a subtraction.
    Borrows {
        /// Borrow and lend chains.
        trace: BorrowTrace,
    },
    /// No column working exists for this operator.
    Unavailable,
}

/// Derived data for the current hint state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum HintView {
    /// Nothing revealed.
    Hidden,
    /// Only the answer.
    Answer {
        /// The answer.
        answer: i64,
    },
    /// Answer plus column working.
    Standard {
        /// The answer.
        answer: i64,
        /// Carries or borrows.
        breakdown: StandardBreakdown,
    },
    /// Answer plus place-value partial sums.
    MultiLayer {
        /// The answer.
        answer: i64,
        /// Partial sums, most significant first.
        partial_sums: Vec<PartialSum>,
    },
}

impl HintView {
    /// Computes the view for `state` from the problem alone.
    #[instrument(fields(problem = %problem))]
    pub fn derive(problem: &Problem, state: HintState) -> Self {
        let answer = problem.answer();
        match state {
            HintState::None => HintView::Hidden,
            HintState::ShowAnswer => HintView::Answer { answer },
            HintState::Standard => HintView::Standard {
                answer,
                breakdown: StandardBreakdown::for_problem(problem),
            },
            HintState::MultiLayer => HintView::MultiLayer {
                answer,
                partial_sums: compute_partial_sums(problem),
            },
        }
    }

    /// True when the answer is visible.
    pub fn shows_answer(&self) -> bool {
        !matches!(self, HintView::Hidden)
    }
}

impl StandardBreakdown {
    /// Picks the column working that fits the problem's operator.
    #[instrument(fields(problem = %problem))]
    pub fn for_problem(problem: &Problem) -> Self {
        match problem.operator() {
            Operator::Addition => {
                let trace = compute_carries(problem);
                StandardBreakdown::Carries {
                    carry_row: trace.carry_row(),
                    trace,
                }
            }
            Operator::Subtraction => StandardBreakdown::Borrows {
                trace: compute_borrow_trace(problem),
            },
            Operator::Multiplication | Operator::Division => StandardBreakdown::Unavailable,
        }
    }
}
