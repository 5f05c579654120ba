//! Calcu Core - arithmetic problems and the working behind their hints
//!
//! Pure, synchronous logic with no I/O:
//!
//! - **Generator**: turns a [`Configuration`] and a [`RandomSource`] into a [`Problem`]
//! - **Carry analyzer**: which columns of an addition carry
//! - **Borrow analyzer**: borrow and lend chains of a subtraction, including
//!   borrowing through zeros
//! - **Partial sums**: place-value decomposition of an addition
//! - **Hint state**: which of those views is currently exposed
//!
//! Every derived view is a function of the problem alone, so problems and
//! traces can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use calcu_core::{Operator, Problem, compute_borrow_trace};
//!
//! let problem = Problem::new(500, 7, Operator::Subtraction)?;
//! let trace = compute_borrow_trace(&problem);
//! assert_eq!(trace.at_place(1).and_then(|d| d.after_lending()), Some(9));
//! # Ok::<(), calcu_core::ProblemError>(())
//! ```

mod borrow;
mod carry;
mod config;
mod digits;
mod generator;
mod hint;
pub mod invariants;
mod operator;
mod partial_sums;
mod problem;

pub use borrow::{
    BorrowDigit, BorrowTrace, DEFAULT_PALETTE_SIZE, compute_borrow_trace,
    compute_borrow_trace_with_palette,
};
pub use carry::{CarryTrace, compute_carries};
pub use config::{Configuration, MAX_DIGITS, MAX_MULTIPLICATION_DIGITS, coerce_digits};
pub use generator::{QUOTIENT_RANGE, RandomSource, generate, operand_range};
pub use hint::{HintState, cycle_hint};
pub use operator::{Operator, ParseOperatorError};
pub use partial_sums::{PartialSum, compute_partial_sums, display_width};
pub use problem::{Problem, ProblemError};
