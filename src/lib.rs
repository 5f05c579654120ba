//! Calcu Later library - arithmetic practice around the calcu_core engine
//!
//! This library wires the pure problem/hint engine to the things a practice
//! app needs around it.
//!
//! # Architecture
//!
//! - **Settings**: TOML-backed store for the generation configuration and hint toggles
//! - **Session**: current problem, hint level and scratch work, reset together
//! - **View**: the derived hint data (answer, carries, borrows, partial sums) per level
//! - **Scratchpad**: append-only stroke log with undo and clear
//!
//! # Example
//!
//! ```
//! use calcu_later::{HintState, PracticeSession, Settings};
//! use rand::SeedableRng;
//!
//! let rng = rand::rngs::StdRng::seed_from_u64(9);
//! let mut session = PracticeSession::new(&Settings::default(), rng)?;
//! assert_eq!(*session.hint_state(), HintState::None);
//! session.cycle_hint();
//! assert!(session.shows_answer());
//! # Ok::<(), calcu_later::ProblemError>(())
//! ```

mod scratchpad;
mod session;
mod settings;
mod view;

// Crate-level exports - Settings
pub use settings::{HintPreferences, Settings, SettingsError, SettingsStore, digits_from_text};

// Crate-level exports - Session
pub use session::PracticeSession;

// Crate-level exports - Hint views
pub use view::{HintView, StandardBreakdown};

// Crate-level exports - Scratch work
pub use scratchpad::{Point, Scratchpad, Stroke};

// Crate-level exports - Core engine
pub use calcu_core::{
    BorrowDigit, BorrowTrace, CarryTrace, Configuration, HintState, Operator, PartialSum,
    Problem, ProblemError, RandomSource, compute_borrow_trace, compute_carries,
    compute_partial_sums, cycle_hint, generate,
};
