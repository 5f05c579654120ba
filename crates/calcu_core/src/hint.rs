//! Which hint view is currently exposed.

use crate::Operator;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Hint level shown for the current problem.
///
/// Every new problem starts at [`HintState::None`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum HintState {
    /// Nothing revealed.
    #[default]
    None,
    /// The answer is shown.
    ShowAnswer,
    /// Column-by-column working: carries for addition, borrows for subtraction.
    Standard,
    /// Place-value partial sums (addition only).
    MultiLayer,
}

impl HintState {
    /// Advances to the next hint level.
    ///
    /// `None → ShowAnswer → MultiLayer → Standard → None` for addition,
    /// `None → ShowAnswer → Standard → None` for everything else.
    #[instrument]
    pub fn cycle(self, operator: Operator) -> Self {
        match self {
            HintState::None => HintState::ShowAnswer,
            HintState::ShowAnswer => match operator {
                Operator::Addition => HintState::MultiLayer,
                Operator::Subtraction | Operator::Multiplication | Operator::Division => {
                    HintState::Standard
                }
            },
            HintState::Standard => HintState::None,
            HintState::MultiLayer => HintState::Standard,
        }
    }

    /// True for every state that reveals the answer.
    pub fn shows_answer(self) -> bool {
        self != HintState::None
    }
}

/// Free-function form of [`HintState::cycle`].
pub fn cycle_hint(current: HintState, operator: Operator) -> HintState {
    current.cycle(operator)
}
