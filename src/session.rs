//! Practice session: the current problem and everything tied to it.

use crate::scratchpad::Scratchpad;
use crate::settings::{HintPreferences, Settings};
use crate::view::HintView;
use calcu_core::{Configuration, HintState, Problem, ProblemError, RandomSource, generate};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// One learner's practice state.
///
/// Hint state and scratch work belong to the current problem: replacing the
/// problem resets both.
#[derive(Debug, Getters)]
pub struct PracticeSession<R> {
    /// Configuration used for the next problem.
    configuration: Configuration,
    /// Hint views the learner has enabled.
    hint_preferences: HintPreferences,
    /// The current problem.
    problem: Problem,
    /// Hint level shown for the current problem.
    hint_state: HintState,
    /// Scratch work for the current problem.
    scratchpad: Scratchpad,
    /// Number of problems generated in this session.
    problems_seen: u64,
    #[getter(skip)]
    rng: R,
}

impl<R: RandomSource> PracticeSession<R> {
    /// Starts a session with a first problem.
    #[instrument(skip(settings, rng))]
    pub fn new(settings: &Settings, mut rng: R) -> Result<Self, ProblemError> {
        let problem = generate(&settings.generation, &mut rng)?;
        info!(%problem, "Practice session started");
        Ok(Self {
            configuration: settings.generation.clone(),
            hint_preferences: settings.hints,
            problem,
            hint_state: HintState::None,
            scratchpad: Scratchpad::new(),
            problems_seen: 1,
            rng,
        })
    }

    /// Replaces the problem, resetting hints and scratch work.
    ///
    /// On error the session is unchanged.
    #[instrument(skip(self), fields(previous = %self.problem))]
    pub fn new_problem(&mut self) -> Result<&Problem, ProblemError> {
        let problem = generate(&self.configuration, &mut self.rng)?;
        self.problem = problem;
        self.hint_state = HintState::None;
        self.scratchpad.clear();
        self.problems_seen += 1;
        info!(problem = %self.problem, "New problem");
        Ok(&self.problem)
    }

    /// Advances to the next enabled hint level and returns it.
    ///
    /// Disabled levels are skipped; with every level disabled the state stays
    /// at [`HintState::None`].
    #[instrument(skip(self), fields(problem = %self.problem, from = ?self.hint_state))]
    pub fn cycle_hint(&mut self) -> HintState {
        let operator = self.problem.operator();
        let mut next = self.hint_state.cycle(operator);
        // A full cycle is at most four steps and always passes through None.
        for _ in 0..4 {
            if self.hint_preferences.allows(next) {
                break;
            }
            debug!(skipped = ?next, "Hint level disabled");
            next = next.cycle(operator);
        }
        self.hint_state = next;
        next
    }

    /// True when the current hint level reveals the answer.
    pub fn shows_answer(&self) -> bool {
        self.hint_state.shows_answer()
    }

    /// Hint data for the current level.
    pub fn hint_view(&self) -> HintView {
        HintView::derive(&self.problem, self.hint_state)
    }

    /// Mutable access to the scratch pad.
    pub fn scratchpad_mut(&mut self) -> &mut Scratchpad {
        &mut self.scratchpad
    }

    /// Changes the configuration. Takes effect at the next problem.
    #[instrument(skip(self))]
    pub fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
    }

    /// Changes which hint levels are enabled. The current level is kept.
    #[instrument(skip(self))]
    pub fn set_hint_preferences(&mut self, preferences: HintPreferences) {
        self.hint_preferences = preferences;
    }
}
