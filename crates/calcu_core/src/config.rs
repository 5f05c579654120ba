//! Generation settings supplied by the host application.

use crate::Operator;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Largest digit count honoured for any operand.
///
/// Nine digits keeps every operand, dividend and answer well inside `u64`/`i64`.
pub const MAX_DIGITS: u32 = 9;

/// Digit cap applied to both factors of a multiplication problem.
pub const MAX_MULTIPLICATION_DIGITS: u32 = 3;

/// Parameters for problem generation.
///
/// A `Configuration` is read once per call to [`crate::generate`]; changing it
/// never affects a problem that already exists.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Configuration {
    /// Desired decimal digits of the first operand.
    digits_operand1: u32,
    /// Desired decimal digits of the second operand.
    digits_operand2: u32,
    /// When false, subtraction always places the larger operand first.
    allow_negative_results: bool,
    /// Operations the generator may choose from.
    enabled_operations: BTreeSet<Operator>,
}

impl Configuration {
    /// Creates a configuration from explicit values.
    #[instrument(skip(enabled_operations))]
    pub fn new(
        digits_operand1: u32,
        digits_operand2: u32,
        allow_negative_results: bool,
        enabled_operations: impl IntoIterator<Item = Operator>,
    ) -> Self {
        Self {
            digits_operand1,
            digits_operand2,
            allow_negative_results,
            enabled_operations: enabled_operations.into_iter().collect(),
        }
    }

    /// Digit count of the first operand after coercion into `1..=MAX_DIGITS`.
    pub fn effective_digits1(&self) -> u32 {
        coerce_digits(self.digits_operand1)
    }

    /// Digit count of the second operand after coercion into `1..=MAX_DIGITS`.
    pub fn effective_digits2(&self) -> u32 {
        coerce_digits(self.digits_operand2)
    }

    /// Operations to draw from, in declaration order.
    ///
    /// An empty set falls back to addition only. The fallback is silent here;
    /// [`crate::generate`] reports it once per problem.
    pub fn operations(&self) -> Vec<Operator> {
        if self.enabled_operations.is_empty() {
            return vec![Operator::Addition];
        }
        self.enabled_operations.iter().copied().collect()
    }

    /// Returns true if `op` is explicitly enabled.
    pub fn is_enabled(&self, op: Operator) -> bool {
        self.enabled_operations.contains(&op)
    }

    /// Enables or disables a single operation.
    #[instrument(skip(self))]
    pub fn set_enabled(&mut self, op: Operator, enabled: bool) {
        if enabled {
            self.enabled_operations.insert(op);
        } else {
            self.enabled_operations.remove(&op);
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            digits_operand1: 2,
            digits_operand2: 2,
            allow_negative_results: false,
            enabled_operations: [Operator::Addition, Operator::Subtraction]
                .into_iter()
                .collect(),
        }
    }
}

/// Clamps a requested digit count into `1..=MAX_DIGITS`.
pub fn coerce_digits(digits: u32) -> u32 {
    digits.clamp(1, MAX_DIGITS)
}
