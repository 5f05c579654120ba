//! Property tests for generated problems.
//!
//! 1. Addition answers are operand sums.
//! 2. Subtraction without negatives keeps the larger operand first.
//! 3. Subtraction with negatives is a plain difference.
//! 4. Division has a nonzero divisor and an exact quotient.
//! 5. Multiplication factors never exceed three digits.

use calcu_core::{Configuration, Operator, QUOTIENT_RANGE, generate};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Helpers ─────────────────────────────────────────────────────────────

fn digits_strategy() -> impl Strategy<Value = u32> {
    0u32..=12
}

fn single_op(op: Operator, d1: u32, d2: u32, negatives: bool) -> Configuration {
    Configuration::new(d1, d2, negatives, [op])
}

proptest! {
    #[test]
    fn addition_answer_is_sum(seed in any::<u64>(), d1 in digits_strategy(), d2 in digits_strategy()) {
        let config = single_op(Operator::Addition, d1, d2, false);
        let problem = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(problem.operator(), Operator::Addition);
        prop_assert_eq!(problem.answer(), (problem.operand1() + problem.operand2()) as i64);
    }

    #[test]
    fn subtraction_without_negatives_is_non_negative(
        seed in any::<u64>(),
        d1 in digits_strategy(),
        d2 in digits_strategy(),
    ) {
        let config = single_op(Operator::Subtraction, d1, d2, false);
        let problem = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(problem.answer() >= 0);
        prop_assert!(problem.operand1() >= problem.operand2());
    }

    #[test]
    fn subtraction_with_negatives_is_difference(
        seed in any::<u64>(),
        d1 in digits_strategy(),
        d2 in digits_strategy(),
    ) {
        let config = single_op(Operator::Subtraction, d1, d2, true);
        let problem = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(
            problem.answer(),
            problem.operand1() as i64 - problem.operand2() as i64
        );
    }

    #[test]
    fn division_is_exact(seed in any::<u64>(), d1 in digits_strategy(), d2 in digits_strategy()) {
        let config = single_op(Operator::Division, d1, d2, false);
        let problem = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_ne!(problem.operand2(), 0);
        prop_assert_eq!(problem.operand1(), problem.operand2() * problem.answer() as u64);
        prop_assert!(QUOTIENT_RANGE.contains(&(problem.answer() as u64)));
    }

    #[test]
    fn multiplication_is_capped(seed in any::<u64>(), d1 in digits_strategy(), d2 in digits_strategy()) {
        let config = single_op(Operator::Multiplication, d1, d2, false);
        let problem = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(problem.operand1() < 1000);
        prop_assert!(problem.operand2() < 1000);
        prop_assert_eq!(problem.answer(), (problem.operand1() * problem.operand2()) as i64);
    }

    #[test]
    fn operator_always_enabled(seed in any::<u64>(), mask in 0u8..16) {
        let ops: Vec<Operator> = [
            Operator::Addition,
            Operator::Subtraction,
            Operator::Multiplication,
            Operator::Division,
        ]
        .into_iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, op)| op)
        .collect();
        let config = Configuration::new(2, 2, false, ops.clone());
        let problem = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        if ops.is_empty() {
            prop_assert_eq!(problem.operator(), Operator::Addition);
        } else {
            prop_assert!(ops.contains(&problem.operator()));
        }
    }
}
