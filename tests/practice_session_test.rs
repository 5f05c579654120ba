//! Tests for the practice session lifecycle and the hint views it exposes.

use rand::SeedableRng;
use rand::rngs::StdRng;

use calcu_later::{
    Configuration, HintPreferences, HintState, HintView, Operator, Point, PracticeSession,
    Problem, Settings, StandardBreakdown,
};

fn settings_for(ops: &[Operator]) -> Settings {
    Settings {
        generation: Configuration::new(2, 2, false, ops.iter().copied()),
        hints: HintPreferences::default(),
    }
}

fn start(ops: &[Operator], seed: u64) -> PracticeSession<StdRng> {
    PracticeSession::new(&settings_for(ops), StdRng::seed_from_u64(seed))
        .expect("Session start failed")
}

#[test]
fn test_new_problem_resets_from_every_hint_state() {
    let mut session = start(&[Operator::Addition], 42);

    // Addition cycles through every state, so each reset starts from a different one.
    for cycles in 0..4 {
        for _ in 0..cycles {
            session.cycle_hint();
        }
        session
            .scratchpad_mut()
            .begin_stroke(Point::new(0.0, 0.0));
        session.scratchpad_mut().extend_stroke(Point::new(5.0, 5.0));

        session.new_problem().expect("New problem failed");
        assert_eq!(*session.hint_state(), HintState::None);
        assert!(session.scratchpad().is_empty());
        assert!(!session.shows_answer());
    }
    assert_eq!(*session.problems_seen(), 5);
}

#[test]
fn test_addition_cycle_has_four_states() {
    let mut session = start(&[Operator::Addition], 7);
    let seen: Vec<HintState> = (0..4).map(|_| session.cycle_hint()).collect();
    assert_eq!(
        seen,
        vec![
            HintState::ShowAnswer,
            HintState::MultiLayer,
            HintState::Standard,
            HintState::None,
        ]
    );
}

#[test]
fn test_subtraction_cycle_has_three_states() {
    let mut session = start(&[Operator::Subtraction], 7);
    let seen: Vec<HintState> = (0..3).map(|_| session.cycle_hint()).collect();
    assert_eq!(
        seen,
        vec![HintState::ShowAnswer, HintState::Standard, HintState::None]
    );
}

#[test]
fn test_hint_view_follows_session_state() {
    let mut session = start(&[Operator::Subtraction], 3);
    assert_eq!(session.hint_view(), HintView::Hidden);

    session.cycle_hint();
    let answer = session.problem().answer();
    assert_eq!(session.hint_view(), HintView::Answer { answer });

    session.cycle_hint();
    match session.hint_view() {
        HintView::Standard {
            breakdown: StandardBreakdown::Borrows { trace },
            ..
        } => assert!(trace.is_resolved()),
        other => panic!("Expected borrow breakdown, got {:?}", other),
    }
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let mut first = start(&[Operator::Addition, Operator::Division], 99);
    let mut second = start(&[Operator::Addition, Operator::Division], 99);
    for _ in 0..10 {
        assert_eq!(first.problem(), second.problem());
        first.new_problem().expect("New problem failed");
        second.new_problem().expect("New problem failed");
    }
}

#[test]
fn test_multi_layer_view_json() {
    let problem = Problem::new(123, 456, Operator::Addition).expect("Valid problem");
    let json = serde_json::to_value(HintView::derive(&problem, HintState::MultiLayer))
        .expect("Serialize failed");

    assert_eq!(json["view"], "multi-layer");
    assert_eq!(json["answer"], 579);
    let numerals: Vec<&str> = json["partial_sums"]
        .as_array()
        .expect("Partial sums array")
        .iter()
        .map(|sum| sum["numeral"].as_str().expect("Numeral string"))
        .collect();
    assert_eq!(numerals, vec!["  500", "   70", "    9"]);
}
