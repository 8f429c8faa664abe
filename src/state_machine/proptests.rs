//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::transition::*;
use super::*;
use crate::lookup::{LookupErrorKind, RecipeItem};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

const BUDGET: usize = 160;

fn test_context() -> SessionContext {
    SessionContext::new("+233200000000", BUDGET)
}

fn replies(result: &TransitionResult) -> usize {
    result
        .effects
        .iter()
        .filter(|e| matches!(e, Effect::Reply { .. }))
        .count()
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_recipe() -> impl Strategy<Value = RecipeItem> {
    (
        proptest::option::of("[A-Za-z ]{1,40}"),
        proptest::collection::vec("[a-z ]{1,15}", 0..12),
    )
        .prop_map(|(name, ingredient_lines)| RecipeItem {
            name,
            ingredient_lines,
            ..RecipeItem::default()
        })
}

fn arb_session() -> impl Strategy<Value = SubscriberSession> {
    proptest::collection::vec(arb_recipe(), 1..8)
        .prop_map(|recipes| SubscriberSession::new(recipes).unwrap())
}

fn arb_control_keypress() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Keypress(Command::Next)),
        Just(Event::Keypress(Command::Previous)),
        Just(Event::Keypress(Command::Detail)),
        Just(Event::Keypress(Command::Prompt)),
    ]
}

fn arb_lookup_error_kind() -> impl Strategy<Value = LookupErrorKind> {
    prop_oneof![
        Just(LookupErrorKind::ConnectionRefused),
        Just(LookupErrorKind::Timeout),
        (400u16..600).prop_map(|status| LookupErrorKind::UpstreamError { status }),
        Just(LookupErrorKind::Unknown),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Cursor stays in range and every keypress yields exactly one reply
    #[test]
    fn prop_navigation_keeps_cursor_in_bounds(
        session in arb_session(),
        events in proptest::collection::vec(arb_control_keypress(), 0..40),
    ) {
        let len = session.len();
        let mut state = SessionState::Browsing(session);
        let ctx = test_context();

        for event in events {
            let result = transition(&state, &ctx, event);
            prop_assert_eq!(replies(&result), 1);
            prop_assert!(result.reply().unwrap().text().chars().count() <= BUDGET);
            state = result.new_state;

            let session = state.session().unwrap();
            prop_assert!(session.cursor() < len);
            prop_assert_eq!(session.len(), len);
        }
    }

    // Next at the last result changes nothing, however often it is pressed
    #[test]
    fn prop_next_at_end_is_idempotent(session in arb_session(), presses in 1usize..6) {
        let mut last = session;
        while let Some(next) = last.advanced() {
            last = next;
        }
        let state = SessionState::Browsing(last);
        let ctx = test_context();

        let first = transition(&state, &ctx, Event::Keypress(Command::Next));
        for _ in 0..presses {
            let again = transition(&state, &ctx, Event::Keypress(Command::Next));
            prop_assert_eq!(&again.new_state, &state);
            prop_assert_eq!(&again.effects, &first.effects);
        }
    }

    // Without a session every control code ends the conversation
    #[test]
    fn prop_control_codes_need_session(code in prop_oneof![Just("1"), Just("2"), Just("99")]) {
        let result = transition(
            &SessionState::NoSession,
            &test_context(),
            Event::Keypress(Command::parse(code)),
        );
        prop_assert_eq!(&result.new_state, &SessionState::NoSession);
        let screen = result.reply().unwrap();
        prop_assert!(screen.is_terminal());
        prop_assert_eq!(screen.text(), SessionError::NoActiveSession.to_string());
    }

    // A failed lookup never disturbs an existing session
    #[test]
    fn prop_failed_lookup_preserves_session(
        session in arb_session(),
        kind in arb_lookup_error_kind(),
    ) {
        let state = SessionState::Browsing(session);
        let result = transition(&state, &test_context(), Event::LookupFailed { kind });

        prop_assert_eq!(&result.new_state, &state);
        prop_assert!(!result.effects.contains(&Effect::PersistSession));
        prop_assert!(result.reply().unwrap().is_terminal());
    }

    // Any non-control query either asks for a lookup or fails validation
    #[test]
    fn prop_query_looks_up_or_refuses(query in "[a-z ,]{1,30}") {
        let result = transition(
            &SessionState::NoSession,
            &test_context(),
            Event::Keypress(Command::Query(query.clone())),
        );

        let looks_up = result
            .effects
            .iter()
            .any(|e| matches!(e, Effect::LookupRecipes { .. }));
        let has_ingredients = query.split(',').any(|piece| !piece.trim().is_empty());
        prop_assert_eq!(looks_up, has_ingredients);
        prop_assert_eq!(replies(&result), usize::from(!has_ingredients));
    }
}
