//! Pure state transition function
//!
//! Keypresses are matched in a fixed order: empty input, then the `1`, `2`
//! and `99` control codes, then anything else as a new ingredient query.

use super::{Boundary, Command, Effect, Event, SessionContext, SessionError, SessionState};
use super::state::SubscriberSession;
use crate::input::parse_ingredients;
use crate::render::{render_recipe, Screen, View};

/// First screen of every conversation
pub const WELCOME_PROMPT: &str = "Welcome to the Personalized Balance Diet Recommendation System!\n\
Enter ingredients separated by commas (e.g., beans, rice, cassava):";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// The reply screen, if this transition produced one
    #[cfg(test)]
    pub fn reply(&self) -> Option<&Screen> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Reply { screen } => Some(screen),
            _ => None,
        })
    }
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs, with no I/O.
/// Every event either yields exactly one `Reply` effect or a
/// `LookupRecipes` effect whose outcome is fed back in as another event.
pub fn transition(state: &SessionState, context: &SessionContext, event: Event) -> TransitionResult {
    let budget = context.screen_budget;

    match (state, event) {
        // ============================================================
        // Keypresses
        // ============================================================
        (_, Event::Keypress(Command::Prompt)) => TransitionResult::new(state.clone())
            .with_effect(Effect::reply(Screen::continue_with(WELCOME_PROMPT, budget))),

        (SessionState::Browsing(session), Event::Keypress(Command::Next)) => {
            match session.advanced() {
                Some(next) => browse(next, View::Full, budget),
                None => refuse(state, SessionError::BoundaryReached(Boundary::Last), budget),
            }
        }

        (SessionState::Browsing(session), Event::Keypress(Command::Previous)) => {
            match session.retreated() {
                Some(previous) => browse(previous, View::Full, budget),
                None => refuse(state, SessionError::BoundaryReached(Boundary::First), budget),
            }
        }

        // Detail never moves the cursor, so nothing to persist
        (SessionState::Browsing(session), Event::Keypress(Command::Detail)) => {
            TransitionResult::new(state.clone())
                .with_effect(Effect::reply(Screen::continue_with(
                    &render_session(session, View::Detail, budget),
                    budget,
                )))
        }

        (
            SessionState::NoSession,
            Event::Keypress(Command::Next | Command::Previous | Command::Detail),
        ) => refuse(state, SessionError::NoActiveSession, budget),

        (_, Event::Keypress(Command::Query(query))) => {
            let ingredients = parse_ingredients(&query);
            if ingredients.is_empty() {
                return refuse(state, SessionError::InvalidIngredients, budget);
            }
            TransitionResult::new(state.clone())
                .with_effect(Effect::LookupRecipes { ingredients })
        }

        // ============================================================
        // Lookup outcomes
        // ============================================================

        // A new result list replaces whatever the subscriber had
        (_, Event::LookupSucceeded { ingredients, recipes }) => {
            match SubscriberSession::new(recipes) {
                Some(session) => browse(session, View::Full, budget),
                None => refuse(state, SessionError::NoMatches { ingredients }, budget),
            }
        }

        // Failed lookups leave any existing session untouched
        (_, Event::LookupFailed { kind }) => refuse(state, SessionError::from(kind), budget),
    }
}

fn render_session(session: &SubscriberSession, view: View, budget: usize) -> String {
    render_recipe(
        session.current(),
        session.position(),
        session.len(),
        view,
        budget,
    )
}

/// Move to `session` and show its current result
fn browse(session: SubscriberSession, view: View, budget: usize) -> TransitionResult {
    let screen = Screen::continue_with(&render_session(&session, view, budget), budget);
    TransitionResult::new(SessionState::Browsing(session))
        .with_effect(Effect::PersistSession)
        .with_effect(Effect::reply(screen))
}

/// Keep the current state and answer with an error screen
fn refuse(state: &SessionState, error: SessionError, budget: usize) -> TransitionResult {
    TransitionResult::new(state.clone()).with_effect(Effect::reply(error.into_screen(budget)))
}
