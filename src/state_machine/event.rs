//! Events that drive the session state machine

use crate::lookup::{LookupErrorKind, RecipeItem};

/// What the subscriber's latest keystroke means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty input, first screen of a conversation
    Prompt,
    /// `1`
    Next,
    /// `2`
    Previous,
    /// `99`
    Detail,
    /// Anything else is an ingredient query
    Query(String),
}

impl Command {
    /// Interpret a normalized keystroke segment.
    ///
    /// `1`, `2` and `99` are always control codes, so they cannot be
    /// searched for as ingredients.
    pub fn parse(normalized: &str) -> Self {
        match normalized {
            "" => Command::Prompt,
            "1" => Command::Next,
            "2" => Command::Previous,
            "99" => Command::Detail,
            query => Command::Query(query.to_string()),
        }
    }
}

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    Keypress(Command),
    LookupSucceeded {
        ingredients: Vec<String>,
        recipes: Vec<RecipeItem>,
    },
    LookupFailed {
        kind: LookupErrorKind,
    },
}
