//! Effects produced by state transitions

use crate::render::Screen;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the recipe service; the outcome comes back as an event
    LookupRecipes { ingredients: Vec<String> },

    /// Write the new session to the store
    PersistSession,

    /// Answer the gateway request
    Reply { screen: Screen },
}

impl Effect {
    pub fn reply(screen: Screen) -> Self {
        Effect::Reply { screen }
    }
}
