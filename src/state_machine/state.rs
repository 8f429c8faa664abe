//! Session state types

use crate::lookup::RecipeItem;
use std::sync::Arc;

/// Per-request context handed to the transition function
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub subscriber: String,
    pub screen_budget: usize,
}

impl SessionContext {
    pub fn new(subscriber: impl Into<String>, screen_budget: usize) -> Self {
        Self {
            subscriber: subscriber.into(),
            screen_budget,
        }
    }
}

/// A subscriber's fetched results and the cursor over them.
///
/// Never empty; `cursor < results.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberSession {
    results: Arc<[RecipeItem]>,
    cursor: usize,
}

impl SubscriberSession {
    /// Start browsing at the first result. `None` for an empty list.
    pub fn new(results: Vec<RecipeItem>) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        Some(Self {
            results: results.into(),
            cursor: 0,
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// 1-indexed position of the current result
    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    pub fn current(&self) -> &RecipeItem {
        &self.results[self.cursor]
    }

    pub fn is_at_last(&self) -> bool {
        self.cursor + 1 == self.results.len()
    }

    pub fn is_at_first(&self) -> bool {
        self.cursor == 0
    }

    /// Session moved one result forward, or `None` at the last result
    pub fn advanced(&self) -> Option<Self> {
        if self.is_at_last() {
            return None;
        }
        Some(Self {
            results: Arc::clone(&self.results),
            cursor: self.cursor + 1,
        })
    }

    /// Session moved one result back, or `None` at the first result
    pub fn retreated(&self) -> Option<Self> {
        if self.is_at_first() {
            return None;
        }
        Some(Self {
            results: Arc::clone(&self.results),
            cursor: self.cursor - 1,
        })
    }
}

/// Where a subscriber is in the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    Browsing(SubscriberSession),
}

impl SessionState {
    pub fn session(&self) -> Option<&SubscriberSession> {
        match self {
            SessionState::NoSession => None,
            SessionState::Browsing(session) => Some(session),
        }
    }
}

impl From<Option<SubscriberSession>> for SessionState {
    fn from(session: Option<SubscriberSession>) -> Self {
        session.map_or(SessionState::NoSession, SessionState::Browsing)
    }
}
