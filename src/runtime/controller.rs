//! Session controller

use crate::input::normalize;
use crate::lookup::{LookupErrorKind, RecipeLookup};
use crate::render::Screen;
use crate::session::{KeyedLocks, SessionStore, StoreError};
use crate::state_machine::{
    transition, Command, Effect, Event, SessionContext, SessionError, SessionState,
};
use std::sync::Arc;
use std::time::Duration;

/// Turns one gateway request into one screen
pub struct SessionController {
    store: Arc<dyn SessionStore>,
    lookup: Arc<dyn RecipeLookup>,
    locks: KeyedLocks,
    screen_budget: usize,
    lookup_timeout: Duration,
}

impl SessionController {
    pub fn new(
        store: Arc<dyn SessionStore>,
        lookup: Arc<dyn RecipeLookup>,
        screen_budget: usize,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            store,
            lookup,
            locks: KeyedLocks::new(),
            screen_budget,
            lookup_timeout,
        }
    }

    /// Handle a keystroke from `subscriber`. `cumulative_input` is the
    /// gateway's full `*`-joined input for the conversation.
    pub async fn handle(&self, subscriber: &str, cumulative_input: &str) -> Screen {
        let input = normalize(cumulative_input);
        let command = Command::parse(input);
        tracing::debug!(input = %input, ?command, "Interpreted keystroke");

        // Held until the reply is ready so a duplicate request waits for
        // this one's cursor update
        let lock = self.locks.get(subscriber);
        let _guard = lock.lock().await;

        match self.process(subscriber, command).await {
            Ok(screen) => screen,
            Err(error) => {
                tracing::error!(error = %error, "Session store failed");
                SessionError::StoreUnavailable.into_screen(self.screen_budget)
            }
        }
    }

    async fn process(
        &self,
        subscriber: &str,
        command: Command,
    ) -> Result<Screen, StoreError> {
        let context = SessionContext::new(subscriber, self.screen_budget);
        let mut state = SessionState::from(self.store.get(subscriber).await?);
        let mut reply = None;

        // Lookups feed their outcome back in as another event
        let mut events = vec![Event::Keypress(command)];
        while let Some(event) = events.pop() {
            let result = transition(&state, &context, event);
            state = result.new_state;

            for effect in result.effects {
                match effect {
                    Effect::LookupRecipes { ingredients } => {
                        events.push(self.lookup(ingredients).await);
                    }
                    Effect::PersistSession => {
                        if let Some(session) = state.session() {
                            self.store.put(subscriber, session.clone()).await?;
                            tracing::debug!(
                                subscriber = %context.subscriber,
                                cursor = session.cursor(),
                                results = session.len(),
                                "Session saved"
                            );
                        }
                    }
                    Effect::Reply { screen } => reply = Some(screen),
                }
            }
        }

        Ok(reply.unwrap_or_else(|| {
            tracing::warn!("Transition chain ended without a reply");
            SessionError::UpstreamUnknown.into_screen(self.screen_budget)
        }))
    }

    async fn lookup(&self, ingredients: Vec<String>) -> Event {
        tracing::info!(ingredients = ?ingredients, "Searching for recipes");
        let outcome =
            tokio::time::timeout(self.lookup_timeout, self.lookup.find_recipes(&ingredients)).await;

        match outcome {
            Ok(Ok(recipes)) => Event::LookupSucceeded {
                ingredients,
                recipes,
            },
            Ok(Err(error)) => Event::LookupFailed { kind: error.kind },
            Err(_) => {
                tracing::warn!(
                    timeout_ms = %self.lookup_timeout.as_millis(),
                    "Recipe lookup timed out"
                );
                Event::LookupFailed {
                    kind: LookupErrorKind::Timeout,
                }
            }
        }
    }

    /// Evict idle sessions and the locks that went with them
    pub async fn sweep(&self) {
        match self.store.evict_idle().await {
            Ok(0) => {}
            Ok(evicted) => tracing::info!(evicted, "Evicted idle sessions"),
            Err(error) => tracing::error!(error = %error, "Session eviction failed"),
        }
        let pruned = self.locks.prune();
        if pruned > 0 {
            tracing::debug!(pruned, "Pruned idle subscriber locks");
        }
    }
}
