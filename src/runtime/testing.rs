//! Mock implementations for testing
//!
//! These mocks enable controller and API tests without a recipe service.

use crate::lookup::{LookupError, RecipeItem, RecipeLookup};
use crate::session::{SessionStore, StoreError};
use crate::state_machine::SubscriberSession;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

// ============================================================================
// Mock Recipe Lookup
// ============================================================================

/// Mock lookup that returns queued responses
pub struct MockRecipeLookup {
    responses: Mutex<VecDeque<Result<Vec<RecipeItem>, LookupError>>>,
    delay: Option<Duration>,
    /// Ingredient lists of every call, in order
    pub requests: Mutex<Vec<Vec<String>>>,
}

impl MockRecipeLookup {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sleep before answering, to exercise timeouts
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a successful response
    pub fn queue_recipes(&self, recipes: Vec<RecipeItem>) {
        self.responses.lock().unwrap().push_back(Ok(recipes));
    }

    /// Queue an error response
    pub fn queue_error(&self, error: LookupError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockRecipeLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeLookup for MockRecipeLookup {
    async fn find_recipes(&self, ingredients: &[String]) -> Result<Vec<RecipeItem>, LookupError> {
        self.requests.lock().unwrap().push(ingredients.to_vec());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LookupError::unknown("No mock response queued")))
    }

    fn endpoint(&self) -> &str {
        "mock://recipes"
    }
}

// ============================================================================
// Failing Session Store
// ============================================================================

/// Store whose every call fails, for error-path tests
pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn get(&self, _key: &str) -> Result<Option<SubscriberSession>, StoreError> {
        Err(StoreError("cache offline".to_string()))
    }

    async fn put(&self, _key: &str, _session: SubscriberSession) -> Result<(), StoreError> {
        Err(StoreError("cache offline".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<Option<SubscriberSession>, StoreError> {
        Err(StoreError("cache offline".to_string()))
    }

    async fn evict_idle(&self) -> Result<usize, StoreError> {
        Err(StoreError("cache offline".to_string()))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A recipe named `name` with `count` short ingredient lines
pub fn recipe_with_ingredients(name: &str, count: usize) -> RecipeItem {
    RecipeItem {
        name: Some(name.to_string()),
        description: Some("Test dish".to_string()),
        origin: Some("Ghana".to_string()),
        ingredient_lines: (1..=count).map(|i| format!("item {i}")).collect(),
    }
}
