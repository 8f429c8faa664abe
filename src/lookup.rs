//! Recipe lookup abstraction
//!
//! The session controller only sees the [`RecipeLookup`] trait. The HTTP
//! client is the production implementation.

mod error;
mod http;
mod types;

pub use error::{LookupError, LookupErrorKind};
pub use http::HttpRecipeLookup;
pub use types::RecipeItem;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for recipe sources
#[async_trait]
pub trait RecipeLookup: Send + Sync {
    /// Find recipes that use the given ingredients
    async fn find_recipes(&self, ingredients: &[String]) -> Result<Vec<RecipeItem>, LookupError>;

    /// Where requests go, for logs
    fn endpoint(&self) -> &str;
}

#[async_trait]
impl<T: RecipeLookup + ?Sized> RecipeLookup for Arc<T> {
    async fn find_recipes(&self, ingredients: &[String]) -> Result<Vec<RecipeItem>, LookupError> {
        (**self).find_recipes(ingredients).await
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}

/// Logging wrapper for recipe lookups
pub struct LoggingLookup {
    inner: Arc<dyn RecipeLookup>,
}

impl LoggingLookup {
    pub fn new(inner: Arc<dyn RecipeLookup>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecipeLookup for LoggingLookup {
    async fn find_recipes(&self, ingredients: &[String]) -> Result<Vec<RecipeItem>, LookupError> {
        let start = std::time::Instant::now();
        let result = self.inner.find_recipes(ingredients).await;
        let duration = start.elapsed();

        match &result {
            Ok(items) => {
                tracing::info!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    ingredients = ?ingredients,
                    recipes = items.len(),
                    "Recipe lookup completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    error = %e.message,
                    kind = e.kind.label(),
                    status = ?e.kind.status(),
                    "Recipe lookup failed"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }
}
