//! HTTP client for the recipe lookup service

use super::types::{RecipeItem, RecipeQuery, RecipeRecord};
use super::{LookupError, RecipeLookup};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Recipe lookup over HTTP
pub struct HttpRecipeLookup {
    client: Client,
    endpoint: String,
}

impl HttpRecipeLookup {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| LookupError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn classify_send_error(e: &reqwest::Error) -> LookupError {
        if e.is_timeout() {
            LookupError::timeout(format!("Request timeout: {e}"))
        } else if e.is_connect() {
            LookupError::connection_refused(format!("Connection failed: {e}"))
        } else {
            LookupError::unknown(format!("Request failed: {e}"))
        }
    }
}

#[async_trait]
impl RecipeLookup for HttpRecipeLookup {
    async fn find_recipes(&self, ingredients: &[String]) -> Result<Vec<RecipeItem>, LookupError> {
        let query = RecipeQuery {
            ingredients: ingredients.to_vec(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&query)
            .send()
            .await
            .map_err(|e| Self::classify_send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Self::classify_send_error(&e))?;

        if !status.is_success() {
            return Err(LookupError::upstream(
                status.as_u16(),
                format!("HTTP {status}: {body}"),
            ));
        }

        // A `null` body is treated as no matches
        let records: Option<Vec<RecipeRecord>> = serde_json::from_str(&body).map_err(|e| {
            LookupError::unknown(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        Ok(records
            .unwrap_or_default()
            .into_iter()
            .map(RecipeItem::from)
            .collect())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
