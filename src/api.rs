//! HTTP surface for the USSD gateway

mod handlers;
mod types;

pub use handlers::create_router;

use crate::runtime::SessionController;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<SessionController>,
}

impl AppState {
    pub fn new(controller: Arc<SessionController>) -> Self {
        Self { controller }
    }
}
