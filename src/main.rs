//! Recipe USSD gateway
//!
//! Serves the text-menu recipe browser behind a USSD gateway callback.
//! Subscribers type ingredients, the gateway posts each keystroke here, and
//! matching recipes are paged one screen at a time.

mod api;
mod config;
mod input;
mod lookup;
mod render;
mod runtime;
mod session;
mod state_machine;

use api::{create_router, AppState};
use config::GatewayConfig;
use lookup::{HttpRecipeLookup, LoggingLookup};
use runtime::SessionController;
use session::InMemorySessionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_ussd=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();

    let config = GatewayConfig::from_env();

    // Recipe lookup, wrapped for per-call logging
    let endpoint = config.recipes_endpoint();
    let http = HttpRecipeLookup::new(endpoint.clone(), config.lookup_timeout)?;
    let lookup = Arc::new(LoggingLookup::new(Arc::new(http)));

    let store = Arc::new(InMemorySessionStore::new(config.session_ttl));
    let controller = Arc::new(SessionController::new(
        store,
        lookup,
        config.screen_budget,
        config.lookup_timeout,
    ));

    // Idle session eviction
    let sweeper = Arc::clone(&controller);
    let sweep_interval = config.sweep_interval;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            sweeper.sweep().await;
        }
    });

    let app = create_router(AppState::new(controller)).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        %addr,
        lookup = %endpoint,
        screen_budget = config.screen_budget,
        session_ttl_secs = config.session_ttl.as_secs(),
        "Recipe USSD gateway listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
