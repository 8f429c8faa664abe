//! HTTP request handlers

use super::types::{UssdRequest, UssdResponse};
use super::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use tracing::Instrument;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Gateway callback, one request per keystroke
        .route("/ussd", post(ussd_callback))
        .route("/healthz", get(health))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// USSD Callback
// ============================================================

async fn ussd_callback(
    State(state): State<AppState>,
    Form(request): Form<UssdRequest>,
) -> Result<UssdResponse, AppError> {
    let subscriber = request.phone_number.trim();
    if subscriber.is_empty() {
        return Err(AppError::BadRequest("phoneNumber is required".to_string()));
    }

    let span = tracing::info_span!(
        "ussd",
        request_id = %uuid::Uuid::new_v4(),
        subscriber = %subscriber,
        gateway_session = %request.session_id,
        service_code = %request.service_code,
    );

    let screen = async {
        let screen = state.controller.handle(subscriber, &request.text).await;
        tracing::info!(terminal = screen.is_terminal(), "Replying to gateway");
        screen
    }
    .instrument(span)
    .await;

    Ok(UssdResponse(screen))
}

async fn health() -> &'static str {
    "ok"
}

async fn get_version() -> &'static str {
    concat!("recipe-ussd ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, message).into_response()
    }
}
