//! Gateway request and response types

use crate::render::Screen;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

/// Form body the USSD gateway posts on every keystroke
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UssdRequest {
    /// Gateway conversation id; logged only, sessions are keyed by phone
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub service_code: String,
    pub phone_number: String,
    /// Cumulative `*`-joined input; absent on the first request
    #[serde(default)]
    pub text: String,
}

/// Screen framed for the gateway: `CON ` keeps the menu open, `END ` closes it
#[derive(Debug)]
pub struct UssdResponse(pub Screen);

impl UssdResponse {
    pub fn body(&self) -> String {
        let prefix = if self.0.is_terminal() { "END" } else { "CON" };
        format!("{prefix} {}", self.0.text())
    }
}

impl IntoResponse for UssdResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain")],
            self.body(),
        )
            .into_response()
    }
}
