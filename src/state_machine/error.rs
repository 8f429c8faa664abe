//! User-facing session errors
//!
//! The `Display` text of each variant is exactly what the handset shows.

use crate::lookup::LookupErrorKind;
use crate::render::Screen;
use std::fmt;
use thiserror::Error;

/// Which end of the result list was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    First,
    Last,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::First => {
                write!(f, "You are at the first recipe.\nPress 1 to see the next recipe.")
            }
            Boundary::Last => write!(
                f,
                "You have reached the last recipe.\nPress 2 to go to the previous recipe."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please enter at least one valid ingredient.")]
    InvalidIngredients,

    #[error("No active session. Please enter ingredients to start.")]
    NoActiveSession,

    #[error("{0}")]
    BoundaryReached(Boundary),

    #[error(
        "Sorry, no recipes found for the ingredients ({}). Please try different ingredients.",
        .ingredients.join(", ")
    )]
    NoMatches { ingredients: Vec<String> },

    #[error("Recipe service is not available. Please try again later.")]
    UpstreamUnavailable,

    #[error("Request timed out. Please try again.")]
    UpstreamTimeout,

    #[error("Recipe service error. Please try again later.")]
    UpstreamErrorResponse,

    #[error("Sorry, we couldn't fetch the recipes at the moment. Please try again later.")]
    UpstreamUnknown,

    #[error("Sorry, something went wrong. Please try again later.")]
    StoreUnavailable,
}

impl SessionError {
    /// Whether the conversation ends on this error. Only boundary notices
    /// keep it open.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionError::BoundaryReached(_))
    }

    pub fn into_screen(self, budget: usize) -> Screen {
        let text = self.to_string();
        if self.is_terminal() {
            Screen::terminate_with(&text, budget)
        } else {
            Screen::continue_with(&text, budget)
        }
    }
}

impl From<LookupErrorKind> for SessionError {
    fn from(kind: LookupErrorKind) -> Self {
        match kind {
            LookupErrorKind::ConnectionRefused => SessionError::UpstreamUnavailable,
            LookupErrorKind::Timeout => SessionError::UpstreamTimeout,
            LookupErrorKind::UpstreamError { .. } => SessionError::UpstreamErrorResponse,
            LookupErrorKind::Unknown => SessionError::UpstreamUnknown,
        }
    }
}
