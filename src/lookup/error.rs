//! Lookup error types

use thiserror::Error;

/// Lookup failure with classification
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LookupError {
    pub kind: LookupErrorKind,
    pub message: String,
}

impl LookupError {
    pub fn new(kind: LookupErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connection_refused(message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::ConnectionRefused, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::Timeout, message)
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::UpstreamError { status }, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::Unknown, message)
    }
}

/// Error classification surfaced to the session controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// Recipe service not reachable
    ConnectionRefused,
    /// No response within the configured timeout
    Timeout,
    /// Recipe service answered with a non-success status
    UpstreamError { status: u16 },
    /// Anything else, including undecodable bodies
    Unknown,
}

impl LookupErrorKind {
    /// Short label for structured logs
    pub fn label(self) -> &'static str {
        match self {
            Self::ConnectionRefused => "connection_refused",
            Self::Timeout => "timeout",
            Self::UpstreamError { .. } => "upstream_error",
            Self::Unknown => "unknown",
        }
    }

    /// HTTP status for upstream error responses
    pub fn status(self) -> Option<u16> {
        match self {
            Self::UpstreamError { status } => Some(status),
            _ => None,
        }
    }
}
