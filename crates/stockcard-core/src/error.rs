//! Error types for stockcard-core

use thiserror::Error;

/// Result type alias for stockcard-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for refresh operations
///
/// Fetch and mapping failures never show up here: the controller turns them
/// into an error view. Only failures of the display channel itself escape.
#[derive(Error, Debug)]
pub enum Error {
    /// The presenter could not create or replace the displayed view
    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

/// Why a data source could not produce a usable payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Remote API unreachable or answered with a non-success status
    #[error("{}", describe_transport(.status, .message))]
    Transport {
        /// HTTP status code, when a response was received
        status: Option<u16>,
        /// Human readable detail
        message: String,
    },

    /// Response parsed but lacks what is needed to build a view
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl FailureReason {
    /// Remote API answered with a non-success status
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Remote API could not be reached at all
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Payload is missing required fields
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }
}

#[allow(clippy::ref_option)]
fn describe_transport(status: &Option<u16>, message: &str) -> String {
    match (*status, message.is_empty()) {
        (Some(code), true) => format!("API request failed with status {code}"),
        (Some(code), false) => format!("API request failed with status {code}: {message}"),
        (None, _) => format!("API request failed: {message}"),
    }
}

/// Errors raised by the host platform's message channel
#[derive(Error, Debug)]
pub enum PresentationError {
    /// Host platform could not be reached
    #[error("Host platform unreachable: {0}")]
    Unreachable(String),

    /// Host platform refused the request
    #[error("Host platform rejected the request with status {status}: {message}")]
    Rejected {
        /// HTTP status code returned by the platform
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// The message handle is no longer valid (interaction expired, message deleted)
    #[error("Message handle expired: {0}")]
    HandleExpired(String),

    /// The platform answered with something the presenter could not understand
    #[error("Invalid platform response: {0}")]
    InvalidResponse(String),
}
