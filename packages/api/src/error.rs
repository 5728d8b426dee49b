//! # Registration failures
//!
//! Every way a registration attempt can fail collapses into one of three
//! mutually exclusive kinds:
//!
//! | Variant | Raised when | Shown to the user |
//! |---------|-------------|-------------------|
//! | [`RegisterError::ServerRejected`] | A response arrived with any status other than `201 Created` | The server's `message` field, or [`REGISTRATION_FAILED_MESSAGE`] |
//! | [`RegisterError::NoResponse`] | The request went out but no response came back | [`NETWORK_ERROR_MESSAGE`] |
//! | [`RegisterError::ClientFault`] | Anything else: a bad URL, a request that could not be built, a `201` body that does not decode | [`UNEXPECTED_ERROR_MESSAGE`] |
//!
//! The `Display` impl is the user-facing message, so `err.to_string()` is what
//! the form puts in its error banner. `ClientFault::detail` carries the
//! underlying cause for logs only.

use serde::Deserialize;

pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your internet connection.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("{message}")]
    ServerRejected { status: u16, message: String },
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    NoResponse,
    #[error("{}", UNEXPECTED_ERROR_MESSAGE)]
    ClientFault { detail: String },
}

/// Error body the backend sends alongside a non-success status.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl RegisterError {
    /// Build a `ServerRejected` from a status code and raw response body.
    ///
    /// Uses the body's `message` field when it is a non-empty string, otherwise
    /// the generic [`REGISTRATION_FAILED_MESSAGE`].
    pub fn rejected(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| REGISTRATION_FAILED_MESSAGE.to_string());
        Self::ServerRejected { status, message }
    }

    pub fn client_fault(detail: impl std::fmt::Display) -> Self {
        Self::ClientFault {
            detail: detail.to_string(),
        }
    }

    /// Short kind label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ServerRejected { .. } => "server_rejected",
            Self::NoResponse => "no_response",
            Self::ClientFault { .. } => "client_fault",
        }
    }

    /// The message the form displays.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for RegisterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return Self::client_fault(err);
        }
        if err.is_timeout() || err.is_request() || err.is_body() || is_connect(&err) {
            return Self::NoResponse;
        }
        Self::client_fault(err)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect(err: &reqwest::Error) -> bool {
    err.is_connect()
}

// Fetch failures surface as request errors on wasm; there is no connect kind.
#[cfg(target_arch = "wasm32")]
fn is_connect(_err: &reqwest::Error) -> bool {
    false
}
