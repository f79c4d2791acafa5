// Error types for folio.
// Transport and relay failures are internal; callers see FetchError and SubmitError.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Relay error: {0}")]
    Relay(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to load remote data, as shown to the user.
///
/// The underlying cause is logged where it happens and never carried here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    #[error("Unable to load profile. Please try again later.")]
    Profile,

    #[error("Unable to load projects. Please try again later.")]
    Repositories,
}

/// Failure to deliver a contact message, as shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SubmitError {
    message: String,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
