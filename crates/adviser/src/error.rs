//! Adviser error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdviserError {
    /// A reply is still pending for the previous message.
    #[error("A request is already in flight")]
    RequestInFlight,

    /// No API key configured for the HTTP provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Transport failure reaching the provider.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The provider answered with an error payload.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider answered with something we could not read.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdviserError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            AdviserError::RequestInFlight => "REQUEST_IN_FLIGHT",
            AdviserError::MissingApiKey(_) => "MISSING_API_KEY",
            AdviserError::Transport(_) => "TRANSPORT_ERROR",
            AdviserError::Provider(_) => "PROVIDER_ERROR",
            AdviserError::InvalidResponse(_) => "INVALID_RESPONSE",
            AdviserError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<reqwest::Error> for AdviserError {
    fn from(err: reqwest::Error) -> Self {
        AdviserError::Transport(err.to_string())
    }
}
