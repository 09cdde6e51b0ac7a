//! Error taxonomy shared by the validation engine, the auth API client and the
//! signup orchestrator. Every variant carries text that is safe to show to the
//! user; secrets never end up in an error message.

use thiserror::Error;

/// Generic message used when a transport failure has no better description.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Registration failed: {0}")]
    Registration(String),
    #[error("Login failed: {0}")]
    LoginAfterRegistration(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Http {
        status: u16,
        message: Option<String>,
    },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Session store error: {0}")]
    Store(String),
    #[error("A signup is already in progress.")]
    Busy,
}

impl AppError {
    /// Renders the single user-visible message slot for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(message)
            | Self::Validation(message)
            | Self::Registration(message)
            | Self::LoginAfterRegistration(message)
            | Self::Network(message)
            | Self::Timeout(message) => message.clone(),
            Self::Http { message, .. } => message
                .clone()
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            Self::Parse(_) | Self::Serialization(_) | Self::Store(_) => {
                GENERIC_FAILURE.to_string()
            }
            Self::Busy => self.to_string(),
        }
    }
}
