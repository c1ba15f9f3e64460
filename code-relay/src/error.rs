use thiserror::Error;

use crate::language::SUPPORTED_LANGUAGES;

/// Shown when the downstream service fails without a message of its own
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Error from external compilation service";

/// Shown for transport failures; the cause is only logged
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Failed to process code. Please check server logs or try again.";

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Unsupported language: {0}. Supported languages are {supported}.",
        supported = SUPPORTED_LANGUAGES
    )]
    UnsupportedLanguage(String),

    /// Trimmed stderr of the submitted program
    #[error("{0}")]
    Execution(String),

    #[error("{}", .message.as_deref().unwrap_or(UPSTREAM_FALLBACK_MESSAGE))]
    Upstream {
        status_code: u16,
        message: Option<String>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Text safe to return to the client
    pub fn client_message(&self) -> String {
        match self {
            Error::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<piston_client::Error> for Error {
    fn from(err: piston_client::Error) -> Self {
        match err {
            piston_client::Error::Api {
                status_code,
                message,
            } => Error::Upstream {
                status_code,
                message: message.filter(|m| !m.is_empty()),
            },
            other => Error::Internal(other.to_string()),
        }
    }
}
