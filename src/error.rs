use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Relay(#[from] code_relay::Error),
    #[error("Invalid request body: {0}")]
    BadRequest(String),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Relay(code_relay::Error::UnsupportedLanguage(_))
            | ServerError::Relay(code_relay::Error::Execution(_))
            | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Only mirror statuses that are errors on the wire as well.
            ServerError::Relay(code_relay::Error::Upstream { status_code, .. }) => {
                match StatusCode::from_u16(*status_code) {
                    Ok(status) if status.is_client_error() || status.is_server_error() => status,
                    _ => StatusCode::BAD_GATEWAY,
                }
            }
            ServerError::Relay(code_relay::Error::Internal(_))
            | ServerError::Configuration(_)
            | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ServerError::Relay(err) => err.client_message(),
            ServerError::BadRequest(msg) => msg.clone(),
            ServerError::Configuration(_) | ServerError::Io(_) => {
                error!("Unexpected server error: {}", self);
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
