use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("API error: {status_code} - {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status_code: u16,
        message: Option<String>,
    },
}
