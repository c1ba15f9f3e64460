//! # Piston Client
//!
//! A small typed client for the Piston code execution API
//! (`POST {api_url}/execute`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use piston_client::{ExecuteRequest, PistonClient, PistonConfig, SourceFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PistonClient::new(PistonConfig::default())?;
//!
//!     let request = ExecuteRequest {
//!         language: "python".to_string(),
//!         version: "3.10.0".to_string(),
//!         files: vec![SourceFile {
//!             name: "main.py".to_string(),
//!             content: "print('hi')".to_string(),
//!         }],
//!     };
//!
//!     let response = client.execute(&request).await?;
//!     println!("{}", response.run.unwrap_or_default().stdout);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Non-2xx responses surface as [`Error::Api`] carrying the status code and
//! the `message` field of the response body when the service sent one.
//! Transport and decoding failures surface as [`Error::HttpClient`].

mod client;
mod config;
mod error;
mod types;

pub use client::PistonClient;
pub use config::{PistonConfig, DEFAULT_API_URL};
pub use error::Error;
pub use types::*;

/// Result type for Piston API operations
pub type Result<T> = std::result::Result<T, Error>;
