//! # Code Relay
//!
//! Maps a `{code, language}` submission onto a Piston runtime, forwards it
//! as a single-file job and reduces the result to one client-facing message.
//! Nothing is compiled or executed locally.

mod backend;
mod error;
mod language;
mod service;
mod types;

pub use backend::ExecutionBackend;
pub use error::{Error, INTERNAL_ERROR_MESSAGE, UPSTREAM_FALLBACK_MESSAGE};
pub use language::{Language, Runtime, SUPPORTED_LANGUAGES};
pub use service::RelayService;
pub use types::{ExecutionOutput, LanguageInfo, Submission};

/// Result type for relay operations
pub type Result<T> = std::result::Result<T, Error>;
