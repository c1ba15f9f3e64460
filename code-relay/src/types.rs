use piston_client::ExecuteResponse;
use serde::{Deserialize, Deserializer, Serialize};

use crate::language::Language;

/// Code execution submission as received from the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    /// Source code, forwarded verbatim
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    /// Language name, matched case-insensitively
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,
}

impl Submission {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }
}

/// Trimmed stdout/stderr of the stage that produced the program's output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOutput {
    pub stdout: String,
    pub stderr: String,
}

impl From<ExecuteResponse> for ExecutionOutput {
    fn from(response: ExecuteResponse) -> Self {
        // No run stage means compilation failed; its stderr is what the user needs.
        let stage = response.run.or(response.compile).unwrap_or_default();

        Self {
            stdout: stage.stdout.trim().to_string(),
            stderr: stage.stderr.trim().to_string(),
        }
    }
}

/// Entry of the supported-languages listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub language: String,
    pub version: String,
    pub file_name: String,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            language: language.to_string(),
            version: language.runtime().version.to_string(),
            file_name: language.file_name(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
