use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Human-readable list used in unsupported-language messages
pub const SUPPORTED_LANGUAGES: &str = "JavaScript, Python, Java, C, C++";

/// Languages accepted by the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Java,
    C,
    Cpp,
}

/// A Piston runtime pinned to an exact version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runtime {
    pub identifier: &'static str,
    pub version: &'static str,
    /// Source file extension, including the dot
    pub extension: &'static str,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::C,
        Language::Cpp,
    ];

    pub fn runtime(&self) -> Runtime {
        match self {
            Language::JavaScript => Runtime {
                identifier: "javascript",
                version: "18.15.0",
                extension: ".js",
            },
            Language::Python => Runtime {
                identifier: "python",
                version: "3.10.0",
                extension: ".py",
            },
            Language::Java => Runtime {
                identifier: "java",
                version: "15.0.2",
                extension: ".java",
            },
            Language::C => Runtime {
                identifier: "c",
                version: "10.2.0",
                extension: ".c",
            },
            Language::Cpp => Runtime {
                identifier: "cpp",
                version: "10.2.0",
                extension: ".cpp",
            },
        }
    }

    /// Name of the single source file sent downstream
    pub fn file_name(&self) -> String {
        format!("main{}", self.runtime().extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" => Ok(Language::JavaScript),
            "python" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "c" => Ok(Language::C),
            "cpp" => Ok(Language::Cpp),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
