use std::time::Duration;

/// Public Piston instance hosted by the Engineer Man community.
pub const DEFAULT_API_URL: &str = "https://emkc.org/api/v2/piston";

#[derive(Debug, Clone)]
pub struct PistonConfig {
    /// Base URL of the Piston API, without the trailing `/execute`
    pub api_url: String,

    /// Timeout applied to every request
    pub timeout: Duration,
}

impl PistonConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the execute endpoint.
    pub fn execute_url(&self) -> String {
        format!("{}/execute", self.api_url.trim_end_matches('/'))
    }
}

impl Default for PistonConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
