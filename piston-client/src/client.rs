use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    config::PistonConfig,
    error::Error,
    types::{ApiErrorBody, ExecuteRequest, ExecuteResponse},
};

/// Client for the Piston execute endpoint
#[derive(Debug, Clone)]
pub struct PistonClient {
    client: Client,
    config: PistonConfig,
}

impl PistonClient {
    /// Create a new PistonClient with the given configuration
    pub fn new(config: PistonConfig) -> Result<Self, Error> {
        if !(config.api_url.starts_with("http://") || config.api_url.starts_with("https://")) {
            return Err(Error::Configuration(format!(
                "API URL must be an http(s) URL, got {:?}",
                config.api_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &PistonConfig {
        &self.config
    }

    /// Submit one execution job and wait for its result
    pub async fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResponse, Error> {
        debug!(
            "Submitting {} {} job to {}",
            request.language, request.version, self.config.api_url
        );

        let response = self
            .client
            .post(self.config.execute_url())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|body| body.message);
            warn!("Piston API returned {}: {}", status, body);

            return Err(Error::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        response
            .json::<ExecuteResponse>()
            .await
            .map_err(Error::HttpClient)
    }
}
