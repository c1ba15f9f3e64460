use async_trait::async_trait;
use piston_client::{ExecuteRequest, ExecuteResponse, PistonClient};

/// The one outbound call a submission makes
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    async fn execute(&self, request: &ExecuteRequest) -> piston_client::Result<ExecuteResponse>;
}

#[async_trait]
impl ExecutionBackend for PistonClient {
    async fn execute(&self, request: &ExecuteRequest) -> piston_client::Result<ExecuteResponse> {
        PistonClient::execute(self, request).await
    }
}
