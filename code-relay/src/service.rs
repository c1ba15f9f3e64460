use piston_client::{ExecuteRequest, SourceFile};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::{
    backend::ExecutionBackend,
    error::Error,
    language::Language,
    types::{ExecutionOutput, Submission},
};

/// Stateless relay between clients and the execution backend
#[derive(Clone)]
pub struct RelayService {
    backend: Arc<dyn ExecutionBackend>,
}

impl RelayService {
    pub fn new(backend: impl ExecutionBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Single-file job for `code` on the runtime pinned for `language`
    pub fn build_request(language: Language, code: &str) -> ExecuteRequest {
        let runtime = language.runtime();
        ExecuteRequest {
            language: runtime.identifier.to_string(),
            version: runtime.version.to_string(),
            files: vec![SourceFile {
                name: language.file_name(),
                content: code.to_string(),
            }],
        }
    }

    /// Run one submission and return its trimmed stdout.
    ///
    /// Any stderr output fails the submission with [`Error::Execution`],
    /// even when stdout is non-empty.
    pub async fn handle(&self, submission: &Submission) -> Result<String, Error> {
        let language: Language = submission.language.parse().map_err(|_| {
            warn!("Rejected unsupported language {:?}", submission.language);
            Error::UnsupportedLanguage(submission.language.clone())
        })?;

        debug!(
            "Relaying {} submission ({} bytes)",
            language,
            submission.code.len()
        );

        let request = Self::build_request(language, &submission.code);
        let response = self.backend.execute(&request).await.map_err(|e| {
            let err = Error::from(e);
            match &err {
                Error::Upstream { status_code, .. } => {
                    warn!("Execution service returned {}: {}", status_code, err)
                }
                _ => error!("Failed to reach execution service: {}", err),
            }
            err
        })?;

        let output = ExecutionOutput::from(response);
        if !output.stderr.is_empty() {
            debug!("{} submission wrote to stderr", language);
            return Err(Error::Execution(output.stderr));
        }

        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use piston_client::{ExecuteResponse, PistonClient, PistonConfig, StageOutput};
    use std::sync::Mutex;

    type Reply = Box<dyn Fn() -> piston_client::Result<ExecuteResponse> + Send + Sync>;

    /// Records every request and answers with a canned reply
    struct RecordingBackend {
        requests: Arc<Mutex<Vec<ExecuteRequest>>>,
        reply: Reply,
    }

    #[async_trait]
    impl ExecutionBackend for RecordingBackend {
        async fn execute(
            &self,
            request: &ExecuteRequest,
        ) -> piston_client::Result<ExecuteResponse> {
            self.requests.lock().unwrap().push(request.clone());
            (self.reply)()
        }
    }

    fn run_output(stdout: &str, stderr: &str) -> ExecuteResponse {
        ExecuteResponse {
            language: None,
            version: None,
            run: Some(StageOutput {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                ..Default::default()
            }),
            compile: None,
        }
    }

    fn service_with(reply: Reply) -> (RelayService, Arc<Mutex<Vec<ExecuteRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let backend = RecordingBackend {
            requests: requests.clone(),
            reply,
        };
        (RelayService::new(backend), requests)
    }

    fn replying(stdout: &'static str, stderr: &'static str) -> Reply {
        Box::new(move || Ok(run_output(stdout, stderr)))
    }

    #[test]
    fn test_build_request_for_every_language() {
        for language in Language::ALL {
            let request = RelayService::build_request(language, "body");
            let runtime = language.runtime();

            assert_eq!(request.language, runtime.identifier);
            assert_eq!(request.version, runtime.version);
            assert_eq!(request.files.len(), 1);
            assert_eq!(request.files[0].name, format!("main{}", runtime.extension));
            assert_eq!(request.files[0].content, "body");
        }
    }

    #[tokio::test]
    async fn test_python_hello() {
        let (service, requests) = service_with(replying("hi\n", ""));

        let message = service
            .handle(&Submission::new("print('hi')", "python"))
            .await
            .unwrap();
        assert_eq!(message, "hi");

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].language, "python");
        assert_eq!(requests[0].version, "3.10.0");
        assert_eq!(requests[0].files[0].name, "main.py");
        assert_eq!(requests[0].files[0].content, "print('hi')");
    }

    #[tokio::test]
    async fn test_language_is_case_insensitive() {
        for name in ["Python", "PYTHON", "python"] {
            let (service, requests) = service_with(replying("ok", ""));
            service.handle(&Submission::new("", name)).await.unwrap();

            let requests = requests.lock().unwrap();
            assert_eq!(requests[0], RelayService::build_request(Language::Python, ""));
        }
    }

    #[tokio::test]
    async fn test_unsupported_language_never_calls_backend() {
        for name in ["ruby", "", "c++", "Rust"] {
            let (service, requests) = service_with(replying("unreachable", ""));
            let result = service.handle(&Submission::new("x", name)).await;

            match result {
                Err(Error::UnsupportedLanguage(value)) => assert_eq!(value, name),
                other => panic!("expected unsupported language, got {:?}", other),
            }
            assert!(requests.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_stderr_wins_over_stdout() {
        let (service, _) = service_with(replying("partial output\n", "  Traceback: boom\n"));

        let result = service.handle(&Submission::new("x", "python")).await;
        match result {
            Err(Error::Execution(stderr)) => assert_eq!(stderr, "Traceback: boom"),
            other => panic!("expected execution error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_syntax_error_is_execution_error() {
        let (service, _) = service_with(replying("", "SyntaxError: Unexpected identifier"));

        let result = service
            .handle(&Submission::new("bad syntax", "javascript"))
            .await;
        assert!(
            matches!(result, Err(Error::Execution(ref s)) if s == "SyntaxError: Unexpected identifier")
        );
    }

    #[tokio::test]
    async fn test_whitespace_only_stderr_is_success() {
        let (service, _) = service_with(replying("done\n", " \n\t"));

        let message = service.handle(&Submission::new("x", "c")).await.unwrap();
        assert_eq!(message, "done");
    }

    #[tokio::test]
    async fn test_empty_output_is_empty_success() {
        let (service, _) = service_with(replying("", ""));

        let message = service.handle(&Submission::new("", "java")).await.unwrap();
        assert_eq!(message, "");
    }

    #[tokio::test]
    async fn test_upstream_error_is_mirrored() {
        let (service, _) = service_with(Box::new(|| {
            Err(piston_client::Error::Api {
                status_code: 500,
                message: Some("internal".to_string()),
            })
        }));

        let result = service.handle(&Submission::new("x", "cpp")).await;
        match result {
            Err(err @ Error::Upstream { status_code: 500, .. }) => {
                assert_eq!(err.client_message(), "internal")
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_internal_error() {
        let client = PistonClient::new(PistonConfig::new("http://127.0.0.1:1")).unwrap();
        let service = RelayService::new(client);

        let result = service.handle(&Submission::new("x", "python")).await;
        assert!(matches!(result, Err(Error::Internal(_))));
    }

    #[tokio::test]
    async fn test_concurrent_submissions_are_independent() {
        let (service, requests) = service_with(replying("same", ""));

        let mut handles = vec![];
        for language in Language::ALL {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .handle(&Submission::new("code", language.as_str()))
                    .await
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "same");
        }
        assert_eq!(requests.lock().unwrap().len(), Language::ALL.len());
    }
}
