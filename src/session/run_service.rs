use std::fmt;
use std::time::Duration;

use log::debug;

use crate::session::ExecutionResult;

// A request that would otherwise hang resolves to Failed instead of
// leaving the session stuck in Running.
const RUN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum RunServiceError {
    /// Request could not be sent or no response was received
    Network(String),
    /// The service answered with a non-success status
    Service { status: u16, body: String },
    /// The body did not parse into the expected shape
    MalformedResponse(String),
}

impl fmt::Display for RunServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunServiceError::Network(reason) => {
                write!(f, "could not reach the run service: {reason}")
            }
            RunServiceError::Service { status, body } => {
                if body.is_empty() {
                    write!(f, "run service returned status {status}")
                } else {
                    write!(f, "run service returned status {status}: {body}")
                }
            }
            RunServiceError::MalformedResponse(reason) => {
                write!(f, "run service response did not parse: {reason}")
            }
        }
    }
}

impl std::error::Error for RunServiceError {}

/// The one operation the playground consumes from the interpreter service.
pub trait RunService {
    fn run(&self, code: &str) -> Result<ExecutionResult, RunServiceError>;
}

pub struct HttpRunService {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpRunService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: ureq::AgentBuilder::new().timeout(RUN_TIMEOUT).build(),
        }
    }
}

impl RunService for HttpRunService {
    fn run(&self, code: &str) -> Result<ExecutionResult, RunServiceError> {
        let url = format!("{}/run", self.base_url);
        let body = serde_json::json!({ "code": code }).to_string();
        debug!("POST {url} ({} byte body)", body.len());

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&body);

        match result {
            Ok(response) => {
                let text = response
                    .into_string()
                    .map_err(|error| RunServiceError::Network(error.to_string()))?;
                parse_success_body(&text)
            }
            Err(ureq::Error::Status(status, response)) => Err(RunServiceError::Service {
                status,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(transport)) => {
                Err(RunServiceError::Network(transport.to_string()))
            }
        }
    }
}

/// Only the structured `{ "output": ..., "ast": [...] }` body is
/// supported; the old raw-text responses count as malformed.
pub fn parse_success_body(body: &str) -> Result<ExecutionResult, RunServiceError> {
    serde_json::from_str(body).map_err(|error| RunServiceError::MalformedResponse(error.to_string()))
}
