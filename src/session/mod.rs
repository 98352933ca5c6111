pub mod run_service;

use crate::ast::Statement;
use crate::session::run_service::RunServiceError;

use log::{debug, warn};
use serde::Deserialize;

/// What one successful run produces: the program output plus the syntax
/// tree the interpreter parsed. Superseded wholesale by the next run.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub output: String,
    #[serde(default)]
    pub ast: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Running,
    Succeeded(ExecutionResult),
    Failed(String),
}

/// A submission packaged for the run service. The id only exists so the
/// log can show which request a completion belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub id: u64,
    pub code: String,
}

/// Submit → await → display, as an explicit state value. Transitions are
/// methods; no ambient mutable fields, so the machine is testable without
/// a network or a rendering surface.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    in_flight: usize,
    next_id: u64,
    last_settled: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            in_flight: 0,
            next_id: 1,
            last_settled: 0,
        }
    }

    /// Package `code` into a request and move to Running. Allowed from any
    /// state; a run submitted while another is in flight just adds a second
    /// outstanding request.
    pub fn submit(&mut self, code: impl Into<String>) -> RunRequest {
        let request = RunRequest {
            id: self.next_id,
            code: code.into(),
        };
        self.next_id += 1;
        self.in_flight += 1;
        self.state = SessionState::Running;
        debug!(
            "run #{} submitted ({} in flight)",
            request.id, self.in_flight
        );
        request
    }

    /// Settle on a completed request. The response that arrives last wins,
    /// even when an earlier submission completes after a later one; stale
    /// responses are applied, not discarded.
    pub fn on_response(&mut self, id: u64, outcome: Result<ExecutionResult, RunServiceError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if id < self.last_settled {
            warn!(
                "run #{id} completed after run #{}; displaying run #{id}",
                self.last_settled
            );
        }
        self.last_settled = self.last_settled.max(id);

        self.state = match outcome {
            Ok(result) => {
                debug!("run #{id} succeeded ({} bytes of output)", result.output.len());
                SessionState::Succeeded(result)
            }
            // A failed run clears the previous result; only the reason is kept
            Err(error) => {
                debug!("run #{id} failed: {error}");
                SessionState::Failed(error.to_string())
            }
        };
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running)
    }

    pub fn result(&self) -> Option<&ExecutionResult> {
        match &self.state {
            SessionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
