//! Results of a simulated step.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StepStatus;

/// Response returned for a step that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResponse {
    /// Newline separated log of every stage of the simulated work
    pub build_logs: String,
    pub status: StepStatus,
    /// Wall-clock time spent on the whole request, lock waits included
    pub duration_ms: u64,
}

/// What the simulator did with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step finished and produced a response
    Completed(StepResponse),

    /// The step brought the process down; there is no response to send
    Crashed,
}

impl StepOutcome {
    /// The response, unless the step crashed.
    pub fn into_response(self) -> Option<StepResponse> {
        match self {
            StepOutcome::Completed(response) => Some(response),
            StepOutcome::Crashed => None,
        }
    }
}

impl fmt::Display for StepResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.build_logs)?;
        write!(f, "Status: {} ({} ms)", self.status, self.duration_ms)
    }
}
