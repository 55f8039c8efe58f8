//! Build log accumulated while a step runs.

use crate::models::{StepRequest, StepStatus};

/// Newline separated build log returned to the caller.
#[derive(Debug, Default)]
pub(crate) struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Start a log with the header every step shares.
    pub(crate) fn started(request: &StepRequest) -> Self {
        let mut transcript = Self::default();
        transcript.push(format!("step '{}' build started!", request.step_name));
        transcript.push(format!("Repo path: {}", request.repo_path));
        transcript.push(format!("Commit hash: {}", request.commit_hash));
        transcript
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn waiting_for_lock(&mut self) {
        self.push("Waiting for lock...");
    }

    pub(crate) fn simulating(&mut self, step_name: &str) {
        self.push(format!("Simulating build for step '{step_name}'..."));
    }

    /// Append the closing line and render the log.
    pub(crate) fn finish(mut self, step_name: &str, status: &StepStatus) -> String {
        self.push(format!("Step '{step_name}' completed with status: {status}"));
        self.lines.join("\n")
    }
}
