//! Incoming step requests.

use serde::{Deserialize, Serialize};

use super::{StepKind, StepStatus};
use crate::error::Result;

/// A request to simulate one pipeline step.
///
/// `repo_path` and `commit_hash` are opaque and only echoed into the build
/// logs. The `simulate_*` fields replace the random parts of the simulation
/// when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRequest {
    pub step_name: String,
    pub repo_path: String,
    pub commit_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulate_status: Option<String>,
    /// Simulated duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulate_build_time: Option<u64>,
}

impl StepRequest {
    /// Decode a request from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::MalformedPayload` when the body is not JSON,
    /// lacks a required field, or carries a field of the wrong type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use steprun_core::StepRequest;
    ///
    /// let request = StepRequest::from_json(
    ///     br#"{"step_name":"lint","repo_path":"/r","commit_hash":"abc"}"#,
    /// )?;
    /// assert_eq!(request.step_name, "lint");
    /// assert!(request.simulate_build_time.is_none());
    /// # Ok::<(), steprun_core::SimulatorError>(())
    /// ```
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Resolve the step name into a known kind.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::InvalidStepKind` for empty or unknown names.
    pub fn kind(&self) -> Result<StepKind> {
        self.step_name.parse()
    }

    /// Status forced by the caller, if any.
    pub fn forced_status(&self) -> Option<StepStatus> {
        self.simulate_status.as_deref().map(StepStatus::from)
    }
}
