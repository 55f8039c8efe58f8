//! Simulated step outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome reported for a simulated step.
///
/// Random outcomes are always [`StepStatus::Success`] or
/// [`StepStatus::Failure`]. A status forced by the caller is echoed back
/// verbatim, so values outside those two survive as [`StepStatus::Custom`].
///
/// # Examples
///
/// ```rust
/// use steprun_core::models::StepStatus;
///
/// assert_eq!(StepStatus::from("Failure"), StepStatus::Failure);
/// assert_eq!(StepStatus::from("Flaky").as_str(), "Flaky");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepStatus {
    /// The step passed
    #[default]
    Success,

    /// The step failed
    Failure,

    /// Any other status forced by the caller
    Custom(String),
}

impl StepStatus {
    /// String representation used on the wire and in the build logs.
    pub fn as_str(&self) -> &str {
        match self {
            StepStatus::Success => "Success",
            StepStatus::Failure => "Failure",
            StepStatus::Custom(status) => status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StepStatus::Success)
    }
}

impl From<String> for StepStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Success" => StepStatus::Success,
            "Failure" => StepStatus::Failure,
            _ => StepStatus::Custom(status),
        }
    }
}

impl From<&str> for StepStatus {
    fn from(status: &str) -> Self {
        StepStatus::from(status.to_string())
    }
}

impl From<StepStatus> for String {
    fn from(status: StepStatus) -> Self {
        match status {
            StepStatus::Custom(status) => status,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
