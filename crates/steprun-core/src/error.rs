//! Error types for the step simulator.

use thiserror::Error;

/// Errors a caller can get back from the simulator.
///
/// A simulated crash is deliberately absent: it is reported as
/// [`crate::StepOutcome::Crashed`] rather than an error.
#[derive(Error, Debug)]
pub enum SimulatorError {
    /// The step name is not one of `lint`, `build` or `test`
    #[error("Unknown step '{name}'!")]
    InvalidStepKind { name: String },
    /// The request body could not be decoded into a step request
    #[error("Malformed payload: {source}")]
    MalformedPayload {
        #[from]
        source: serde_json::Error,
    },
}

impl SimulatorError {
    /// Creates an unknown step error for the given name.
    pub fn invalid_step(name: impl Into<String>) -> Self {
        Self::InvalidStepKind { name: name.into() }
    }
}

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;
