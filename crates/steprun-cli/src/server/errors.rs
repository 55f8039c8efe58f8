//! Error handling utilities for the HTTP server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use steprun_core::SimulatorError;

/// A simulator error on its way back to an HTTP client.
#[derive(Debug)]
pub struct ApiError(pub SimulatorError);

impl From<SimulatorError> for ApiError {
    fn from(error: SimulatorError) -> Self {
        Self(error)
    }
}

impl ApiError {
    /// Malformed bodies and unknown steps are kept apart so clients can tell
    /// them from each other.
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            SimulatorError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            SimulatorError::InvalidStepKind { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.0.to_string()).into_response()
    }
}
