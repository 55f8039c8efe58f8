//! Request handlers for the step trigger endpoint.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info};
use steprun_core::{Simulator, StepRequest};

use super::errors::ApiError;

/// Handle `POST /step/trigger`.
///
/// The body is decoded as JSON whatever its content type; any decoding
/// failure is a 400.
pub async fn trigger_step(
    State(simulator): State<Arc<Simulator>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    match peer {
        Some(ConnectInfo(addr)) => info!("[Step Handler] Received request from {addr}"),
        None => info!("[Step Handler] Received request"),
    }

    let request = StepRequest::from_json(&body)?;
    let step_name = request.step_name.clone();

    // Runs on its own task so a client hanging up cannot abort the step
    let step = tokio::spawn(async move { simulator.run_step(&request).await });
    let outcome = match step.await {
        Ok(outcome) => outcome?,
        Err(e) => {
            error!("Step '{step_name}' task failed: {e}");
            return Ok((StatusCode::INTERNAL_SERVER_ERROR, "Step task failed").into_response());
        }
    };

    match outcome.into_response() {
        Some(response) => Ok(Json(response).into_response()),
        None => {
            // Only reachable when the terminator leaves the process running
            error!("Step '{step_name}' crashed the server");
            Ok((StatusCode::INTERNAL_SERVER_ERROR, "Server crashed").into_response())
        }
    }
}

/// Any method other than POST on the trigger endpoint.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Invalid request method")
}
