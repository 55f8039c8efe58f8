//! HTTP server for the step simulator
//!
//! Exposes a single endpoint, `POST /step/trigger`, that runs one simulated
//! step per request. Requests are served concurrently; the simulator's
//! resource locks are the only state they share.
//!
//! | Condition                       | Status |
//! |---------------------------------|--------|
//! | Step ran (Success or Failure)   | 200    |
//! | Body is not a step request      | 400    |
//! | Method other than POST          | 405    |
//! | Unknown step name               | 422    |

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{routing::post, Router};
use log::{error, info};
use steprun_core::Simulator;
use tokio::{
    net::TcpListener,
    signal::unix::{signal, SignalKind},
};

pub mod errors;
pub mod handlers;

#[cfg(test)]
mod tests;

/// Path of the step trigger endpoint
pub const TRIGGER_PATH: &str = "/step/trigger";

/// Build the router serving the step trigger endpoint.
pub fn router(simulator: Arc<Simulator>) -> Router {
    Router::new()
        .route(
            TRIGGER_PATH,
            post(handlers::trigger_step).fallback(handlers::method_not_allowed),
        )
        .with_state(simulator)
}

/// Turn a Go-style `:PORT` address into one that binds all interfaces.
pub fn bind_address(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}

/// Serve the simulator over HTTP until SIGINT or SIGTERM
pub async fn run_http_server(simulator: Simulator, addr: &str) -> Result<()> {
    let bind_addr = bind_address(addr);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    info!("Starting server on {}...", listener.local_addr()?);

    // Set up signal handlers for graceful shutdown
    let mut sigint =
        signal(SignalKind::interrupt()).context("Failed to install SIGINT handler")?;
    let mut sigterm =
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;
    let shutdown = async move {
        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down gracefully...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully...");
            }
        }
    };

    let app = router(Arc::new(simulator));
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    .inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    info!("Server done");
    Ok(())
}
