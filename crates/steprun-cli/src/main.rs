//! Steprun CLI Application
//!
//! Runs the CI step simulator behind an HTTP endpoint.

mod args;
mod server;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use steprun_core::{SimulatorBuilder, SimulatorConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = SimulatorConfig::from_crashable_flag(args.crashable.as_deref());
    if !config.crash_enabled {
        info!("Simulated crashes are disabled");
    }
    let simulator = SimulatorBuilder::new().with_config(config).build();

    server::run_http_server(simulator, args.listen_addr())
        .await
        .context("HTTP server failed")
}
