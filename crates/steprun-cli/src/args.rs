use clap::Parser;
use steprun_core::config::CRASHABLE_ENV;

/// Address used when neither `--addr` nor the environment provides one.
pub const DEFAULT_SERVER_ADDR: &str = ":8080";

/// Environment variable holding the listen address
pub const SERVER_ADDR_ENV: &str = "ORCA_STEP_RUNNER_SERVER_ADDR";

/// HTTP service that pretends to run CI pipeline steps
///
/// Accepts `POST /step/trigger` with a JSON step description, sleeps for a
/// simulated build time while holding the build or test slot, and answers
/// with synthetic logs, a status and the elapsed time. Test steps crash the
/// whole process one time in five unless crashes are disabled.
#[derive(Parser, Debug)]
#[command(version, about, name = "steprun")]
pub struct Args {
    /// Address to listen on, `:8080` when unset or empty. A bare `:PORT`
    /// listens on all interfaces
    #[arg(long, env = SERVER_ADDR_ENV)]
    pub addr: Option<String>,

    /// Set to `false` to stop test steps from crashing the server. Any other
    /// value keeps crashes enabled
    #[arg(long, env = CRASHABLE_ENV)]
    pub crashable: Option<String>,
}

impl Args {
    /// The address to listen on. An empty value counts as unset.
    pub fn listen_addr(&self) -> &str {
        self.addr
            .as_deref()
            .filter(|addr| !addr.is_empty())
            .unwrap_or(DEFAULT_SERVER_ADDR)
    }
}
