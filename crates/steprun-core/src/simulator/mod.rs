//! The step simulator.
//!
//! [`Simulator::run_step`] pretends to run one CI pipeline step. It never
//! touches the repository it is told about; it only sleeps, picks an
//! outcome and reports what it did.
//!
//! # Resource gating
//!
//! `build` and `test` steps each own a single execution slot
//! ([`ResourceLocks`]). A step that finds its slot busy notes
//! `Waiting for lock...` in its log and waits, without a timeout, until the
//! slot frees up. Steps of different kinds never wait for each other, and
//! `lint` steps never wait at all.
//!
//! ```text
//!  lint  ──────────────────────────▶ sleep ─▶ Success
//!  build ─▶ [build slot] ─▶ sleep ─▶ outcome ─▶ release
//!  test  ─▶ [test slot]  ─▶ sleep ─▶ outcome ─▶ release ─▶ 1 in 5: crash
//! ```
//!
//! # Usage
//!
//! ```rust
//! use steprun_core::{SimulatorBuilder, SimulatorConfig, StepRequest, StepStatus};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let simulator = SimulatorBuilder::new()
//!     .with_config(SimulatorConfig::without_crashes())
//!     .build();
//!
//! let request = StepRequest {
//!     step_name: "build".to_string(),
//!     repo_path: "/r".to_string(),
//!     commit_hash: "abc123".to_string(),
//!     simulate_status: Some("Failure".to_string()),
//!     simulate_build_time: Some(10),
//! };
//!
//! let response = simulator
//!     .run_step(&request)
//!     .await?
//!     .into_response()
//!     .expect("crashes are disabled");
//! assert_eq!(response.status, StepStatus::Failure);
//! assert!(response.duration_ms >= 10);
//! # Ok(())
//! # }
//! ```

use std::{sync::Arc, time::Duration};

use log::{debug, error, log, Level};

pub mod builder;
pub mod capabilities;
pub mod resources;
mod transcript;


pub use builder::SimulatorBuilder;
pub use capabilities::{
    ProcessExit, RandomSource, SeededRandom, Terminator, ThreadRandom, Timer, TokioTimer,
};
pub use resources::{Acquisition, ResourceGate, ResourceLocks};

use self::transcript::Transcript;
use crate::{
    config::{SimulatorConfig, CRASH_ODDS},
    error::Result,
    models::{StepKind, StepOutcome, StepRequest, StepResponse, StepStatus},
};

/// Simulates CI pipeline steps against a private pair of resource locks.
pub struct Simulator {
    pub(crate) config: SimulatorConfig,
    pub(crate) locks: ResourceLocks,
    pub(crate) random: Arc<dyn RandomSource>,
    pub(crate) timer: Arc<dyn Timer>,
    pub(crate) terminator: Arc<dyn Terminator>,
}

impl Simulator {
    /// Run one simulated step.
    ///
    /// Blocks while another step of the same kind holds the resource lock,
    /// then sleeps for the simulated duration. The reported `duration_ms`
    /// covers the whole call, including time spent waiting for the lock.
    ///
    /// For `test` steps with crashes enabled, one call in five invokes the
    /// [`Terminator`] after releasing the lock and returns
    /// [`StepOutcome::Crashed`].
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::InvalidStepKind` if the step name is not
    /// `lint`, `build` or `test`. No lock is touched in that case.
    pub async fn run_step(&self, request: &StepRequest) -> Result<StepOutcome> {
        let kind = request.kind().inspect_err(|_| {
            error!("Unknown step provided: '{}'", request.step_name);
        })?;

        let started = self.timer.now();
        let mut transcript = Transcript::started(request);
        transcript.push(kind.progress_line());
        debug!(
            "Running {kind} step for {} at {}",
            request.repo_path, request.commit_hash
        );

        let status = match self.locks.gate(kind) {
            Some(gate) => self.run_gated(kind, gate, request, &mut transcript).await,
            None => {
                self.sleep_ms(self.random_delay(kind)).await;
                StepStatus::Success
            }
        };

        if kind == StepKind::Test && self.should_crash() {
            self.terminator.terminate();
            return Ok(StepOutcome::Crashed);
        }

        let elapsed = self.timer.now().saturating_duration_since(started);
        let response = StepResponse {
            build_logs: transcript.finish(&request.step_name, &status),
            status,
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        };
        let level = if response.status.is_success() {
            Level::Info
        } else {
            Level::Warn
        };
        log!(
            level,
            "Step '{}' completed with status {} in {} ms",
            request.step_name,
            response.status,
            response.duration_ms
        );
        debug!("{response}");

        Ok(StepOutcome::Completed(response))
    }

    /// Resource locks owned by this simulator.
    pub fn locks(&self) -> &ResourceLocks {
        &self.locks
    }

    pub fn config(&self) -> SimulatorConfig {
        self.config
    }

    /// Simulate a build or test step while holding its resource lock.
    async fn run_gated(
        &self,
        kind: StepKind,
        gate: &ResourceGate,
        request: &StepRequest,
        transcript: &mut Transcript,
    ) -> StepStatus {
        let delay_ms = request
            .simulate_build_time
            .unwrap_or_else(|| self.random_delay(kind));

        let acquisition = gate.acquire().await;
        if acquisition.waited() {
            transcript.waiting_for_lock();
        }

        transcript.simulating(&request.step_name);
        self.sleep_ms(delay_ms).await;

        request
            .forced_status()
            .unwrap_or_else(|| self.random_status())
    }

    fn random_delay(&self, kind: StepKind) -> u64 {
        self.random.below(kind.max_random_delay_ms())
    }

    fn random_status(&self) -> StepStatus {
        if self.random.below(2) == 0 {
            StepStatus::Failure
        } else {
            StepStatus::Success
        }
    }

    fn should_crash(&self) -> bool {
        self.config.crash_enabled && self.random.below(CRASH_ODDS) == 0
    }

    async fn sleep_ms(&self, delay_ms: u64) {
        self.timer.sleep(Duration::from_millis(delay_ms)).await;
    }
}
