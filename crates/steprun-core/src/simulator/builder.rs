//! Builder for creating and configuring Simulator instances.

use std::sync::Arc;

use super::{
    capabilities::{ProcessExit, RandomSource, Terminator, ThreadRandom, Timer, TokioTimer},
    resources::ResourceLocks,
    Simulator,
};
use crate::config::SimulatorConfig;

/// Builder for creating and configuring Simulator instances.
///
/// Every capability defaults to its production implementation, so
/// `SimulatorBuilder::new().build()` gives a simulator that really sleeps,
/// draws from the thread RNG and exits the process on a simulated crash.
#[derive(Clone)]
pub struct SimulatorBuilder {
    config: SimulatorConfig,
    random: Option<Arc<dyn RandomSource>>,
    timer: Option<Arc<dyn Timer>>,
    terminator: Option<Arc<dyn Terminator>>,
}

impl SimulatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: SimulatorConfig::default(),
            random: None,
            timer: None,
            terminator: None,
        }
    }

    pub fn with_config(mut self, config: SimulatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the source used for random delays, outcomes and crashes.
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = Some(random);
        self
    }

    /// Sets the clock used to simulate and measure work.
    pub fn with_timer(mut self, timer: Arc<dyn Timer>) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Sets what happens when a test step crashes.
    pub fn with_terminator(mut self, terminator: Arc<dyn Terminator>) -> Self {
        self.terminator = Some(terminator);
        self
    }

    /// Builds the configured simulator with a fresh pair of resource locks.
    pub fn build(self) -> Simulator {
        Simulator {
            config: self.config,
            locks: ResourceLocks::new(),
            random: self.random.unwrap_or_else(|| Arc::new(ThreadRandom)),
            timer: self.timer.unwrap_or_else(|| Arc::new(TokioTimer)),
            terminator: self.terminator.unwrap_or_else(|| Arc::new(ProcessExit)),
        }
    }
}

impl Default for SimulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
