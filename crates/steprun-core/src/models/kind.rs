//! The kinds of pipeline steps the simulator knows how to run.

use std::{fmt, str::FromStr};

use crate::error::SimulatorError;

/// Type-safe enumeration of simulated step kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Short, ungated step that always succeeds
    Lint,

    /// Step gated by the build resource lock
    Build,

    /// Step gated by the test resource lock; may crash the process
    Test,
}

impl FromStr for StepKind {
    type Err = SimulatorError;

    /// Step names are matched exactly, so `"Build"` is not a known step.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lint" => Ok(StepKind::Lint),
            "build" => Ok(StepKind::Build),
            "test" => Ok(StepKind::Test),
            _ => Err(SimulatorError::invalid_step(s)),
        }
    }
}

impl StepKind {
    /// Wire name of the step.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Lint => "lint",
            StepKind::Build => "build",
            StepKind::Test => "test",
        }
    }

    /// Log line written once the step starts doing work.
    pub fn progress_line(&self) -> &'static str {
        match self {
            StepKind::Lint => "Linting...",
            StepKind::Build => "Building...",
            StepKind::Test => "Testing...",
        }
    }

    /// Exclusive upper bound, in milliseconds, of the random delay used when
    /// the caller does not force one.
    pub fn max_random_delay_ms(&self) -> u64 {
        match self {
            StepKind::Lint => 100,
            StepKind::Build | StepKind::Test => 1000,
        }
    }

    /// Whether the step has to hold a resource lock while it runs.
    pub fn is_gated(&self) -> bool {
        !matches!(self, StepKind::Lint)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
