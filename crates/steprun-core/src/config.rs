//! Runtime configuration for the simulator.

/// Environment variable that controls simulated crashes during test steps.
pub const CRASHABLE_ENV: &str = "ORCA_CI_SERVER_CRASHABLE";

/// One in this many test steps crashes the process when crashes are enabled.
pub const CRASH_ODDS: u64 = 5;

/// Tunables for a [`crate::Simulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Whether test steps may randomly bring the process down
    pub crash_enabled: bool,
}

impl SimulatorConfig {
    /// Build a config from the raw value of the crashable flag.
    ///
    /// Only the exact string `"false"` disables crashes. Anything else,
    /// including a missing value or `"FALSE"`, leaves them enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use steprun_core::SimulatorConfig;
    ///
    /// assert!(!SimulatorConfig::from_crashable_flag(Some("false")).crash_enabled);
    /// assert!(SimulatorConfig::from_crashable_flag(Some("no")).crash_enabled);
    /// assert!(SimulatorConfig::from_crashable_flag(None).crash_enabled);
    /// ```
    pub fn from_crashable_flag(flag: Option<&str>) -> Self {
        Self {
            crash_enabled: flag != Some("false"),
        }
    }

    /// Config with simulated crashes turned off.
    pub fn without_crashes() -> Self {
        Self {
            crash_enabled: false,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            crash_enabled: true,
        }
    }
}
