//! Core library for the steprun CI step simulator.
//!
//! This crate simulates CI pipeline steps (`lint`, `build`, `test`) without
//! running real builds, so that orchestration systems can be tested against
//! something that behaves like a slow, contended and occasionally crashing
//! build farm.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): requests, responses, step kinds and statuses
//! - **Simulator** ([`simulator`]): the step logic, its two resource locks and
//!   the injectable capabilities for randomness, time and process exit
//! - **Config** ([`config`]): the crash toggle
//!
//! # Quick Start
//!
//! ```rust
//! use steprun_core::{SimulatorBuilder, StepRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let simulator = SimulatorBuilder::new().build();
//!
//! let request = StepRequest::from_json(
//!     br#"{"step_name":"lint","repo_path":"/repo","commit_hash":"abc123"}"#,
//! )?;
//! if let Some(response) = simulator.run_step(&request).await?.into_response() {
//!     println!("{}", response.build_logs);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod simulator;

// Re-export commonly used types
pub use config::SimulatorConfig;
pub use error::{Result, SimulatorError};
pub use models::{StepKind, StepOutcome, StepRequest, StepResponse, StepStatus};
pub use simulator::{
    ProcessExit, RandomSource, SeededRandom, Simulator, SimulatorBuilder, Terminator,
    ThreadRandom, Timer, TokioTimer,
};
