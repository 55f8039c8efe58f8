//! Data models for simulated steps.
//!
//! A [`StepRequest`] comes in, its name is resolved to a [`StepKind`], and
//! the simulator answers with a [`StepOutcome`]: either a completed
//! [`StepResponse`] carrying a [`StepStatus`], or a crash.
//!
//! # Wire format
//!
//! ```rust
//! use steprun_core::models::{StepResponse, StepStatus};
//!
//! let response = StepResponse {
//!     build_logs: "step 'lint' build started!".to_string(),
//!     status: StepStatus::Success,
//!     duration_ms: 42,
//! };
//! let json = serde_json::to_value(&response).unwrap();
//! assert_eq!(json["status"], "Success");
//! assert_eq!(json["duration_ms"], 42);
//! ```

pub mod kind;
pub mod request;
pub mod response;
pub mod status;


pub use kind::StepKind;
pub use request::StepRequest;
pub use response::{StepOutcome, StepResponse};
pub use status::StepStatus;
