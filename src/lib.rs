//! Fitstat - Compute engine for fitness tracker workout summaries
//!
//! Fitstat transforms raw sensor packages into workout summaries through a
//! single-stage computation: package dispatch → variant formulas → summary
//! rendering.
//!
//! ## Modules
//!
//! - **package**: sensor package schema and workout dispatch
//! - **workouts**: per-activity calculators (running, walking, swimming)
//! - **report** / **encoder**: text and JSON summary output

pub mod encoder;
pub mod error;
pub mod package;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod workouts;

pub use error::ComputeError;
pub use package::{PackageReader, SensorPackage};
pub use pipeline::{package_to_message, package_to_summary, process_packages};
pub use report::summary_message;
pub use types::{WorkoutCode, WorkoutSummary};

/// Fitstat version embedded in all summary records
pub const FITSTAT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for summary records
pub const PRODUCER_NAME: &str = "fitstat";
