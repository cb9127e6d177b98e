/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Tick;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workload and input errors with serialization support
///
/// Every variant means the caller handed us something we refuse to work
/// with. The fix belongs to the caller; nothing is retried internally.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum WorkloadError {
    #[error("Workload contains no processes")]
    #[diagnostic(
        code(workload::empty),
        help("Submit at least one process descriptor before running a simulation.")
    )]
    Empty,

    #[error("Process {0} has a zero burst time")]
    #[diagnostic(
        code(workload::zero_burst),
        help("Every burst must be at least one tick. Remove or fix the offending process.")
    )]
    ZeroBurst(String),

    #[error("Duplicate process id: {0}")]
    #[diagnostic(
        code(workload::duplicate_id),
        help("Process ids must be unique so segments and metrics can be attributed.")
    )]
    DuplicateId(String),

    #[error("No completion time recorded for process {0}")]
    #[diagnostic(
        code(workload::missing_completion),
        help("Metrics need a completion entry for every process. Use the schedule returned by the run.")
    )]
    MissingCompletion(String),

    #[error("Process {0} has a completion time but no execution segments")]
    #[diagnostic(
        code(workload::missing_segment),
        help("Every completed process must appear in the timeline. Use the schedule returned by the run.")
    )]
    MissingSegment(String),
}

/// Internal invariant violations
///
/// Reaching one of these is a defect in the simulator, never a property
/// of the input. The run is aborted and no partial schedule is returned.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InvariantError {
    #[error("Horizon {horizon} reached with {completed} of {total} processes complete")]
    #[diagnostic(
        code(sim::horizon_exceeded),
        help("A validated workload always finishes within its horizon. Please report this issue.")
    )]
    HorizonExceeded {
        completed: usize,
        total: usize,
        horizon: Tick,
    },

    #[error("Computed a negative timing value for process {0}")]
    #[diagnostic(
        code(sim::negative_timing),
        help("Waiting and turnaround times are never negative for a schedule produced by the run. Please report this issue.")
    )]
    NegativeTiming(String),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Workload error: {0}")]
    #[diagnostic(transparent)]
    Workload(#[from] WorkloadError),

    #[error("Invariant error: {0}")]
    #[diagnostic(transparent)]
    Invariant(#[from] InvariantError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Filesystem or I/O operation failed. Check the workload path and permissions.")
    )]
    Io(String),

    #[error("JSON error: {0}")]
    #[diagnostic(
        code(sim::json_error),
        help("The workload file must be a JSON array of process descriptors.")
    )]
    Json(String),
}

// Implement conversion from std::io::Error
impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Json(err.to_string())
    }
}

/// Result type for simulator operations
///
/// # Must Use
/// Simulation can fail and must be handled; partial schedules are never returned
pub type Result<T> = std::result::Result<T, SimError>;
