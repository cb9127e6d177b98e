/*!
 * Scheduling Simulator Library
 * Preemptive priority CPU scheduling over discrete ticks, with timing
 * metrics derived from the resulting schedule
 */

pub mod core;
pub mod metrics;
pub mod sim;
pub mod workload;

// Re-exports
pub use crate::core::errors::{InvariantError, Result, SimError, WorkloadError};
pub use crate::core::types::{Priority, Tick};
pub use crate::metrics::{compute as compute_metrics, Averages, ProcessReport, RunReport};
pub use crate::sim::{simulate, RunStats, Schedule, Segment, Simulator, Timeline};
pub use crate::workload::{ProcessSpec, Workload};
