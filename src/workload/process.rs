/*!
 * Process Descriptors
 * Immutable input records for a simulation run
 */

use crate::core::types::{Priority, Tick};
use serde::{Deserialize, Serialize};

/// One process as submitted to the simulator
///
/// Descriptors never change during a run; the simulator keeps its own
/// working copy of the remaining burst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    /// Unique label, e.g. "P1"
    pub id: String,
    /// Tick at which the process becomes runnable
    pub arrival: Tick,
    /// Total CPU ticks required, at least one
    pub burst: Tick,
    /// Scheduling priority (numerically smaller is more urgent)
    pub priority: Priority,
}

impl ProcessSpec {
    pub fn new(id: impl Into<String>, arrival: Tick, burst: Tick, priority: Priority) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority,
        }
    }
}
