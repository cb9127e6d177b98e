/*!
 * Run Statistics
 * Counters accumulated while a schedule is produced
 */

use crate::core::serde::is_zero_u64;
use crate::core::types::Tick;
use serde::Serialize;

/// Summary counters for one run
///
/// Everything here is derivable from the timeline; the run keeps the
/// counters up to date so consumers never have to rescan segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RunStats {
    /// Tick at which the last process completed
    pub makespan: Tick,
    /// Ticks spent executing some process
    pub busy_ticks: Tick,
    /// Ticks before the makespan with nothing runnable
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub idle_ticks: Tick,
    /// Times a process was installed on the CPU (one per segment)
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub context_switches: u64,
    /// Segments closed while their process still had work remaining
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub preemptions: u64,
}

impl RunStats {
    /// Fraction of the makespan spent executing, in `[0.0, 1.0]`
    ///
    /// A run with no makespan (which validation rules out) reports zero
    /// rather than dividing by it.
    pub fn cpu_utilization(&self) -> f64 {
        if self.makespan == 0 {
            return 0.0;
        }
        self.busy_ticks as f64 / self.makespan as f64
    }
}
