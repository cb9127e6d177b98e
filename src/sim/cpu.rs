/*!
 * CPU Occupancy
 * Explicit state for the single simulated CPU
 */

use crate::core::types::Tick;

/// What the CPU is doing right now
///
/// Either nothing is runnable, or exactly one process has held the CPU
/// without interruption since `segment_start`. The run loop moves
/// between the two states at tick boundaries only, which is what makes
/// segment aggregation a constant-time bookkeeping step instead of a
/// post-processing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Cpu {
    /// No process is executing
    Idle,
    /// The process at `index` has executed since `segment_start`
    Running { index: usize, segment_start: Tick },
}

impl Cpu {
    pub(super) fn is_idle(&self) -> bool {
        matches!(self, Cpu::Idle)
    }

    /// Index of the occupant, if any
    pub(super) fn running_index(&self) -> Option<usize> {
        match self {
            Cpu::Idle => None,
            Cpu::Running { index, .. } => Some(*index),
        }
    }
}
