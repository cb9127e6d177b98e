/*!
 * Timing Metrics
 * Per-process waiting and turnaround reports with run averages
 */

use crate::core::errors::{InvariantError, Result, WorkloadError};
use crate::core::types::{Priority, Tick};
use crate::sim::{RunStats, Schedule, Timeline};
use crate::workload::Workload;
use log::debug;
use serde::Serialize;

/// Timing record for one completed process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessReport {
    pub id: String,
    pub arrival: Tick,
    pub burst: Tick,
    pub priority: Priority,
    /// Tick at which the last burst tick finished
    pub completion: Tick,
    /// Completion minus arrival
    pub turnaround: Tick,
    /// Turnaround minus burst: ticks spent runnable but not running
    pub waiting: Tick,
    /// Tick at which the process first reached the CPU
    pub first_run: Tick,
    /// First run minus arrival
    pub response: Tick,
}

/// Arithmetic means over every process in the run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Averages {
    pub waiting: f64,
    pub turnaround: f64,
    pub response: f64,
}

/// Full result of one run, ready for any presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RunReport {
    /// One record per process, in submission order
    pub processes: Vec<ProcessReport>,
    pub averages: Averages,
    pub stats: RunStats,
    pub timeline: Timeline,
}

/// Derive per-process timings and run averages from a schedule
///
/// Works on any schedule that covers the workload: every process needs a
/// completion entry and at least one timeline segment. Timing values are
/// checked as they are derived; a subtraction that would go negative is
/// reported as an invariant error because no schedule produced by the
/// run can contain one.
pub fn compute(workload: &Workload, schedule: &Schedule) -> Result<RunReport> {
    if workload.is_empty() {
        return Err(WorkloadError::Empty.into());
    }

    let mut processes = Vec::with_capacity(workload.len());
    let mut waiting_sum: Tick = 0;
    let mut turnaround_sum: Tick = 0;
    let mut response_sum: Tick = 0;

    for spec in workload {
        let completion = schedule
            .completion(&spec.id)
            .ok_or_else(|| WorkloadError::MissingCompletion(spec.id.clone()))?;
        let first_run = schedule
            .timeline
            .first_run(&spec.id)
            .ok_or_else(|| WorkloadError::MissingSegment(spec.id.clone()))?;

        let turnaround = completion
            .checked_sub(spec.arrival)
            .ok_or_else(|| InvariantError::NegativeTiming(spec.id.clone()))?;
        let waiting = turnaround
            .checked_sub(spec.burst)
            .ok_or_else(|| InvariantError::NegativeTiming(spec.id.clone()))?;
        let response = first_run
            .checked_sub(spec.arrival)
            .ok_or_else(|| InvariantError::NegativeTiming(spec.id.clone()))?;

        waiting_sum = waiting_sum.saturating_add(waiting);
        turnaround_sum = turnaround_sum.saturating_add(turnaround);
        response_sum = response_sum.saturating_add(response);

        processes.push(ProcessReport {
            id: spec.id.clone(),
            arrival: spec.arrival,
            burst: spec.burst,
            priority: spec.priority,
            completion,
            turnaround,
            waiting,
            first_run,
            response,
        });
    }

    let count = processes.len() as f64;
    let averages = Averages {
        waiting: waiting_sum as f64 / count,
        turnaround: turnaround_sum as f64 / count,
        response: response_sum as f64 / count,
    };
    debug!("Metrics computed for {} processes", processes.len());

    Ok(RunReport {
        processes,
        averages,
        stats: schedule.stats.clone(),
        timeline: schedule.timeline.clone(),
    })
}
