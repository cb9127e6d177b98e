/*!
 * Simulation Run
 * Tick loop for preemptive priority scheduling
 */

use super::cpu::Cpu;
use super::stats::RunStats;
use super::timeline::{Segment, Timeline};
use crate::core::errors::{InvariantError, Result};
use crate::core::types::Tick;
use crate::workload::{ProcessSpec, Workload};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::collections::HashMap;

/// Everything one run produces
///
/// The timeline is the complete execution trace; completions and stats
/// are precomputed summaries of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Schedule {
    pub timeline: Timeline,
    pub completions: HashMap<String, Tick>,
    pub stats: RunStats,
}

impl Schedule {
    /// Tick at which a process finished its burst
    pub fn completion(&self, id: &str) -> Option<Tick> {
        self.completions.get(id).copied()
    }
}

/// Preemptive priority scheduler over discrete ticks
///
/// At every tick the runnable process with the numerically smallest
/// priority holds the CPU, so a more urgent arrival displaces the
/// current occupant at the next tick boundary. Equal priorities run in
/// submission order and never displace each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    pub fn new() -> Self {
        Self
    }

    /// Run the workload to completion and return its schedule
    ///
    /// The workload is validated first; nothing is simulated for bad
    /// input. A valid workload always finishes by its horizon, so a run
    /// that reaches the horizon reports an invariant error instead of a
    /// partial schedule.
    pub fn run(&self, workload: &Workload) -> Result<Schedule> {
        if let Err(err) = workload.validate() {
            warn!("Rejected workload: {}", err);
            return Err(err.into());
        }

        let processes = workload.processes();
        let total = processes.len();
        let horizon = workload.horizon();
        info!("Starting run: {} processes, horizon {}", total, horizon);

        let mut remaining: Vec<Tick> = processes.iter().map(|spec| spec.burst).collect();
        let mut completions = HashMap::with_capacity(total);
        let mut timeline = Timeline::default();
        let mut stats = RunStats::default();
        let mut cpu = Cpu::Idle;
        let mut completed = 0usize;
        let mut now: Tick = 0;

        while completed < total && now < horizon {
            let Some(next) = select(processes, &remaining, now) else {
                // nothing has arrived; idle ticks never produce segments
                debug_assert!(cpu.is_idle());
                stats.idle_ticks += 1;
                now += 1;
                continue;
            };

            if cpu.running_index() != Some(next) {
                // the occupant changes, so the open segment closes here
                if let Cpu::Running {
                    index,
                    segment_start,
                } = cpu
                {
                    timeline.push(Segment::new(processes[index].id.clone(), segment_start, now));
                    stats.preemptions += 1;
                    debug!(
                        "{} preempted by {} at tick {}",
                        processes[index].id, processes[next].id, now
                    );
                }
                stats.context_switches += 1;
                cpu = Cpu::Running {
                    index: next,
                    segment_start: now,
                };
            }

            remaining[next] -= 1;
            stats.busy_ticks += 1;
            now += 1;

            if remaining[next] == 0 {
                if let Cpu::Running { segment_start, .. } = cpu {
                    let spec = &processes[next];
                    timeline.push(Segment::new(spec.id.clone(), segment_start, now));
                    completions.insert(spec.id.clone(), now);
                    completed += 1;
                    debug!("{} completed at tick {}", spec.id, now);
                }
                cpu = Cpu::Idle;
            }
        }

        if completed < total {
            error!(
                "Run aborted: {} of {} processes complete at horizon {}",
                completed, total, horizon
            );
            return Err(InvariantError::HorizonExceeded {
                completed,
                total,
                horizon,
            }
            .into());
        }

        stats.makespan = timeline.span();
        info!(
            "Run complete: makespan {}, {} segments, {} preemptions",
            stats.makespan,
            timeline.len(),
            stats.preemptions
        );

        Ok(Schedule {
            timeline,
            completions,
            stats,
        })
    }
}

/// Run a workload with the default simulator
pub fn simulate(workload: &Workload) -> Result<Schedule> {
    Simulator::new().run(workload)
}

/// Pick the runnable process with the smallest priority value
///
/// A linear scan that only replaces its candidate on a strict
/// improvement, so ties keep the earliest descriptor and equal
/// priorities run in submission order.
fn select(processes: &[ProcessSpec], remaining: &[Tick], now: Tick) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, spec) in processes.iter().enumerate() {
        if spec.arrival > now || remaining[index] == 0 {
            continue;
        }
        match best {
            Some(current) if processes[current].priority <= spec.priority => {}
            _ => best = Some(index),
        }
    }
    best
}
