/*!
 * Simulation Module
 * Preemptive priority scheduling over discrete ticks
 *
 * One call to [`Simulator::run`] turns a validated workload into a
 * [`Schedule`]: an ordered execution timeline, a completion tick per
 * process, and summary counters. Time advances in whole ticks and the
 * scheduling decision is re-evaluated at every one of them, which is
 * where preemption comes from.
 */

mod cpu;
mod run;
mod stats;
mod timeline;

pub use run::{simulate, Schedule, Simulator};
pub use stats::RunStats;
pub use timeline::{Segment, Timeline};
