/*!
 * Core Types
 * Common types used across the simulator
 */

/// Discrete simulation time, measured in whole ticks since time zero
pub type Tick = u64;

/// Scheduling priority (numerically smaller is more urgent)
pub type Priority = i32;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
