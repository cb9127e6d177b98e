/*!
 * Core Module
 * Fundamental simulator types and error handling
 */

pub mod errors;
pub mod serde;
pub mod types;

// Re-export for convenience
pub use errors::{InvariantError, Result, SimError, WorkloadError};
pub use types::{Priority, SimResult, Tick};
