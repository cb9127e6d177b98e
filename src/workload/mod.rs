/*!
 * Workload Module
 * Process descriptors and input validation
 */

mod process;
mod validation;

pub use process::ProcessSpec;

use crate::core::errors::WorkloadError;
use crate::core::types::{SimResult, Tick};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered set of processes submitted for one run
///
/// Input order is part of the contract: a priority tie is always resolved
/// in favor of the earlier descriptor, so reordering a workload can change
/// its schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workload {
    processes: Vec<ProcessSpec>,
}

impl Workload {
    pub fn new(processes: Vec<ProcessSpec>) -> Self {
        Self { processes }
    }

    /// Load descriptors from a file holding a JSON array
    pub fn from_json_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Number of submitted processes
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Descriptors in submission order
    pub fn processes(&self) -> &[ProcessSpec] {
        &self.processes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProcessSpec> {
        self.processes.iter()
    }

    /// Check that the workload is non-empty, free of duplicate ids, and
    /// has a positive burst for every process
    pub fn validate(&self) -> Result<(), WorkloadError> {
        validation::validate_processes(&self.processes)
    }

    /// Sum of all bursts, and therefore the exact number of busy ticks a
    /// run will produce
    pub fn total_burst(&self) -> Tick {
        self.processes
            .iter()
            .fold(0, |acc, spec| acc.saturating_add(spec.burst))
    }

    /// Latest tick any valid run can reach: the last arrival plus the
    /// total burst
    ///
    /// A run that has not finished every process by this tick has a
    /// scheduling defect, not a slow workload.
    pub fn horizon(&self) -> Tick {
        let last_arrival = self
            .processes
            .iter()
            .map(|spec| spec.arrival)
            .max()
            .unwrap_or(0);
        last_arrival.saturating_add(self.total_burst())
    }
}

impl From<Vec<ProcessSpec>> for Workload {
    fn from(processes: Vec<ProcessSpec>) -> Self {
        Self::new(processes)
    }
}

impl FromIterator<ProcessSpec> for Workload {
    fn from_iter<I: IntoIterator<Item = ProcessSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a ProcessSpec;
    type IntoIter = std::slice::Iter<'a, ProcessSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_horizon_covers_every_burst() {
        let workload = Workload::new(vec![
            ProcessSpec::new("P1", 0, 5, 3),
            ProcessSpec::new("P2", 1, 7, 1),
            ProcessSpec::new("P3", 2, 4, 2),
        ]);
        // last arrival 2 + total burst 16
        assert_eq!(workload.horizon(), 18);
        assert_eq!(workload.total_burst(), 16);
    }

    #[test]
    fn test_horizon_of_empty_workload() {
        assert_eq!(Workload::default().horizon(), 0);
    }

    #[test]
    fn test_workload_deserializes_from_json_array() {
        let json = r#"[
            {"id":"P1","arrival":0,"burst":5,"priority":1},
            {"id":"P2","arrival":1,"burst":2,"priority":0}
        ]"#;
        let workload: Workload = serde_json::from_str(json).unwrap();
        assert_eq!(workload.len(), 2);
        assert_eq!(workload.processes()[1].id, "P2");
    }

    #[test]
    fn test_validate_delegates_to_checks() {
        let workload = Workload::new(vec![ProcessSpec::new("P1", 0, 0, 1)]);
        assert!(matches!(
            workload.validate(),
            Err(WorkloadError::ZeroBurst(_))
        ));
    }

    #[test]
    fn test_missing_file_reported_as_io_error() {
        let err = Workload::from_json_file("/nonexistent/workload.json").unwrap_err();
        assert!(matches!(err, crate::core::errors::SimError::Io(_)));
    }

    #[test]
    fn test_malformed_file_reported_as_json_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("workload.json");
        std::fs::write(&path, "not json at all").unwrap();
        let err = Workload::from_json_file(&path).unwrap_err();
        assert!(matches!(err, crate::core::errors::SimError::Json(_)));
    }
}
