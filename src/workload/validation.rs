/*!
 * Workload Validation
 * Input checks performed before any simulation work starts
 */

use super::process::ProcessSpec;
use crate::core::errors::WorkloadError;
use ahash::HashSet;

/// Reject workloads the simulator refuses to schedule
///
/// Checks run in input order, so the first offending descriptor is the
/// one reported.
pub(super) fn validate_processes(processes: &[ProcessSpec]) -> Result<(), WorkloadError> {
    if processes.is_empty() {
        return Err(WorkloadError::Empty);
    }

    let mut seen = HashSet::default();
    for spec in processes {
        if spec.burst == 0 {
            return Err(WorkloadError::ZeroBurst(spec.id.clone()));
        }
        if !seen.insert(spec.id.as_str()) {
            return Err(WorkloadError::DuplicateId(spec.id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_workload_rejected() {
        assert!(matches!(
            validate_processes(&[]),
            Err(WorkloadError::Empty)
        ));
    }

    #[test]
    fn test_zero_burst_rejected() {
        let processes = vec![
            ProcessSpec::new("P1", 0, 3, 1),
            ProcessSpec::new("P2", 1, 0, 2),
        ];
        assert!(matches!(
            validate_processes(&processes),
            Err(WorkloadError::ZeroBurst(id)) if id == "P2"
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let processes = vec![
            ProcessSpec::new("P1", 0, 3, 1),
            ProcessSpec::new("P1", 1, 2, 2),
        ];
        assert!(matches!(
            validate_processes(&processes),
            Err(WorkloadError::DuplicateId(id)) if id == "P1"
        ));
    }

    #[test]
    fn test_valid_workload_accepted() {
        let processes = vec![
            ProcessSpec::new("P1", 0, 3, 1),
            ProcessSpec::new("P2", 1, 2, 2),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_first_offender_reported() {
        // Zero burst on P2 comes before the duplicate on P3
        let processes = vec![
            ProcessSpec::new("P1", 0, 3, 1),
            ProcessSpec::new("P2", 1, 0, 2),
            ProcessSpec::new("P1", 2, 4, 3),
        ];
        assert!(matches!(
            validate_processes(&processes),
            Err(WorkloadError::ZeroBurst(id)) if id == "P2"
        ));
    }
}
