/*!
 * Property Tests
 * Whatever the workload, a schedule must conserve bursts, keep its
 * segments ordered, stay within the horizon, and be reproducible
 */

use proptest::prelude::*;

use sched_sim::{compute_metrics, simulate, ProcessSpec, Workload};

fn workload_strategy() -> impl Strategy<Value = Workload> {
    // Small tick ranges keep runs quick while still mixing arrival
    // overlap, priority ties, and idle gaps.
    prop::collection::vec((0u64..40, 1u64..10, -4i32..8), 1..12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (arrival, burst, priority))| {
                ProcessSpec::new(format!("P{}", index + 1), arrival, burst, priority)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn bursts_are_conserved(workload in workload_strategy()) {
        let schedule = simulate(&workload).unwrap();

        prop_assert_eq!(schedule.timeline.busy_ticks(), workload.total_burst());
        prop_assert_eq!(schedule.stats.busy_ticks, workload.total_burst());
        for spec in &workload {
            let executed: u64 = schedule
                .timeline
                .segments_for(&spec.id)
                .map(|segment| segment.ticks())
                .sum();
            prop_assert_eq!(executed, spec.burst);
        }
    }

    #[test]
    fn segments_are_ordered_and_within_bounds(workload in workload_strategy()) {
        let schedule = simulate(&workload).unwrap();
        let horizon = workload.horizon();

        prop_assert!(schedule.timeline.is_ordered());
        prop_assert!(schedule.timeline.span() <= horizon);
        for spec in &workload {
            for segment in schedule.timeline.segments_for(&spec.id) {
                prop_assert!(segment.start >= spec.arrival);
            }
        }
    }

    #[test]
    fn consecutive_segments_switch_processes(workload in workload_strategy()) {
        let schedule = simulate(&workload).unwrap();

        for pair in schedule.timeline.segments().windows(2) {
            prop_assert_ne!(&pair[0].id, &pair[1].id);
        }
    }

    #[test]
    fn completions_close_the_last_segment(workload in workload_strategy()) {
        let schedule = simulate(&workload).unwrap();

        let mut latest = 0;
        for spec in &workload {
            let completion = schedule.completion(&spec.id);
            prop_assert!(completion.is_some());
            let completion = completion.unwrap();

            let last_end = schedule
                .timeline
                .segments_for(&spec.id)
                .last()
                .map(|segment| segment.end);
            prop_assert_eq!(last_end, Some(completion));
            latest = latest.max(completion);
        }
        prop_assert_eq!(latest, schedule.stats.makespan);
    }

    #[test]
    fn timings_respect_their_lower_bounds(workload in workload_strategy()) {
        let schedule = simulate(&workload).unwrap();
        let report = compute_metrics(&workload, &schedule).unwrap();

        for record in &report.processes {
            prop_assert_eq!(record.turnaround, record.waiting + record.burst);
            prop_assert!(record.completion >= record.arrival + record.burst);
            prop_assert!(record.first_run >= record.arrival);
            prop_assert!(record.response <= record.waiting);
        }
    }

    #[test]
    fn runs_are_reproducible(workload in workload_strategy()) {
        let first = simulate(&workload).unwrap();
        let second = simulate(&workload).unwrap();
        prop_assert_eq!(&first, &second);

        let report_a = compute_metrics(&workload, &first).unwrap();
        let report_b = compute_metrics(&workload, &second).unwrap();
        prop_assert_eq!(report_a, report_b);
    }

    #[test]
    fn stats_add_up(workload in workload_strategy()) {
        let schedule = simulate(&workload).unwrap();
        let stats = &schedule.stats;

        prop_assert_eq!(stats.busy_ticks + stats.idle_ticks, stats.makespan);
        prop_assert_eq!(stats.context_switches, schedule.timeline.len() as u64);
        prop_assert!(stats.preemptions < stats.context_switches);
        prop_assert!(stats.cpu_utilization() > 0.0);
        prop_assert!(stats.cpu_utilization() <= 1.0);
    }
}
