/*!
 * schedsim - Main Entry Point
 *
 * Demo driver that:
 * - Loads a workload from a JSON file
 * - Runs the preemptive priority simulation
 * - Prints the full run report as JSON
 */

use std::error::Error;

use log::info;
use sched_sim::{compute_metrics, Simulator, Workload};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => match std::env::var("SCHEDSIM_WORKLOAD") {
            Ok(path) => path,
            Err(_) => {
                eprintln!("Usage: schedsim <workload.json>");
                eprintln!("       (or set SCHEDSIM_WORKLOAD to a workload path)");
                std::process::exit(2);
            }
        },
    };

    info!("Loading workload from {}", path);
    let workload = Workload::from_json_file(&path)?;
    info!("Loaded {} processes", workload.len());

    let schedule = Simulator::new().run(&workload)?;
    let report = compute_metrics(&workload, &schedule)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
