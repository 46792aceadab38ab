//! sweep — PLB capacity sweep over one synthetic arrival table.
//!
//! Simulates the same arrivals once per PLB count in `sweep_counts` and
//! prints one line of metrics per run.  Runs execute on Rayon's thread pool
//! (default `parallel` feature).
//!
//! ```text
//! cargo run --release -p stand-hub --bin sweep -- [config.json]
//! ```

use std::time::Instant;

use anyhow::Result;
use stand_hub::{HubConfig, init_tracing};
use stand_output::SimulationMetrics;
use stand_schedule::generate_arrivals;
use stand_sim::sweep_plb_counts;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();
    let config = HubConfig::from_args()?;

    let records = generate_arrivals(&config.generator)?;
    info!(
        aircraft = records.len(),
        runs = config.sweep_counts.len(),
        "starting PLB sweep"
    );

    let t0 = Instant::now();
    let runs = sweep_plb_counts(&records, &config.sim, &config.sweep_counts)?;
    info!(seconds = t0.elapsed().as_secs_f64(), "sweep finished");

    println!(
        "{:>5} {:>10} {:>10} {:>8} {:>8} {:>6}",
        "PLB", "util %", "assign %", "PLB ac", "remote", "peak"
    );
    println!("{}", "-".repeat(52));
    for (plb, tables) in &runs {
        let m = SimulationMetrics::from_tables(tables);
        println!(
            "{:>5} {:>10.2} {:>10.2} {:>8} {:>8} {:>6}",
            plb, m.plb_utilization_pct, m.plb_assignment_pct, m.plb_count, m.remote_count,
            m.peak_parked,
        );
    }

    Ok(())
}
