//! hub — end-to-end stand allocation run on one synthetic day.
//!
//! Generates a seeded arrival table, writes it to `data/input_aircraft.csv`,
//! loads it back, simulates it minute by minute, streams both result tables
//! to CSV, and prints the summary metrics read back from those files.
//!
//! ```text
//! cargo run -p stand-hub --bin hub -- [config.json]
//! RUST_LOG=debug cargo run -p stand-hub --bin hub     # per-arrival REMOTE fallbacks
//! ```

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use stand_hub::{HubConfig, init_tracing};
use stand_output::{
    AIRCRAFT_TABLE, CsvWriter, MINUTE_TABLE, SimOutputObserver, SimulationMetrics,
    read_aircraft_csv, read_minute_csv,
};
use stand_schedule::{generate_arrivals, load_arrivals_csv, write_arrivals_csv};
use stand_sim::{ProgressLogger, SimBuilder};
use tracing::{error, info};

fn main() -> Result<()> {
    init_tracing();
    let config = HubConfig::from_args()?;
    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating {}", config.data_dir.display()))?;

    // 1. Generate and persist the input table.
    let generated = generate_arrivals(&config.generator)?;
    let input_csv = config.input_csv();
    write_arrivals_csv(&input_csv, &generated)?;
    info!(rows = generated.len(), path = %input_csv.display(), "generated arrivals");

    // 2. Load it back and build the engine.
    let records = load_arrivals_csv(&input_csv)?;
    let mut sim = SimBuilder::new(records).config(config.sim.clone()).build()?;
    info!(
        plb_stands = sim.config().plb_stands,
        aircraft = sim.fleet().len(),
        horizon = sim.config().horizon.0,
        events = sim.pending_events(),
        "airport model initialised"
    );

    // 3. Run, streaming both tables to CSV.
    let writer = CsvWriter::new(&config.data_dir)?;
    let mut obs = (SimOutputObserver::new(writer), ProgressLogger::default());
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = obs.0.take_error() {
        error!(error = %e, "output error");
        return Err(e.into());
    }
    let tables = sim.finish()?;
    info!(
        seconds = elapsed.as_secs_f64(),
        departed = tables.aircraft.len(),
        minutes = tables.minutes.len(),
        "simulation finished"
    );

    #[cfg(feature = "sqlite")]
    {
        use stand_output::{OutputWriter, SqliteWriter};
        SqliteWriter::new(&config.data_dir)?.write_tables(&tables)?;
        info!("wrote output.db");
    }
    #[cfg(feature = "parquet")]
    {
        use stand_output::{OutputWriter, ParquetWriter};
        ParquetWriter::new(&config.data_dir)?.write_tables(&tables)?;
        info!("wrote parquet tables");
    }

    // 4. Analyse the files on disk.
    let aircraft = read_aircraft_csv(&config.data_dir.join(format!("{AIRCRAFT_TABLE}.csv")))?;
    let minutes = read_minute_csv(&config.data_dir.join(format!("{MINUTE_TABLE}.csv")))?;
    let metrics = SimulationMetrics::compute(&aircraft, &minutes, tables.plb_total);
    println!("{metrics}");
    metrics.write_summary(&config.summary_path)?;
    info!(path = %config.summary_path.display(), "metrics exported");

    Ok(())
}
