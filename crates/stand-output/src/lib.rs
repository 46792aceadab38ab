//! `stand-output` — result writers and summary metrics for stand allocation
//! runs.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                                   |
//! |-----------|-------------|-----------------------------------------------------------------|
//! | *(none)*  | CSV         | `simulation_output.csv`, `simulation_output_minute.csv`         |
//! | `sqlite`  | SQLite      | `output.db`                                                     |
//! | `parquet` | Parquet     | `simulation_output.parquet`, `simulation_output_minute.parquet` |
//!
//! All backends implement [`OutputWriter`] and are driven either by
//! [`SimOutputObserver`], which implements `stand_sim::SimObserver`, or in one
//! shot from a finished run's `RunTables` via
//! [`OutputWriter::write_tables`].
//!
//! [`SimulationMetrics`] summarises a run's two tables.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stand_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::{CsvWriter, read_aircraft_csv, read_minute_csv};
pub use error::{OutputError, OutputResult};
pub use metrics::{GroundTime, SimulationMetrics};
pub use observer::SimOutputObserver;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;

/// File name of the per-aircraft table, without extension.
pub const AIRCRAFT_TABLE: &str = "simulation_output";

/// File name of the per-minute table, without extension.
pub const MINUTE_TABLE: &str = "simulation_output_minute";
