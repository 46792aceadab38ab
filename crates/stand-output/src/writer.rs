//! The `OutputWriter` trait implemented by all backend writers.

use stand_sim::{AircraftResultRow, MinuteSnapshotRow, RunTables};

use crate::OutputResult;

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// When driven by [`SimOutputObserver`](crate::SimOutputObserver) errors are
/// stored and retrieved with
/// [`take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of per-aircraft result rows, in the given order.
    fn write_aircraft_results(&mut self, rows: &[AircraftResultRow]) -> OutputResult<()>;

    /// Write one per-minute snapshot row.
    fn write_minute_snapshot(&mut self, row: &MinuteSnapshotRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write both tables of a completed run, then [`finish`](Self::finish).
    fn write_tables(&mut self, tables: &RunTables) -> OutputResult<()> {
        self.write_aircraft_results(&tables.aircraft)?;
        for row in &tables.minutes {
            self.write_minute_snapshot(row)?;
        }
        self.finish()
    }
}
