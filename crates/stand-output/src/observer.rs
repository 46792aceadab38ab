//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use stand_core::Minute;
use stand_sim::{AircraftResultRow, MinuteSnapshotRow, SimObserver};
use tracing::warn;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams result rows and minute snapshots to any
/// [`OutputWriter`] backend (CSV, SQLite, Parquet, …) as the run produces
/// them.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].  Once a write has failed, later rows are
/// dropped.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; dropping further rows");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_departure(&mut self, row: &AircraftResultRow) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_aircraft_results(std::slice::from_ref(row));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, row: &MinuteSnapshotRow) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_minute_snapshot(row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_minute: Minute) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
