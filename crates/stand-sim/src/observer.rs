//! Simulation observer trait for progress reporting and data collection.

use stand_core::Minute;
use stand_fleet::Aircraft;
use tracing::info;

use crate::{AircraftResultRow, MinuteSnapshotRow};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// minute loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers see state; they cannot change it.
pub trait SimObserver {
    /// Called at the start of each minute, before any event is applied.
    fn on_minute_start(&mut self, _minute: Minute) {}

    /// Called after an arrival was parked.  `aircraft.stand()` is set.
    fn on_arrival(&mut self, _minute: Minute, _aircraft: &Aircraft) {}

    /// Called with each per-aircraft result row as it is recorded.
    fn on_departure(&mut self, _row: &AircraftResultRow) {}

    /// Called with each per-minute snapshot as it is recorded.
    fn on_snapshot(&mut self, _row: &MinuteSnapshotRow) {}

    /// Called once after the last minute (`horizon`) completes.
    /// `final_minute` is `horizon + 1`.
    fn on_sim_end(&mut self, _final_minute: Minute) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs a progress line every `interval` simulated minutes.
///
/// With the default interval of 60 this prints one line per simulated hour.
pub struct ProgressLogger {
    interval: u64,
}

impl ProgressLogger {
    /// `interval` of 0 disables logging.
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }
}

impl Default for ProgressLogger {
    fn default() -> Self {
        Self::new(60)
    }
}

impl SimObserver for ProgressLogger {
    fn on_snapshot(&mut self, row: &MinuteSnapshotRow) {
        let elapsed = row.minute + 1;
        if self.interval > 0 && elapsed % self.interval == 0 {
            info!(
                elapsed_minutes = elapsed,
                hours = elapsed / 60,
                plb_occupied = row.plb_occupied,
                total_parked = row.total_parked,
                "simulation progress"
            );
        }
    }

    fn on_sim_end(&mut self, final_minute: Minute) {
        info!(final_minute = final_minute.0, "simulation complete");
    }
}

/// Pairs fan every callback out to both observers, left first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_minute_start(&mut self, minute: Minute) {
        self.0.on_minute_start(minute);
        self.1.on_minute_start(minute);
    }

    fn on_arrival(&mut self, minute: Minute, aircraft: &Aircraft) {
        self.0.on_arrival(minute, aircraft);
        self.1.on_arrival(minute, aircraft);
    }

    fn on_departure(&mut self, row: &AircraftResultRow) {
        self.0.on_departure(row);
        self.1.on_departure(row);
    }

    fn on_snapshot(&mut self, row: &MinuteSnapshotRow) {
        self.0.on_snapshot(row);
        self.1.on_snapshot(row);
    }

    fn on_sim_end(&mut self, final_minute: Minute) {
        self.0.on_sim_end(final_minute);
        self.1.on_sim_end(final_minute);
    }
}
