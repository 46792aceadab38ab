//! Append-only accumulation of the two result streams.

use stand_core::AircraftId;

use crate::{AircraftResultRow, MinuteSnapshotRow, SimError, SimResult};

/// Collects result rows as the engine produces them.
///
/// Rows are never modified once appended.  Each aircraft gets at most one
/// result row and each minute exactly one snapshot, in increasing order.
#[derive(Debug, Default)]
pub struct RunRecorder {
    aircraft: Vec<AircraftResultRow>,
    minutes:  Vec<MinuteSnapshotRow>,
    /// Indexed by `AircraftId`.
    recorded: Vec<bool>,
}

impl RunRecorder {
    /// A recorder for a fleet of `aircraft_count` aircraft running
    /// `minute_count` minutes.
    pub fn new(aircraft_count: usize, minute_count: usize) -> Self {
        Self {
            aircraft: Vec::with_capacity(aircraft_count),
            minutes:  Vec::with_capacity(minute_count),
            recorded: vec![false; aircraft_count],
        }
    }

    /// Append the result row of `id`.
    pub fn push_result(&mut self, id: AircraftId, row: AircraftResultRow) -> SimResult<()> {
        let slot = self
            .recorded
            .get_mut(id.index())
            .ok_or(SimError::UnknownAircraft(id))?;
        if *slot {
            return Err(SimError::DuplicateResult(row.aircraft_id));
        }
        *slot = true;
        self.aircraft.push(row);
        Ok(())
    }

    /// Append the snapshot of the next minute.
    pub fn push_snapshot(&mut self, row: MinuteSnapshotRow) -> SimResult<()> {
        let expected = self.minutes.len() as u64;
        if row.minute != expected {
            return Err(SimError::SnapshotOutOfOrder { expected, got: row.minute });
        }
        self.minutes.push(row);
        Ok(())
    }

    /// Result rows in departure-processing order.
    pub fn aircraft_results(&self) -> &[AircraftResultRow] {
        &self.aircraft
    }

    /// Snapshots in minute order.
    pub fn minute_snapshots(&self) -> &[MinuteSnapshotRow] {
        &self.minutes
    }

    pub fn into_tables(self, plb_total: u32) -> RunTables {
        RunTables {
            plb_total,
            aircraft: self.aircraft,
            minutes:  self.minutes,
        }
    }
}

/// The two output tables of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTables {
    /// PLB stand count the run was configured with.
    pub plb_total: u32,
    /// One row per departed aircraft, in departure-processing order.
    pub aircraft:  Vec<AircraftResultRow>,
    /// One row per minute `0..=horizon`.
    pub minutes:   Vec<MinuteSnapshotRow>,
}
