//! Plain data rows of the two result tables.

use stand_core::StandClass;
use stand_fleet::Aircraft;

/// Outcome of one aircraft, recorded at its DEPARTURE.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AircraftResultRow {
    pub aircraft_id:         String,
    pub arrival_time:        u64,
    pub departure_time:      u64,
    pub turnaround_time:     u64,
    pub assigned_stand_type: StandClass,
}

impl AircraftResultRow {
    /// Build the row for a parked or departed aircraft.  `None` while the
    /// aircraft has no stand yet.
    pub fn from_aircraft(aircraft: &Aircraft) -> Option<Self> {
        Some(Self {
            aircraft_id:         aircraft.label().to_owned(),
            arrival_time:        aircraft.arrival().0,
            departure_time:      aircraft.departure().0,
            turnaround_time:     aircraft.turnaround(),
            assigned_stand_type: aircraft.stand()?,
        })
    }
}

/// System state at the end of one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinuteSnapshotRow {
    pub minute:          u64,
    pub plb_occupied:    u32,
    pub plb_available:   u32,
    pub total_parked:    u64,
    pub remote_occupied: u64,
}
