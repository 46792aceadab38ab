//! Input table row.

use serde::{Deserialize, Serialize};

/// One aircraft in the input table.
///
/// Times are signed so that malformed input (negative minutes) survives
/// parsing and is reported by [`FleetBuilder`](crate::FleetBuilder) with the
/// offending aircraft named, instead of failing as an anonymous parse error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    pub aircraft_id:     String,
    pub arrival_time:    i64,
    pub turnaround_time: i64,
}

impl ArrivalRecord {
    pub fn new(aircraft_id: impl Into<String>, arrival_time: i64, turnaround_time: i64) -> Self {
        Self {
            aircraft_id: aircraft_id.into(),
            arrival_time,
            turnaround_time,
        }
    }
}
