//! Validating builder for [`Fleet`].
//!
//! # Usage
//!
//! ```rust
//! use stand_fleet::{ArrivalRecord, FleetBuilder};
//!
//! let fleet = FleetBuilder::new()
//!     .record(ArrivalRecord::new("AC0001", 0, 45))
//!     .record(ArrivalRecord::new("AC0000", 5, 60))
//!     .build()
//!     .unwrap();
//!
//! // Ids follow label order, not input order.
//! assert_eq!(fleet.lookup("AC0000").unwrap().0, 0);
//! ```

use stand_core::Minute;

use crate::{Aircraft, ArrivalRecord, Fleet, FleetError, FleetResult};

/// Collects input rows and validates them all at once in [`build`](Self::build).
#[derive(Default)]
pub struct FleetBuilder {
    records: Vec<ArrivalRecord>,
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one input row.
    pub fn record(mut self, record: ArrivalRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Add many input rows, keeping their order for error reporting.
    pub fn records<I: IntoIterator<Item = ArrivalRecord>>(mut self, records: I) -> Self {
        self.records.extend(records);
        self
    }

    /// Validate every row and build the fleet.
    ///
    /// Rejects empty or duplicate identifiers, negative arrival times and
    /// non-positive turnarounds.  The first offending row (in input order)
    /// is reported; duplicates are reported by label after the per-row
    /// checks pass.
    pub fn build(self) -> FleetResult<Fleet> {
        if u32::try_from(self.records.len()).is_err() {
            return Err(FleetError::TooManyAircraft(self.records.len()));
        }

        let mut aircraft = Vec::with_capacity(self.records.len());
        for (row, rec) in self.records.into_iter().enumerate() {
            aircraft.push(validate(row, rec)?);
        }

        // Stable sort: ids follow label order.
        aircraft.sort_by(|a, b| a.label().cmp(b.label()));
        if let Some(pair) = aircraft.windows(2).find(|w| w[0].label() == w[1].label()) {
            return Err(FleetError::DuplicateId(pair[0].label().to_owned()));
        }

        Ok(Fleet::from_sorted(aircraft))
    }
}

fn validate(row: usize, rec: ArrivalRecord) -> FleetResult<Aircraft> {
    let ArrivalRecord { aircraft_id, arrival_time, turnaround_time } = rec;

    if aircraft_id.trim().is_empty() {
        return Err(FleetError::EmptyId { row });
    }
    if arrival_time < 0 {
        return Err(FleetError::NegativeArrival { id: aircraft_id, value: arrival_time });
    }
    if turnaround_time <= 0 {
        return Err(FleetError::NonPositiveTurnaround { id: aircraft_id, value: turnaround_time });
    }

    // Both values are in 0..=i64::MAX, so their sum cannot overflow u64.
    Ok(Aircraft::new(aircraft_id, Minute(arrival_time as u64), turnaround_time as u64))
}
