//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `simulation_output.csv` (one row per departed aircraft)
//! - `simulation_output_minute.csv` (one row per simulated minute)
//!
//! The matching readers load those files back for offline analysis.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use stand_sim::{AircraftResultRow, MinuteSnapshotRow};

use crate::writer::OutputWriter;
use crate::{AIRCRAFT_TABLE, MINUTE_TABLE, OutputResult};

pub const AIRCRAFT_HEADER: [&str; 5] = [
    "aircraft_id",
    "arrival_time",
    "departure_time",
    "turnaround_time",
    "assigned_stand_type",
];

pub const MINUTE_HEADER: [&str; 5] = [
    "minute",
    "plb_occupied",
    "plb_available",
    "total_parked",
    "remote_occupied",
];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    aircraft: Writer<File>,
    minutes:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut aircraft = Writer::from_path(dir.join(format!("{AIRCRAFT_TABLE}.csv")))?;
        aircraft.write_record(AIRCRAFT_HEADER)?;

        let mut minutes = Writer::from_path(dir.join(format!("{MINUTE_TABLE}.csv")))?;
        minutes.write_record(MINUTE_HEADER)?;

        Ok(Self {
            aircraft,
            minutes,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_aircraft_results(&mut self, rows: &[AircraftResultRow]) -> OutputResult<()> {
        for row in rows {
            self.aircraft.write_record(&[
                row.aircraft_id.clone(),
                row.arrival_time.to_string(),
                row.departure_time.to_string(),
                row.turnaround_time.to_string(),
                row.assigned_stand_type.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_minute_snapshot(&mut self, row: &MinuteSnapshotRow) -> OutputResult<()> {
        self.minutes.write_record(&[
            row.minute.to_string(),
            row.plb_occupied.to_string(),
            row.plb_available.to_string(),
            row.total_parked.to_string(),
            row.remote_occupied.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.aircraft.flush()?;
        self.minutes.flush()?;
        Ok(())
    }
}

/// Load a per-aircraft table written by [`CsvWriter`].
pub fn read_aircraft_csv(path: &Path) -> OutputResult<Vec<AircraftResultRow>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let rows = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Load a per-minute table written by [`CsvWriter`].
pub fn read_minute_csv(path: &Path) -> OutputResult<Vec<MinuteSnapshotRow>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let rows = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
