//! CSV arrivals loader.
//!
//! # CSV format
//!
//! One row per aircraft.  Extra whitespace around fields is ignored.
//!
//! ```csv
//! aircraft_id,arrival_time,turnaround_time
//! AC0000,0,58
//! AC0001,1,47
//! AC0002,1,72
//! ```
//!
//! Times are whole minutes.  The loader only checks that each field parses
//! as an integer; range checks (negative arrival, zero turnaround, duplicate
//! ids) happen in `stand_fleet::FleetBuilder`, so that a run built from a
//! file and a run built from in-memory rows reject the same inputs.

use std::io::{Read, Write};
use std::path::Path;

use stand_fleet::ArrivalRecord;

use crate::{ScheduleError, ScheduleResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the input table from a CSV file.
pub fn load_arrivals_csv(path: &Path) -> ScheduleResult<Vec<ArrivalRecord>> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded tables.
pub fn load_arrivals_reader<R: Read>(reader: R) -> ScheduleResult<Vec<ArrivalRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<ArrivalRecord>()
        .map(|row| row.map_err(|e| ScheduleError::Parse(e.to_string())))
        .collect()
}

/// Write `records` to a CSV file in the loader's format.
pub fn write_arrivals_csv(path: &Path, records: &[ArrivalRecord]) -> ScheduleResult<()> {
    let file = std::fs::File::create(path)?;
    write_arrivals_writer(file, records)
}

/// Like [`write_arrivals_csv`] but accepts any `Write` sink.
pub fn write_arrivals_writer<W: Write>(writer: W, records: &[ArrivalRecord]) -> ScheduleResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
