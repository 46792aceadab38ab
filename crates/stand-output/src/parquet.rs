//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `simulation_output.parquet`
//! - `simulation_output_minute.parquet`
//!
//! Rows are buffered and written as one record batch per
//! [`BATCH_ROWS`] rows, plus a final partial batch on `finish()`.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use stand_sim::{AircraftResultRow, MinuteSnapshotRow};

use crate::writer::OutputWriter;
use crate::{AIRCRAFT_TABLE, MINUTE_TABLE, OutputResult};

/// Rows per record batch.
pub const BATCH_ROWS: usize = 4096;

fn aircraft_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("aircraft_id",         DataType::Utf8,   false),
        Field::new("arrival_time",        DataType::UInt64, false),
        Field::new("departure_time",      DataType::UInt64, false),
        Field::new("turnaround_time",     DataType::UInt64, false),
        Field::new("assigned_stand_type", DataType::Utf8,   false),
    ]))
}

fn minute_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("minute",          DataType::UInt64, false),
        Field::new("plb_occupied",    DataType::UInt32, false),
        Field::new("plb_available",   DataType::UInt32, false),
        Field::new("total_parked",    DataType::UInt64, false),
        Field::new("remote_occupied", DataType::UInt64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes run output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    aircraft:         Option<ArrowWriter<File>>,
    minutes:          Option<ArrowWriter<File>>,
    aircraft_schema:  Arc<Schema>,
    minute_schema:    Arc<Schema>,
    pending_aircraft: Vec<AircraftResultRow>,
    pending_minutes:  Vec<MinuteSnapshotRow>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let aircraft_schema = aircraft_schema();
        let minute_schema = minute_schema();

        let aircraft_file = File::create(dir.join(format!("{AIRCRAFT_TABLE}.parquet")))?;
        let aircraft = ArrowWriter::try_new(
            aircraft_file,
            Arc::clone(&aircraft_schema),
            Some(snappy_props()),
        )?;

        let minute_file = File::create(dir.join(format!("{MINUTE_TABLE}.parquet")))?;
        let minutes = ArrowWriter::try_new(
            minute_file,
            Arc::clone(&minute_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            aircraft: Some(aircraft),
            minutes: Some(minutes),
            aircraft_schema,
            minute_schema,
            pending_aircraft: Vec::with_capacity(BATCH_ROWS),
            pending_minutes: Vec::with_capacity(BATCH_ROWS),
        })
    }

    fn flush_aircraft(&mut self) -> OutputResult<()> {
        if self.pending_aircraft.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.aircraft.as_mut() else {
            return Ok(());
        };

        let mut ids         = StringBuilder::new();
        let mut arrivals    = UInt64Builder::new();
        let mut departures  = UInt64Builder::new();
        let mut turnarounds = UInt64Builder::new();
        let mut stands      = StringBuilder::new();

        for row in self.pending_aircraft.drain(..) {
            ids.append_value(&row.aircraft_id);
            arrivals.append_value(row.arrival_time);
            departures.append_value(row.departure_time);
            turnarounds.append_value(row.turnaround_time);
            stands.append_value(row.assigned_stand_type.as_str());
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.aircraft_schema),
            vec![
                Arc::new(ids.finish()),
                Arc::new(arrivals.finish()),
                Arc::new(departures.finish()),
                Arc::new(turnarounds.finish()),
                Arc::new(stands.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn flush_minutes(&mut self) -> OutputResult<()> {
        if self.pending_minutes.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.minutes.as_mut() else {
            return Ok(());
        };

        let mut minutes   = UInt64Builder::new();
        let mut occupied  = UInt32Builder::new();
        let mut available = UInt32Builder::new();
        let mut parked    = UInt64Builder::new();
        let mut remote    = UInt64Builder::new();

        for row in self.pending_minutes.drain(..) {
            minutes.append_value(row.minute);
            occupied.append_value(row.plb_occupied);
            available.append_value(row.plb_available);
            parked.append_value(row.total_parked);
            remote.append_value(row.remote_occupied);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.minute_schema),
            vec![
                Arc::new(minutes.finish()),
                Arc::new(occupied.finish()),
                Arc::new(available.finish()),
                Arc::new(parked.finish()),
                Arc::new(remote.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }
}

impl OutputWriter for ParquetWriter {
    fn write_aircraft_results(&mut self, rows: &[AircraftResultRow]) -> OutputResult<()> {
        if self.aircraft.is_none() {
            return Ok(());
        }
        self.pending_aircraft.extend_from_slice(rows);
        if self.pending_aircraft.len() >= BATCH_ROWS {
            self.flush_aircraft()?;
        }
        Ok(())
    }

    fn write_minute_snapshot(&mut self, row: &MinuteSnapshotRow) -> OutputResult<()> {
        if self.minutes.is_none() {
            return Ok(());
        }
        self.pending_minutes.push(*row);
        if self.pending_minutes.len() >= BATCH_ROWS {
            self.flush_minutes()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.flush_aircraft()?;
        self.flush_minutes()?;
        if let Some(w) = self.aircraft.take() {
            w.close()?;
        }
        if let Some(w) = self.minutes.take() {
            w.close()?;
        }
        Ok(())
    }
}
