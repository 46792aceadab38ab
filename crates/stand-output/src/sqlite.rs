//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `aircraft_results` and `minute_snapshots`.  `aircraft_results`
//! keeps the departure-processing order in its `seq` column.

use std::path::Path;

use rusqlite::Connection;
use stand_sim::{AircraftResultRow, MinuteSnapshotRow};

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    next_seq: i64,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    ///
    /// Existing rows from a previous run are removed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS aircraft_results (
                 seq                 INTEGER PRIMARY KEY,
                 aircraft_id         TEXT    NOT NULL UNIQUE,
                 arrival_time        INTEGER NOT NULL,
                 departure_time      INTEGER NOT NULL,
                 turnaround_time     INTEGER NOT NULL,
                 assigned_stand_type TEXT    NOT NULL
                     CHECK (assigned_stand_type IN ('PLB', 'REMOTE'))
             );
             CREATE TABLE IF NOT EXISTS minute_snapshots (
                 minute          INTEGER PRIMARY KEY,
                 plb_occupied    INTEGER NOT NULL,
                 plb_available   INTEGER NOT NULL,
                 total_parked    INTEGER NOT NULL,
                 remote_occupied INTEGER NOT NULL
             );
             DELETE FROM aircraft_results;
             DELETE FROM minute_snapshots;",
        )?;

        Ok(Self { conn, next_seq: 0, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_aircraft_results(&mut self, rows: &[AircraftResultRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO aircraft_results \
                 (seq, aircraft_id, arrival_time, departure_time, turnaround_time, assigned_stand_type) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    self.next_seq,
                    row.aircraft_id,
                    row.arrival_time as i64,
                    row.departure_time as i64,
                    row.turnaround_time as i64,
                    row.assigned_stand_type.as_str(),
                ])?;
                self.next_seq += 1;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_minute_snapshot(&mut self, row: &MinuteSnapshotRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO minute_snapshots \
             (minute, plb_occupied, plb_available, total_parked, remote_occupied) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.minute as i64,
                row.plb_occupied,
                row.plb_available,
                row.total_parked as i64,
                row.remote_occupied as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
