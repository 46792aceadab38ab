//! Summary metrics over a run's two result tables.
//!
//! | Metric                 | Source table | Definition                                  |
//! |------------------------|--------------|---------------------------------------------|
//! | PLB utilization        | per-minute   | mean(`plb_occupied`) / PLB total × 100      |
//! | PLB assignment rate    | per-aircraft | PLB aircraft / departed aircraft × 100      |
//! | Peak parked aircraft   | per-minute   | max(`total_parked`), first minute reached   |
//! | Ground time            | per-aircraft | mean, sample std-dev, min, max turnaround   |
//!
//! Only departed aircraft have result rows, so aircraft still parked at the
//! horizon count towards utilization and peak but not towards the per-aircraft
//! figures.

use std::fmt;
use std::fs;
use std::path::Path;

use stand_core::StandClass;
use stand_sim::{AircraftResultRow, MinuteSnapshotRow, RunTables};

use crate::OutputResult;

const RULE: &str = "======================================================================";

/// Turnaround statistics over departed aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundTime {
    pub mean:    f64,
    /// Sample standard deviation (n − 1 denominator); 0 for a single aircraft.
    pub std_dev: f64,
    pub min:     u64,
    pub max:     u64,
}

/// The four headline metrics of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationMetrics {
    pub plb_total:           u32,
    pub avg_plb_occupied:    f64,
    /// 0 when the run had no PLB stands or no minutes.
    pub plb_utilization_pct: f64,

    pub plb_count:          usize,
    pub remote_count:       usize,
    /// 0 when no aircraft departed.
    pub plb_assignment_pct: f64,

    pub peak_parked: u64,
    /// First minute at which `peak_parked` was reached.  `None` without
    /// snapshots.
    pub peak_minute: Option<u64>,

    /// `None` when no aircraft departed.
    pub ground_time: Option<GroundTime>,
}

impl SimulationMetrics {
    pub fn compute(
        aircraft:  &[AircraftResultRow],
        minutes:   &[MinuteSnapshotRow],
        plb_total: u32,
    ) -> Self {
        let avg_plb_occupied = if minutes.is_empty() {
            0.0
        } else {
            minutes.iter().map(|m| f64::from(m.plb_occupied)).sum::<f64>() / minutes.len() as f64
        };
        let plb_utilization_pct = if plb_total == 0 {
            0.0
        } else {
            avg_plb_occupied / f64::from(plb_total) * 100.0
        };

        let plb_count = aircraft
            .iter()
            .filter(|r| r.assigned_stand_type == StandClass::Plb)
            .count();
        let remote_count = aircraft.len() - plb_count;
        let plb_assignment_pct = if aircraft.is_empty() {
            0.0
        } else {
            plb_count as f64 / aircraft.len() as f64 * 100.0
        };

        // First occurrence wins on ties.
        let mut peak: Option<(u64, u64)> = None;
        for m in minutes {
            if peak.is_none_or(|(parked, _)| m.total_parked > parked) {
                peak = Some((m.total_parked, m.minute));
            }
        }

        Self {
            plb_total,
            avg_plb_occupied,
            plb_utilization_pct,
            plb_count,
            remote_count,
            plb_assignment_pct,
            peak_parked: peak.map_or(0, |(parked, _)| parked),
            peak_minute: peak.map(|(_, minute)| minute),
            ground_time: ground_time(aircraft),
        }
    }

    /// Metrics of a finished run, using its configured PLB count.
    pub fn from_tables(tables: &RunTables) -> Self {
        Self::compute(&tables.aircraft, &tables.minutes, tables.plb_total)
    }

    /// Number of departed aircraft.
    pub fn departed(&self) -> usize {
        self.plb_count + self.remote_count
    }

    /// Write the [`Display`](fmt::Display) summary to `path`, creating parent
    /// directories as needed.
    pub fn write_summary(&self, path: &Path) -> OutputResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

fn ground_time(aircraft: &[AircraftResultRow]) -> Option<GroundTime> {
    let n = aircraft.len();
    let min = aircraft.iter().map(|r| r.turnaround_time).min()?;
    let max = aircraft.iter().map(|r| r.turnaround_time).max()?;
    let mean = aircraft.iter().map(|r| r.turnaround_time as f64).sum::<f64>() / n as f64;
    let std_dev = if n < 2 {
        0.0
    } else {
        let ss: f64 = aircraft
            .iter()
            .map(|r| (r.turnaround_time as f64 - mean).powi(2))
            .sum();
        (ss / (n - 1) as f64).sqrt()
    };
    Some(GroundTime { mean, std_dev, min, max })
}

impl fmt::Display for SimulationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "SIMULATION METRICS SUMMARY")?;
        writeln!(f, "{RULE}")?;

        writeln!(f)?;
        writeln!(f, "1. Average PLB Stand Utilization")?;
        writeln!(f, "   Value: {:.2}%", self.plb_utilization_pct)?;
        writeln!(
            f,
            "   Average Occupied: {:.1} / {} stands",
            self.avg_plb_occupied, self.plb_total
        )?;

        writeln!(f)?;
        writeln!(f, "2. Percentage of Aircraft Assigned PLB")?;
        writeln!(f, "   Value: {:.2}%", self.plb_assignment_pct)?;
        writeln!(
            f,
            "   PLB: {} aircraft | Remote: {} aircraft",
            self.plb_count, self.remote_count
        )?;

        writeln!(f)?;
        writeln!(f, "3. Peak Concurrent Parked Aircraft")?;
        writeln!(f, "   Value: {} aircraft", self.peak_parked)?;
        match self.peak_minute {
            Some(m) => writeln!(
                f,
                "   Occurred at: {:.2} hours ({m} minutes)",
                m as f64 / 60.0
            )?,
            None => writeln!(f, "   Occurred at: -")?,
        }

        writeln!(f)?;
        writeln!(f, "4. Average Ground Time")?;
        match self.ground_time {
            Some(g) => {
                writeln!(f, "   Value: {:.2} minutes", g.mean)?;
                writeln!(
                    f,
                    "   Range: {} - {} minutes (±{:.1} std dev)",
                    g.min, g.max, g.std_dev
                )?;
            }
            None => writeln!(f, "   Value: - (no aircraft departed)")?,
        }

        writeln!(f)?;
        writeln!(f, "{RULE}")
    }
}
