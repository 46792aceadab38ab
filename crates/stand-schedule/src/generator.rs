//! Synthetic arrival tables.
//!
//! Arrivals are uniform over the simulated window, sorted, then truncated to
//! whole minutes.  Turnarounds are normal around `mean_turnaround` with a
//! standard deviation of `(max − min) / 6`, clipped to `[min, max]` and
//! truncated.  Labels are `AC0000`, `AC0001`, … in arrival order.
//!
//! The same config (seed included) always produces the same table.

use rand_distr::Normal;

use stand_core::SimRng;
use stand_fleet::ArrivalRecord;

use crate::{ScheduleError, ScheduleResult};

/// Parameters for [`generate_arrivals`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Length of the arrival window in hours.
    pub hours:             u32,
    /// Average arrivals per hour; the table has `hours × arrivals_per_hour` rows.
    pub arrivals_per_hour: u32,
    /// Mean turnaround in minutes (before clipping).
    pub mean_turnaround:   f64,
    pub min_turnaround:    u32,
    pub max_turnaround:    u32,
    pub seed:              u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            hours:             6,
            arrivals_per_hour: 45,
            mean_turnaround:   58.0,
            min_turnaround:    30,
            max_turnaround:    120,
            seed:              42,
        }
    }
}

impl GeneratorConfig {
    /// Number of rows [`generate_arrivals`] will produce.
    pub fn aircraft_count(&self) -> usize {
        self.hours as usize * self.arrivals_per_hour as usize
    }

    fn validate(&self) -> ScheduleResult<()> {
        if self.min_turnaround == 0 {
            return Err(ScheduleError::Generator("min_turnaround must be positive".into()));
        }
        if self.min_turnaround > self.max_turnaround {
            return Err(ScheduleError::Generator(format!(
                "min_turnaround {} exceeds max_turnaround {}",
                self.min_turnaround, self.max_turnaround
            )));
        }
        if !self.mean_turnaround.is_finite() {
            return Err(ScheduleError::Generator("mean_turnaround must be finite".into()));
        }
        Ok(())
    }
}

/// Generate a synthetic input table.
pub fn generate_arrivals(config: &GeneratorConfig) -> ScheduleResult<Vec<ArrivalRecord>> {
    config.validate()?;

    let count = config.aircraft_count();
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut rng = SimRng::new(config.seed);
    let window = f64::from(config.hours) * 60.0;

    let mut arrivals: Vec<f64> = (0..count).map(|_| rng.gen_range(0.0..window)).collect();
    arrivals.sort_by(f64::total_cmp);

    let min = f64::from(config.min_turnaround);
    let max = f64::from(config.max_turnaround);
    let normal = Normal::new(config.mean_turnaround, (max - min) / 6.0)
        .map_err(|e| ScheduleError::Generator(e.to_string()))?;

    let records = arrivals
        .into_iter()
        .enumerate()
        .map(|(i, arrival)| {
            let turnaround: f64 = rng.sample(&normal);
            ArrivalRecord::new(
                format!("AC{i:04}"),
                arrival as i64,
                turnaround.clamp(min, max) as i64,
            )
        })
        .collect();

    Ok(records)
}
