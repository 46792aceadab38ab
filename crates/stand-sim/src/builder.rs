//! Fluent builder for constructing a [`Sim`].

use stand_core::{EventKind, Minute, SimConfig, TieBreak};
use stand_fleet::{ArrivalRecord, FleetBuilder};
use stand_schedule::EventQueue;
use tracing::debug;

use crate::sim::ParkedSet;
use crate::{PlbPool, RunRecorder, Sim, SimPhase, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - The arrival records, e.g. from [`stand_schedule::load_arrivals_csv`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                          |
/// |--------------------|----------------------------------|
/// | `.config(c)`       | `SimConfig::default()`           |
/// | `.plb_stands(n)`   | 35                               |
/// | `.horizon(m)`      | `Minute(360)`                    |
/// | `.tie_break(t)`    | `TieBreak::ArrivalsFirst`        |
///
/// # Example
///
/// ```rust,ignore
/// let records = load_arrivals_csv(Path::new("input.csv"))?;
/// let mut sim = SimBuilder::new(records).plb_stands(20).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    records: Vec<ArrivalRecord>,
}

impl SimBuilder {
    /// Create a builder over `records` with the default configuration.
    pub fn new(records: Vec<ArrivalRecord>) -> Self {
        Self { config: SimConfig::default(), records }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn plb_stands(mut self, plb_stands: u32) -> Self {
        self.config.plb_stands = plb_stands;
        self
    }

    /// Last simulated minute (inclusive).
    pub fn horizon(mut self, horizon: Minute) -> Self {
        self.config.horizon = horizon;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Validate the configuration and records, seed one ARRIVAL per aircraft
    /// and return a [`Sim`] in the `Ready` phase.
    ///
    /// Nothing is simulated if validation fails.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let fleet = FleetBuilder::new().records(self.records).build()?;

        let mut queue = EventQueue::with_capacity(self.config.tie_break, fleet.len() * 2);
        for (id, aircraft) in fleet.iter() {
            queue.schedule(aircraft.arrival(), EventKind::Arrival, id)?;
        }

        let beyond_horizon = fleet
            .iter()
            .filter(|(_, a)| a.arrival() > self.config.horizon)
            .count();
        debug!(
            aircraft = fleet.len(),
            beyond_horizon,
            plb_stands = self.config.plb_stands,
            horizon = self.config.horizon.0,
            tie_break = ?self.config.tie_break,
            "seeded arrivals"
        );

        let minute_count = usize::try_from(self.config.minute_count()).unwrap_or(usize::MAX);
        Ok(Sim {
            clock:    self.config.make_clock(),
            pool:     PlbPool::new(self.config.plb_stands),
            recorder: RunRecorder::new(fleet.len(), minute_count.min(1 << 20)),
            parked:   ParkedSet::default(),
            phase:    SimPhase::Ready,
            config:   self.config,
            fleet,
            queue,
        })
    }
}
