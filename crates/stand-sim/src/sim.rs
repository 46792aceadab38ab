//! The `Sim` struct and its minute loop.

use stand_core::{AircraftId, EventKind, Minute, SimClock, SimConfig, StandClass};
use stand_fleet::{ArrivalRecord, Fleet};
use stand_schedule::{Event, EventQueue};
use tracing::{debug, info, trace};

use crate::{
    AircraftResultRow, MinuteSnapshotRow, NoopObserver, PlbPool, RunRecorder, RunTables,
    SimBuilder, SimError, SimObserver, SimResult,
};

#[cfg(not(feature = "fx-hash"))]
pub(crate) type ParkedSet = std::collections::HashSet<AircraftId>;
#[cfg(feature = "fx-hash")]
pub(crate) type ParkedSet = rustc_hash::FxHashSet<AircraftId>;

/// Where a [`Sim`] is in its lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimPhase {
    /// Built and seeded; no minute processed yet.
    Ready,
    /// At least one minute processed, horizon not yet reached.
    Running,
    /// Every minute `0..=horizon` processed.  Terminal.
    Completed,
}

/// The stand allocation engine.
///
/// `Sim` owns all run state and drives the minute loop:
///
/// 1. **Drain**: pop every event due at the current minute, in queue order
///    (minute, tie-break rank, aircraft label).
/// 2. **Apply**: an ARRIVAL takes a PLB if one is free and a REMOTE stand
///    otherwise, then schedules its DEPARTURE.  A DEPARTURE frees its stand
///    and records the aircraft's result row.
/// 3. **Snapshot**: record PLB occupancy and parked counts after step 2.
///
/// Events beyond the horizon are never drained.  Aircraft still parked at
/// the end have no result row but are counted in the final snapshot.
///
/// Create via [`SimBuilder`].
pub struct Sim {
    pub(crate) config:   SimConfig,
    pub(crate) clock:    SimClock,
    pub(crate) fleet:    Fleet,
    pub(crate) queue:    EventQueue,
    pub(crate) pool:     PlbPool,
    pub(crate) parked:   ParkedSet,
    pub(crate) recorder: RunRecorder,
    pub(crate) phase:    SimPhase,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The next minute to process.  `horizon + 1` once completed.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn pool(&self) -> &PlbPool {
        &self.pool
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Number of aircraft currently on a stand.
    pub fn parked_count(&self) -> usize {
        self.parked.len()
    }

    /// Events still waiting in the queue.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    pub fn recorder(&self) -> &RunRecorder {
        &self.recorder
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current minute through `config.horizon`.
    ///
    /// A no-op once the run has completed.  Use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.phase == SimPhase::Ready {
            info!(
                aircraft = self.fleet.len(),
                plb_stands = self.config.plb_stands,
                horizon = self.config.horizon.0,
                "simulation start"
            );
        }
        while self.step(observer)?.is_some() {}
        Ok(())
    }

    /// Run at most `n` minutes from the current position, stopping early at
    /// the horizon.
    pub fn run_minutes<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if self.step(observer)?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Process exactly one minute and return its snapshot.
    ///
    /// Returns `Ok(None)` without doing anything once the run has completed.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<MinuteSnapshotRow>> {
        if self.phase == SimPhase::Completed {
            return Ok(None);
        }
        self.phase = SimPhase::Running;

        let now = self.clock.current;
        observer.on_minute_start(now);

        while let Some(event) = self.queue.pop_due(now) {
            self.apply(event, observer)?;
        }

        let snapshot = self.snapshot(now)?;
        self.recorder.push_snapshot(snapshot)?;
        observer.on_snapshot(&snapshot);
        self.clock.advance();

        if now >= self.config.horizon {
            self.phase = SimPhase::Completed;
            info!(
                departed = self.recorder.aircraft_results().len(),
                still_parked = self.parked.len(),
                pending_events = self.queue.len(),
                "simulation end"
            );
            observer.on_sim_end(self.clock.current);
        }
        Ok(Some(snapshot))
    }

    /// Consume a completed run and return its tables.
    pub fn finish(self) -> SimResult<RunTables> {
        if self.phase != SimPhase::Completed {
            return Err(SimError::NotCompleted(self.clock.current));
        }
        Ok(self.recorder.into_tables(self.config.plb_stands))
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn apply<O: SimObserver>(&mut self, event: Event, observer: &mut O) -> SimResult<()> {
        trace!(minute = event.minute.0, kind = %event.kind, aircraft = %event.aircraft, "event");
        match event.kind {
            EventKind::Arrival   => self.arrive(event.minute, event.aircraft, observer),
            EventKind::Departure => self.depart(event.aircraft, observer),
        }
    }

    fn arrive<O: SimObserver>(&mut self, now: Minute, id: AircraftId, observer: &mut O) -> SimResult<()> {
        let class = if self.pool.has_free() { StandClass::Plb } else { StandClass::Remote };

        let aircraft = self.fleet.get_mut(id).ok_or(SimError::UnknownAircraft(id))?;
        aircraft.park(class)?;
        let departure = aircraft.departure();

        if class.is_plb() {
            self.pool.claim()?;
        } else {
            debug!(minute = now.0, aircraft = aircraft.label(), "no PLB free; assigned REMOTE");
        }
        self.parked.insert(id);
        self.queue.schedule(departure, EventKind::Departure, id)?;

        observer.on_arrival(now, aircraft);
        Ok(())
    }

    fn depart<O: SimObserver>(&mut self, id: AircraftId, observer: &mut O) -> SimResult<()> {
        let aircraft = self.fleet.get_mut(id).ok_or(SimError::UnknownAircraft(id))?;
        let class = aircraft.depart()?;
        let row = AircraftResultRow::from_aircraft(aircraft).ok_or(SimError::NotParked(id))?;

        if class.is_plb() {
            self.pool.release()?;
        }
        if !self.parked.remove(&id) {
            return Err(SimError::NotParked(id));
        }

        observer.on_departure(&row);
        self.recorder.push_result(id, row)
    }

    // ── Snapshot ──────────────────────────────────────────────────────────

    fn snapshot(&self, now: Minute) -> SimResult<MinuteSnapshotRow> {
        let total_parked = self.parked.len() as u64;
        let plb_parked = self
            .parked
            .iter()
            .filter_map(|&id| self.fleet.get(id))
            .filter(|a| a.stand() == Some(StandClass::Plb))
            .count() as u64;

        let plb_occupied = self.pool.occupied();
        if plb_parked != u64::from(plb_occupied) {
            return Err(SimError::OccupancyMismatch {
                minute: now,
                pool:   plb_occupied,
                parked: plb_parked,
            });
        }

        Ok(MinuteSnapshotRow {
            minute: now.0,
            plb_occupied,
            plb_available: self.pool.available(),
            total_parked,
            remote_occupied: total_parked - plb_parked,
        })
    }
}

/// Build, run and finish a simulation in one call.
pub fn simulate(config: SimConfig, records: Vec<ArrivalRecord>) -> SimResult<RunTables> {
    let mut sim = SimBuilder::new(records).config(config).build()?;
    sim.run(&mut NoopObserver)?;
    sim.finish()
}
