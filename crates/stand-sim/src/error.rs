use stand_core::{AircraftId, CoreError, Minute};
use stand_fleet::{FleetError, TransitionError};
use stand_schedule::ScheduleError;
use thiserror::Error;

/// Engine errors.
///
/// `Config` and `Input` are raised by [`SimBuilder::build`][crate::SimBuilder::build]
/// before any minute is simulated.  Every other variant means an engine
/// invariant broke mid-run; the run stops rather than continuing with
/// corrupted counters.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("invalid input: {0}")]
    Input(#[from] FleetError),

    #[error("event references unknown aircraft {0}")]
    UnknownAircraft(AircraftId),

    #[error("PLB claim with none of {total} stands available")]
    PoolExhausted { total: u32 },

    #[error("PLB release with all {total} stands already available")]
    PoolOverflow { total: u32 },

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error("aircraft {0} departed but was not in the parked set")]
    NotParked(AircraftId),

    #[error("{minute}: pool reports {pool} PLB stands occupied but {parked} PLB aircraft are parked")]
    OccupancyMismatch { minute: Minute, pool: u32, parked: u64 },

    #[error("aircraft {0:?} already has a result row")]
    DuplicateResult(String),

    #[error("snapshot for minute {got} out of order (expected minute {expected})")]
    SnapshotOutOfOrder { expected: u64, got: u64 },

    #[error("event queue error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("run has not completed (clock at {0})")]
    NotCompleted(Minute),
}

pub type SimResult<T> = Result<T, SimError>;
