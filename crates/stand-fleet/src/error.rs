use thiserror::Error;

use crate::AircraftState;

/// Input validation failures raised while building a [`Fleet`](crate::Fleet).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("row {row}: aircraft identifier is empty")]
    EmptyId { row: usize },

    #[error("aircraft {0:?} appears more than once in the input")]
    DuplicateId(String),

    #[error("aircraft {id:?}: arrival time {value} is negative")]
    NegativeArrival { id: String, value: i64 },

    #[error("aircraft {id:?}: turnaround time {value} must be positive")]
    NonPositiveTurnaround { id: String, value: i64 },

    #[error("input has {0} aircraft; at most 4294967295 are supported")]
    TooManyAircraft(usize),
}

pub type FleetResult<T> = Result<T, FleetError>;

/// An illegal lifecycle transition.  Always an engine defect.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("aircraft {label:?} cannot {action} while {state}")]
pub struct TransitionError {
    pub label:  String,
    pub state:  AircraftState,
    pub action: &'static str,
}
