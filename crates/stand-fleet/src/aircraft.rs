//! The aircraft entity and its lifecycle.
//!
//! ```text
//! SCHEDULED ──park(class)──▶ PARKED ──depart()──▶ DEPARTED
//! ```
//!
//! The stand class is written by `park` and never again.  Departure time is
//! computed once in [`Aircraft::new`].

use std::fmt;

use stand_core::{Minute, StandClass};

use crate::TransitionError;

/// Lifecycle state of one aircraft.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum AircraftState {
    #[default]
    Scheduled,
    Parked,
    Departed,
}

impl AircraftState {
    pub fn as_str(self) -> &'static str {
        match self {
            AircraftState::Scheduled => "scheduled",
            AircraftState::Parked    => "parked",
            AircraftState::Departed  => "departed",
        }
    }
}

impl fmt::Display for AircraftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flight's timing and assignment state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aircraft {
    label:      String,
    arrival:    Minute,
    turnaround: u64,
    departure:  Minute,
    stand:      Option<StandClass>,
    state:      AircraftState,
}

impl Aircraft {
    /// Create a scheduled aircraft.  Inputs are assumed validated by
    /// [`FleetBuilder`](crate::FleetBuilder).
    pub fn new(label: impl Into<String>, arrival: Minute, turnaround: u64) -> Self {
        Self {
            label: label.into(),
            arrival,
            turnaround,
            departure: arrival + turnaround,
            stand: None,
            state: AircraftState::Scheduled,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn arrival(&self) -> Minute {
        self.arrival
    }

    #[inline]
    pub fn turnaround(&self) -> u64 {
        self.turnaround
    }

    #[inline]
    pub fn departure(&self) -> Minute {
        self.departure
    }

    /// `None` until the arrival has been processed.
    #[inline]
    pub fn stand(&self) -> Option<StandClass> {
        self.stand
    }

    #[inline]
    pub fn state(&self) -> AircraftState {
        self.state
    }

    /// `true` if the aircraft occupies a stand at `minute`, judged from its
    /// schedule alone (`arrival ≤ minute < departure`).
    #[inline]
    pub fn on_ground_at(&self, minute: Minute) -> bool {
        self.arrival <= minute && minute < self.departure
    }

    /// SCHEDULED → PARKED, recording the stand class.
    pub fn park(&mut self, class: StandClass) -> Result<(), TransitionError> {
        if self.state != AircraftState::Scheduled || self.stand.is_some() {
            return Err(self.illegal("park"));
        }
        self.stand = Some(class);
        self.state = AircraftState::Parked;
        Ok(())
    }

    /// PARKED → DEPARTED.  Returns the class of the stand being vacated.
    pub fn depart(&mut self) -> Result<StandClass, TransitionError> {
        match (self.state, self.stand) {
            (AircraftState::Parked, Some(class)) => {
                self.state = AircraftState::Departed;
                Ok(class)
            }
            _ => Err(self.illegal("depart")),
        }
    }

    fn illegal(&self, action: &'static str) -> TransitionError {
        TransitionError {
            label: self.label.clone(),
            state: self.state,
            action,
        }
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Aircraft({}, arrival={}, departure={}, stand=",
            self.label, self.arrival.0, self.departure.0
        )?;
        match self.stand {
            Some(class) => write!(f, "{class})"),
            None        => f.write_str("-)"),
        }
    }
}
