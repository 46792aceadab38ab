//! Event kinds and the same-minute tie-break policy.

use std::fmt;

/// What happens to an aircraft at an event.
///
/// The derived `Ord` follows the label order (`ARRIVAL < DEPARTURE`).  Queue
/// ordering goes through [`TieBreak::rank`], not through this impl.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum EventKind {
    Arrival,
    Departure,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Arrival   => "ARRIVAL",
            EventKind::Departure => "DEPARTURE",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering of ARRIVAL and DEPARTURE events scheduled for the same minute.
///
/// The aircraft label is always the second key, whatever the policy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TieBreak {
    /// Arrivals are applied before departures.  Matches the kind labels'
    /// string order (`"ARRIVAL" < "DEPARTURE"`).  An arrival therefore
    /// cannot take a PLB stand released in the same minute.
    #[default]
    ArrivalsFirst,

    /// Departures are applied first, so stands released at minute `t` are
    /// available to aircraft arriving at `t`.
    DeparturesFirst,
}

impl TieBreak {
    /// Sort rank of `kind` under this policy; lower ranks are processed first.
    #[inline]
    pub fn rank(self, kind: EventKind) -> u8 {
        match (self, kind) {
            (TieBreak::ArrivalsFirst, EventKind::Arrival)     => 0,
            (TieBreak::ArrivalsFirst, EventKind::Departure)   => 1,
            (TieBreak::DeparturesFirst, EventKind::Departure) => 0,
            (TieBreak::DeparturesFirst, EventKind::Arrival)   => 1,
        }
    }
}
