//! Stand classes.

use std::str::FromStr;

use crate::CoreError;

/// The kind of parking position an aircraft was given on arrival.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum StandClass {
    /// Passenger-loading-bridge stand.  Capacity limited.
    Plb,
    /// Remote stand, bus boarding.  Treated as unlimited.
    Remote,
}

impl StandClass {
    #[inline]
    pub fn is_plb(self) -> bool {
        matches!(self, StandClass::Plb)
    }

    /// Label used in output tables.
    pub fn as_str(self) -> &'static str {
        match self {
            StandClass::Plb    => "PLB",
            StandClass::Remote => "REMOTE",
        }
    }
}

impl std::fmt::Display for StandClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PLB"    => Ok(StandClass::Plb),
            "REMOTE" => Ok(StandClass::Remote),
            other    => Err(CoreError::UnknownStandClass(other.to_owned())),
        }
    }
}
