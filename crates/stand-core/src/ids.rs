//! Strongly typed aircraft identifier.
//!
//! Input rows carry free-form string labels (`AC0042`).  The fleet builder
//! sorts labels and hands out dense `AircraftId`s in ascending label order,
//! so `AircraftId` ordering is label ordering.  Event tie-breaks rely on that.

use std::fmt;

/// Index of an aircraft in fleet storage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AircraftId(pub u32);

impl AircraftId {
    /// Sentinel meaning "no valid aircraft".
    pub const INVALID: AircraftId = AircraftId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for AircraftId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AircraftId({})", self.0)
    }
}

impl From<AircraftId> for usize {
    #[inline(always)]
    fn from(id: AircraftId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AircraftId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AircraftId, Self::Error> {
        u32::try_from(n).map(AircraftId)
    }
}
