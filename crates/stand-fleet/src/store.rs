//! Fleet storage: every aircraft of a run, indexed by `AircraftId`.
//!
//! The `Vec<Aircraft>` is ordered by label, so `AircraftId(i)` is the i-th
//! label in ascending order.  A label → id map serves lookups coming from
//! outside the engine (tests, output joins).

use stand_core::AircraftId;

use crate::Aircraft;

#[cfg(not(feature = "fx-hash"))]
type LabelIndex = std::collections::HashMap<String, AircraftId>;
#[cfg(feature = "fx-hash")]
type LabelIndex = rustc_hash::FxHashMap<String, AircraftId>;

/// All aircraft of one run.  Create with [`FleetBuilder`](crate::FleetBuilder).
#[derive(Clone, Debug)]
pub struct Fleet {
    aircraft: Vec<Aircraft>,
    by_label: LabelIndex,
}

impl Fleet {
    /// Number of aircraft.
    #[inline]
    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Borrow one aircraft.  `None` for an id outside the fleet.
    #[inline]
    pub fn get(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.get(id.index())
    }

    /// Mutably borrow one aircraft.  Only the engine's event handlers call
    /// this.
    #[inline]
    pub fn get_mut(&mut self, id: AircraftId) -> Option<&mut Aircraft> {
        self.aircraft.get_mut(id.index())
    }

    /// Resolve a label to its id.
    pub fn lookup(&self, label: &str) -> Option<AircraftId> {
        self.by_label.get(label).copied()
    }

    /// Iterator over all `AircraftId`s in ascending (label) order.
    pub fn ids(&self) -> impl Iterator<Item = AircraftId> + '_ {
        (0..self.aircraft.len() as u32).map(AircraftId)
    }

    /// Iterator over `(id, aircraft)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (AircraftId, &Aircraft)> + '_ {
        self.aircraft
            .iter()
            .enumerate()
            .map(|(i, a)| (AircraftId(i as u32), a))
    }

    // ── Package-private constructor used by FleetBuilder ──────────────────

    /// `aircraft` must already be sorted by label with no duplicates.
    pub(crate) fn from_sorted(aircraft: Vec<Aircraft>) -> Self {
        let mut by_label = LabelIndex::default();
        by_label.reserve(aircraft.len());
        for (i, a) in aircraft.iter().enumerate() {
            by_label.insert(a.label().to_owned(), AircraftId(i as u32));
        }
        Self { aircraft, by_label }
    }
}
