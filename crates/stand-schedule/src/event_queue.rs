//! `EventQueue` — time-ordered store of pending ARRIVAL/DEPARTURE events.
//!
//! # Ordering
//!
//! A `BinaryHeap` of `Reverse` entries keyed by
//! `(minute, tie_break.rank(kind), aircraft)`.  Insert and pop are
//! O(log n); a run of A aircraft pushes exactly 2·A events.
//!
//! # Drain contract
//!
//! The engine asks for events due at the current minute only.  Once a minute
//! has been drained it becomes the queue's floor, and scheduling anything
//! before the floor is refused: such an event could never be delivered.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use stand_core::{AircraftId, EventKind, Minute, TieBreak};

use crate::{ScheduleError, ScheduleResult};

/// One pending event.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Event {
    pub minute:   Minute,
    pub kind:     EventKind,
    pub aircraft: AircraftId,
}

/// Heap entry.  Field order is the comparison order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Queued {
    minute:   Minute,
    rank:     u8,
    aircraft: AircraftId,
    kind:     EventKind,
}

impl From<Queued> for Event {
    fn from(q: Queued) -> Event {
        Event { minute: q.minute, kind: q.kind, aircraft: q.aircraft }
    }
}

/// A min-priority queue of events, ordered by minute, then kind (per the
/// [`TieBreak`] policy), then aircraft.
pub struct EventQueue {
    heap:      BinaryHeap<Reverse<Queued>>,
    tie_break: TieBreak,
    /// Last minute handed to `pop_due` / `drain_due`.  `None` before the
    /// first drain.
    floor:     Option<Minute>,
}

impl EventQueue {
    pub fn new(tie_break: TieBreak) -> Self {
        Self::with_capacity(tie_break, 0)
    }

    /// Pre-size the heap, typically to `2 × aircraft`.
    pub fn with_capacity(tie_break: TieBreak, capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            tie_break,
            floor: None,
        }
    }

    #[inline]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Insert an event.
    ///
    /// Fails with [`ScheduleError::EventInPast`] if `minute` is earlier than
    /// a minute that has already been drained.  Scheduling for the minute
    /// currently being drained is allowed; the event is delivered in the same
    /// drain.
    pub fn schedule(
        &mut self,
        minute:   Minute,
        kind:     EventKind,
        aircraft: AircraftId,
    ) -> ScheduleResult<()> {
        if let Some(floor) = self.floor {
            if minute < floor {
                return Err(ScheduleError::EventInPast { minute, floor });
            }
        }
        let rank = self.tie_break.rank(kind);
        self.heap.push(Reverse(Queued { minute, rank, aircraft, kind }));
        Ok(())
    }

    /// The next event, if it is due at exactly `now`.  Does not remove it.
    pub fn peek_due(&self, now: Minute) -> Option<Event> {
        match self.heap.peek() {
            Some(Reverse(q)) if q.minute == now => Some((*q).into()),
            _ => None,
        }
    }

    /// Remove and return the next event if it is due at exactly `now`.
    ///
    /// Marks `now` as drained even when nothing is due.
    pub fn pop_due(&mut self, now: Minute) -> Option<Event> {
        self.floor = Some(self.floor.map_or(now, |f| f.max(now)));
        self.peek_due(now)?;
        self.heap.pop().map(|Reverse(q)| q.into())
    }

    /// Remove and return every event due at `now`, in processing order.
    ///
    /// Events scheduled for `now` while the caller is iterating the returned
    /// `Vec` are *not* included; use [`pop_due`](Self::pop_due) in a loop
    /// when handlers may schedule same-minute events.
    pub fn drain_due(&mut self, now: Minute) -> Vec<Event> {
        let mut due = Vec::new();
        while let Some(event) = self.pop_due(now) {
            due.push(event);
        }
        due
    }

    /// The earliest minute with a pending event, or `None` if empty.
    pub fn next_minute(&self) -> Option<Minute> {
        self.heap.peek().map(|Reverse(q)| q.minute)
    }

    /// Total number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
