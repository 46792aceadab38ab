//! Simulation time model.
//!
//! # Design
//!
//! Time is a whole-minute counter, `Minute`, starting at 0 for the first
//! simulated minute.  The run covers minutes `0..=horizon`, so a horizon of
//! 360 processes 361 minutes (six hours plus the closing minute).
//!
//! Integer minutes keep event arithmetic exact and make same-minute
//! comparisons trivially deterministic.

use std::fmt;

use crate::{CoreError, CoreResult, TieBreak};

// ── Minute ────────────────────────────────────────────────────────────────────

/// An absolute simulation minute.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Return the minute `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Minute {
        Minute(self.0 + n)
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Minute) -> u64 {
        self.0 - earlier.0
    }

    /// Split into whole hours and the remaining minutes.
    #[inline]
    pub fn hours_minutes(self) -> (u64, u64) {
        (self.0 / 60, self.0 % 60)
    }
}

impl std::ops::Add<u64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u64) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Minute) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The run's clock.  Holds no heap data.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    /// The current minute, advanced by `SimClock::advance()` each iteration.
    pub current: Minute,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one minute.
    #[inline]
    pub fn advance(&mut self) {
        self.current = Minute(self.current.0 + 1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.current.hours_minutes();
        write!(f, "{} ({:02}:{:02})", self.current, h, m)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Default number of PLB stands.
pub const DEFAULT_PLB_STANDS: u32 = 35;

/// Default horizon: six hours.
pub const DEFAULT_HORIZON: Minute = Minute(360);

/// Top-level simulation configuration.
///
/// Scalar parameters only.  Applications may load it from JSON with the
/// `serde` feature; missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of passenger-loading-bridge stands.  Remote stands are unbounded.
    pub plb_stands: u32,

    /// Last simulated minute (inclusive).
    pub horizon: Minute,

    /// Ordering of ARRIVAL vs DEPARTURE events that fall on the same minute.
    pub tie_break: TieBreak,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            plb_stands: DEFAULT_PLB_STANDS,
            horizon:    DEFAULT_HORIZON,
            tie_break:  TieBreak::default(),
        }
    }
}

impl SimConfig {
    /// Number of minutes a complete run processes (`horizon + 1`).
    #[inline]
    pub fn minute_count(&self) -> u64 {
        self.horizon.0 + 1
    }

    /// Reject configurations the engine cannot represent.
    pub fn validate(&self) -> CoreResult<()> {
        if self.horizon.0 == u64::MAX {
            return Err(CoreError::Config(
                "horizon must leave room for the closing minute".into(),
            ));
        }
        Ok(())
    }

    /// Construct a `SimClock` positioned at minute 0.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new()
    }
}
