//! `stand-sim` — the stand allocation engine.
//!
//! # Minute loop
//!
//! ```text
//! for minute in 0..=config.horizon:
//!   ① Drain   — pop every event due this minute, in queue order.
//!   ② Apply   — ARRIVAL:   PLB if a bridge is free, else REMOTE;
//!                          park; schedule DEPARTURE at arrival + turnaround.
//!               DEPARTURE: free the PLB (if any); depart; record result.
//!   ③ Record  — append the per-minute snapshot (state after ②).
//! ```
//!
//! Allocation is greedy first-come-first-served.  An aircraft that finds no
//! free PLB goes to a remote stand and stays there.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`sweep_plb_counts`] on Rayon's thread pool.      |
//! | `fx-hash`  | FxHash for the parked set and label index.             |
//! | `serde`    | Serde derives on result rows and configuration.        |
//!
//! # Quick-start
//!
//! ```rust
//! use stand_core::Minute;
//! use stand_fleet::ArrivalRecord;
//! use stand_sim::{NoopObserver, SimBuilder};
//!
//! let records = vec![
//!     ArrivalRecord::new("A1", 0, 10),
//!     ArrivalRecord::new("A2", 0, 10),
//! ];
//! let mut sim = SimBuilder::new(records)
//!     .plb_stands(1)
//!     .horizon(Minute(30))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! let tables = sim.finish()?;
//! assert_eq!(tables.aircraft.len(), 2);
//! assert_eq!(tables.minutes.len(), 31);
//! # Ok::<(), stand_sim::SimError>(())
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pool;
pub mod recorder;
pub mod row;
pub mod sim;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, ProgressLogger, SimObserver};
pub use pool::PlbPool;
pub use recorder::{RunRecorder, RunTables};
pub use row::{AircraftResultRow, MinuteSnapshotRow};
pub use sim::{Sim, SimPhase, simulate};
pub use sweep::sweep_plb_counts;
