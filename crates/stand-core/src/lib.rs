//! `stand-core` — foundational types for the stand allocation simulator.
//!
//! This crate is a dependency of every other `stand-*` crate.  It has no
//! `stand-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `AircraftId`                                              |
//! | [`time`]   | `Minute`, `SimClock`, `SimConfig`                         |
//! | [`event`]  | `EventKind`, `TieBreak`                                   |
//! | [`stand`]  | `StandClass` (PLB / REMOTE)                               |
//! | [`rng`]    | `SimRng` (seeded, used by the data generator)             |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod event;
pub mod ids;
pub mod rng;
pub mod stand;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use event::{EventKind, TieBreak};
pub use ids::AircraftId;
pub use rng::SimRng;
pub use stand::StandClass;
pub use time::{Minute, SimClock, SimConfig};
