//! `stand-fleet` — the aircraft entity model and its storage.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`record`]   | `ArrivalRecord` (one input row)                            |
//! | [`aircraft`] | `Aircraft`, `AircraftState`, lifecycle transitions         |
//! | [`store`]    | `Fleet` (dense storage + label index)                      |
//! | [`builder`]  | `FleetBuilder` (validating construction)                   |
//! | [`error`]    | `FleetError`, `TransitionError`                            |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the label index instead of SipHash.             |
//! | `serde`   | Serde derives on `stand-core` types used here.             |
//!
//! Aircraft are passive.  Nothing in this crate schedules events or decides
//! stand classes; the engine in `stand-sim` drives every transition.

pub mod aircraft;
pub mod builder;
pub mod error;
pub mod record;
pub mod store;


pub use aircraft::{Aircraft, AircraftState};
pub use builder::FleetBuilder;
pub use error::{FleetError, FleetResult, TransitionError};
pub use record::ArrivalRecord;
pub use store::Fleet;
