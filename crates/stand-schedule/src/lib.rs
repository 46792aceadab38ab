//! `stand-schedule` — event queue, input loading, and synthetic arrivals.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`event_queue`] | `Event`, `EventQueue` (binary min-heap)                  |
//! | [`loader`]      | `load_arrivals_csv`, `load_arrivals_reader`, writers     |
//! | [`generator`]   | `GeneratorConfig`, `generate_arrivals`                   |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Event ordering (summary)
//!
//! ```text
//! key = (minute, tie_break.rank(kind), aircraft_id)
//! ```
//!
//! `AircraftId`s follow label order (see `stand-fleet`), so the third key is
//! the aircraft label.  Each aircraft contributes one ARRIVAL, seeded before
//! the run, and one DEPARTURE, scheduled when its arrival is applied.

pub mod error;
pub mod event_queue;
pub mod generator;
pub mod loader;


pub use error::{ScheduleError, ScheduleResult};
pub use event_queue::{Event, EventQueue};
pub use generator::{GeneratorConfig, generate_arrivals};
pub use loader::{load_arrivals_csv, load_arrivals_reader, write_arrivals_csv, write_arrivals_writer};
