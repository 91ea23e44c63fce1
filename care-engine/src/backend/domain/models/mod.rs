//! Domain models for the pet care engine.
//!
//! These are the typed counterparts of the DTOs in the `shared` crate. Dates
//! are `chrono` values in the owner's local wall-clock time; string parsing
//! happens only in the io mappers.

pub mod calendar;
pub mod pet;
pub mod record;
pub mod reminder;
pub mod snapshot;
pub mod task_type;

pub use calendar::*;
pub use pet::*;
pub use record::*;
pub use reminder::*;
pub use snapshot::*;
pub use task_type::*;
