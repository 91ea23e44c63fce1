//! Recurring care-task reminders and calendar aggregation for pet owners.
//!
//! Hosts feed a snapshot of pets, task types and records to a
//! [`CareEngine`] and get back ranked reminders, classified calendar days,
//! month grids and pet profile views as `shared` DTOs.

pub mod backend;

pub use backend::clock::{Clock, FixedClock, SystemClock};
pub use backend::config::EngineConfig;
pub use backend::domain::models::{CalendarFilter, CalendarFocus, CareData};
pub use backend::io::SnapshotMapper;
pub use backend::{initialize_engine, CareEngine};
