//! # Storage Module
//!
//! The entity store contract of the pet care engine.
//!
//! The engine itself only reads immutable snapshots. Hosts persist pets,
//! task types and records however they like and hand the engine a
//! `CareData` snapshot per render. The traits in this module describe the
//! mutations a store must support, including the two lifecycle rules the
//! engine relies on:
//!
//! - creating a pet also logs its initial weight
//! - deleting a pet deletes all of its records
//!
//! ## Current Implementation
//!
//! - **memory**: an in-process store shared behind `Arc<RwLock<..>>`, used by
//!   hosts without their own persistence and by the test suite

pub mod memory;
pub mod traits;

pub use memory::{MemoryConnection, PetRepository, RecordRepository, TaskTypeRepository};
pub use traits::*;
