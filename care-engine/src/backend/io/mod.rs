//! # IO Module
//!
//! Translation between the wire DTOs of the `shared` crate and the typed
//! domain models. Hosts exchange snapshots and query results as JSON using
//! the `shared` types; nothing outside this module parses date strings.

pub mod mappers;

pub use mappers::*;
