//! # In-Memory Storage
//!
//! Repositories sharing one `MemoryConnection`. All state lives behind a
//! single `RwLock`, so a pet deletion and the removal of its records happen
//! under one write guard and readers never see a half-applied cascade.

pub mod connection;
pub mod pet_repository;
pub mod record_repository;
pub mod task_type_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::MemoryConnection;
pub use pet_repository::PetRepository;
pub use record_repository::RecordRepository;
pub use task_type_repository::TaskTypeRepository;
