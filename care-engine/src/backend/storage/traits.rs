//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably by the host.

use anyhow::Result;

use crate::backend::domain::models::{CareData, NewRecord, Pet, Record, RecordUpdate, TaskType};

/// Trait defining the interface for pet storage operations
pub trait PetStorage: Send + Sync {
    /// Store a new pet together with its initial weight record
    fn store_pet(&self, pet: &Pet) -> Result<()>;

    /// Retrieve a specific pet by ID
    fn get_pet(&self, pet_id: &str) -> Result<Option<Pet>>;

    /// List all pets in insertion order
    fn list_pets(&self) -> Result<Vec<Pet>>;

    /// Replace an existing pet
    fn update_pet(&self, pet: &Pet) -> Result<()>;

    /// Delete a pet and every record that belongs to it.
    /// Returns true if the pet was found and deleted, false otherwise
    fn delete_pet(&self, pet_id: &str) -> Result<bool>;
}

/// Trait defining the interface for task type storage operations
pub trait TaskTypeStorage: Send + Sync {
    /// Store a new task type
    fn store_task_type(&self, task_type: &TaskType) -> Result<()>;

    /// Retrieve a specific task type by ID
    fn get_task_type(&self, task_type_id: &str) -> Result<Option<TaskType>>;

    /// List all task types in catalog order
    fn list_task_types(&self) -> Result<Vec<TaskType>>;

    /// Replace an existing task type
    fn update_task_type(&self, task_type: &TaskType) -> Result<()>;

    /// Delete a task type. Its records stay and become orphans, which
    /// queries ignore.
    fn delete_task_type(&self, task_type_id: &str) -> Result<bool>;
}

/// Trait defining the interface for record storage operations
pub trait RecordStorage: Send + Sync {
    /// Log a new activity; pet and task type must exist
    fn store_record(&self, record: NewRecord) -> Result<Record>;

    /// Retrieve a specific record by ID
    fn get_record(&self, record_id: &str) -> Result<Option<Record>>;

    /// List records, newest first, optionally for one pet
    fn list_records(&self, pet_id: Option<&str>) -> Result<Vec<Record>>;

    /// Change the date, value and note of a record
    fn update_record(&self, record_id: &str, update: RecordUpdate) -> Result<Record>;

    /// Delete a single record.
    /// Returns true if the record was found and deleted, false otherwise
    fn delete_record(&self, record_id: &str) -> Result<bool>;
}

/// Trait defining the interface for storage connections
///
/// A connection creates repositories that share its state and can hand out
/// an immutable snapshot for the engine's queries.
pub trait Connection: Send + Sync + Clone {
    type PetRepository: PetStorage;
    type TaskTypeRepository: TaskTypeStorage;
    type RecordRepository: RecordStorage;

    fn create_pet_repository(&self) -> Self::PetRepository;

    fn create_task_type_repository(&self) -> Self::TaskTypeRepository;

    fn create_record_repository(&self) -> Self::RecordRepository;

    /// Owned copy of everything currently stored
    fn snapshot(&self) -> Result<CareData>;
}
