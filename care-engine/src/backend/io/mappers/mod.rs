//! Mappers between `shared` DTOs and domain models.

pub mod pet_mapper;
pub mod record_mapper;
pub mod reminder_mapper;
pub mod snapshot_mapper;
pub mod task_type_mapper;

pub use pet_mapper::PetMapper;
pub use record_mapper::RecordMapper;
pub use reminder_mapper::ReminderMapper;
pub use snapshot_mapper::SnapshotMapper;
pub use task_type_mapper::TaskTypeMapper;

/// Wire format of calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format of record timestamps written by the engine. Sub-second
/// digits are written only when present.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
