//! Immutable snapshots the engine queries over.

use crate::backend::domain::record_index::RecordIndex;

use super::{Pet, Record, TaskType};

/// Owned snapshot of all entities, as handed over by the entity store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareData {
    pub pets: Vec<Pet>,
    pub task_types: Vec<TaskType>,
    pub records: Vec<Record>,
}

impl CareData {
    pub fn new(pets: Vec<Pet>, task_types: Vec<TaskType>, records: Vec<Record>) -> Self {
        Self { pets, task_types, records }
    }

    /// Borrow the snapshot with a freshly built record index
    pub fn view(&self) -> CareView<'_> {
        CareView::new(&self.pets, &self.task_types, &self.records)
    }
}

/// Borrowed snapshot plus its record index. Cheap to build, never cached.
pub struct CareView<'a> {
    pub pets: &'a [Pet],
    pub task_types: &'a [TaskType],
    pub index: RecordIndex<'a>,
}

impl<'a> CareView<'a> {
    pub fn new(pets: &'a [Pet], task_types: &'a [TaskType], records: &'a [Record]) -> Self {
        Self {
            pets,
            task_types,
            index: RecordIndex::new(records),
        }
    }

    pub fn pet(&self, pet_id: &str) -> Option<&'a Pet> {
        self.pets.iter().find(|p| p.id == pet_id)
    }

    pub fn task_type(&self, task_type_id: &str) -> Option<&'a TaskType> {
        self.task_types.iter().find(|t| t.id == task_type_id)
    }

    /// Task types that can produce reminders, in catalog order
    pub fn recurring_task_types(&self) -> impl Iterator<Item = &'a TaskType> {
        self.task_types.iter().filter(|t| t.is_recurring())
    }

    /// Whether both ends of a record's foreign keys exist in this snapshot
    pub fn is_attached(&self, record: &Record) -> bool {
        self.pet(&record.pet_id).is_some() && self.task_type(&record.task_type_id).is_some()
    }
}
