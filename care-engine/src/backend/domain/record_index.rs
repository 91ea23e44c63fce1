//! Record index for the pet care engine.
//!
//! Built once per snapshot from a flat record collection. Answers "latest
//! record for (pet, task type)" and "all records on a day" without rescanning,
//! and exposes the canonical recency ordering (newest first, ties broken by
//! the greater record id) every other component relies on.

use chrono::NaiveDate;
use std::collections::HashMap;

use super::models::Record;

pub struct RecordIndex<'a> {
    /// All records in canonical recency order
    ordered: Vec<&'a Record>,
    /// pet id -> task type id -> most recent record
    latest: HashMap<&'a str, HashMap<&'a str, &'a Record>>,
    /// local day -> records on that day, in recency order
    by_day: HashMap<NaiveDate, Vec<&'a Record>>,
}

impl<'a> RecordIndex<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        let mut ordered: Vec<&'a Record> = records.iter().collect();
        ordered.sort_by(|a, b| Record::recency_cmp(a, b));

        let mut latest: HashMap<&'a str, HashMap<&'a str, &'a Record>> = HashMap::new();
        let mut by_day: HashMap<NaiveDate, Vec<&'a Record>> = HashMap::new();

        for &record in &ordered {
            // First hit in recency order is the latest one
            latest
                .entry(record.pet_id.as_str())
                .or_default()
                .entry(record.task_type_id.as_str())
                .or_insert(record);
            by_day.entry(record.local_day()).or_default().push(record);
        }

        log::debug!(
            "Indexed {} records across {} days",
            ordered.len(),
            by_day.len()
        );

        Self { ordered, latest, by_day }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Most recent record of a task for a pet
    pub fn latest_for(&self, pet_id: &str, task_type_id: &str) -> Option<&'a Record> {
        self.latest
            .get(pet_id)
            .and_then(|by_task| by_task.get(task_type_id))
            .copied()
    }

    /// Every record on the given local day, honoring optional filters
    pub fn all_on(
        &self,
        day: NaiveDate,
        pet_id: Option<&str>,
        task_type_id: Option<&str>,
    ) -> Vec<&'a Record> {
        self.by_day
            .get(&day)
            .map(|records| {
                records
                    .iter()
                    .copied()
                    .filter(|r| pet_id.map_or(true, |id| r.pet_id == id))
                    .filter(|r| task_type_id.map_or(true, |id| r.task_type_id == id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A pet's records, newest first
    pub fn for_pet(&self, pet_id: &str) -> Vec<&'a Record> {
        self.iter().filter(|r| r.pet_id == pet_id).collect()
    }

    /// A pet's records of one task type, newest first
    pub fn for_pet_and_task(&self, pet_id: &str, task_type_id: &str) -> Vec<&'a Record> {
        self.iter()
            .filter(|r| r.pet_id == pet_id && r.task_type_id == task_type_id)
            .collect()
    }

    /// All records in canonical recency order
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.ordered.iter().copied()
    }
}
