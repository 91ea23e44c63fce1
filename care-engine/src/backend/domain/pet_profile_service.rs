//! Per-pet profile views: age, weight history, activity timeline and the
//! summary card shown in the pet list.

use chrono::{NaiveDate, NaiveDateTime};
use shared::PetAge;

use super::models::{CareView, Pet, Record, Reminder};
use super::reminder_service::ReminderService;

/// One weigh-in on a pet's weight curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSample {
    pub date: NaiveDateTime,
    pub value: f64,
}

/// Everything a pet card displays
#[derive(Debug, Clone, PartialEq)]
pub struct PetCardView<'a> {
    pub pet: &'a Pet,
    pub age: PetAge,
    pub latest_weight: f64,
    pub reminders: Vec<Reminder<'a>>,
}

#[derive(Clone)]
pub struct PetProfileService {
    weight_task_type_id: String,
    reminders: ReminderService,
}

impl PetProfileService {
    /// `weight_task_type_id` names the task whose record values are weights
    pub fn new(weight_task_type_id: &str) -> Self {
        Self {
            weight_task_type_id: weight_task_type_id.to_string(),
            reminders: ReminderService::new(),
        }
    }

    pub fn age(&self, pet: &Pet, today: NaiveDate) -> PetAge {
        pet.age_on(today)
    }

    /// Most recent recorded weight, falling back to the weight at registration
    pub fn latest_weight(&self, view: &CareView<'_>, pet: &Pet) -> f64 {
        view.index
            .for_pet_and_task(&pet.id, &self.weight_task_type_id)
            .into_iter()
            .find_map(|record| record.value)
            .unwrap_or(pet.initial_weight)
    }

    /// Weigh-ins with a value, oldest first
    pub fn weight_trend(&self, view: &CareView<'_>, pet: &Pet) -> Vec<WeightSample> {
        let mut samples: Vec<WeightSample> = view
            .index
            .for_pet_and_task(&pet.id, &self.weight_task_type_id)
            .into_iter()
            .filter_map(|record| {
                record.value.map(|value| WeightSample {
                    date: record.date,
                    value,
                })
            })
            .collect();
        samples.reverse();
        samples
    }

    /// The pet's activity history, newest first, optionally for one task type.
    /// Records of task types missing from the catalog are left out.
    pub fn timeline<'a>(
        &self,
        view: &CareView<'a>,
        pet: &Pet,
        task_type_id: Option<&str>,
    ) -> Vec<&'a Record> {
        let records = match task_type_id {
            Some(task_type_id) => view.index.for_pet_and_task(&pet.id, task_type_id),
            None => view.index.for_pet(&pet.id),
        };
        records
            .into_iter()
            .filter(|record| view.task_type(&record.task_type_id).is_some())
            .collect()
    }

    /// Card summary for every pet, each with its own top-`limit` reminders
    pub fn pet_cards<'a>(
        &self,
        view: &CareView<'a>,
        now: NaiveDateTime,
        limit: Option<usize>,
    ) -> Vec<PetCardView<'a>> {
        self.reminders
            .reminder_lists(view, now, limit)
            .into_iter()
            .map(|(pet, reminders)| PetCardView {
                pet,
                age: self.age(pet, now.date()),
                latest_weight: self.latest_weight(view, pet),
                reminders,
            })
            .collect()
    }
}
