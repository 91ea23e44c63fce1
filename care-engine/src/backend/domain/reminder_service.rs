//! Reminder ranking for the pet care engine.
//!
//! All reminder lists share one urgency order: ascending `days_offset`, so
//! the most overdue task comes first and the soonest upcoming one follows.
//! The sort is stable, so equal offsets keep task catalog order. Truncation
//! is a pure prefix cut; "show more" is simply a call without a limit.

use chrono::NaiveDateTime;

use super::due_date_service::DueDateService;
use super::models::{CareView, Pet, Reminder, TaskType};

#[derive(Clone, Default)]
pub struct ReminderService {
    due_dates: DueDateService,
}

impl ReminderService {
    pub fn new() -> Self {
        Self {
            due_dates: DueDateService::new(),
        }
    }

    /// Reminder for one (pet, task type) pair, if the task recurs and has history
    pub fn reminder_for<'a>(
        &self,
        view: &CareView<'a>,
        pet: &'a Pet,
        task_type: &'a TaskType,
        now: NaiveDateTime,
    ) -> Option<Reminder<'a>> {
        if !task_type.is_recurring() {
            return None;
        }
        let last_record = view.index.latest_for(&pet.id, &task_type.id);
        self.due_dates.evaluate(pet, task_type, last_record, now)
    }

    /// Every reminder of a pet, in catalog order
    pub fn all_for_pet<'a>(
        &self,
        view: &CareView<'a>,
        pet: &'a Pet,
        now: NaiveDateTime,
    ) -> Vec<Reminder<'a>> {
        view.recurring_task_types()
            .filter_map(|task_type| self.reminder_for(view, pet, task_type, now))
            .collect()
    }

    /// A pet's reminders sorted by urgency, optionally cut to `limit`
    pub fn reminders_for<'a>(
        &self,
        view: &CareView<'a>,
        pet: &'a Pet,
        now: NaiveDateTime,
        limit: Option<usize>,
    ) -> Vec<Reminder<'a>> {
        let mut reminders = self.all_for_pet(view, pet, now);
        Self::rank(&mut reminders);
        if let Some(limit) = limit {
            reminders.truncate(limit);
        }
        log::debug!("{} reminders for pet {}", reminders.len(), pet.id);
        reminders
    }

    /// Ranked lists for every pet, each truncated on its own
    pub fn reminder_lists<'a>(
        &self,
        view: &CareView<'a>,
        now: NaiveDateTime,
        per_pet_limit: Option<usize>,
    ) -> Vec<(&'a Pet, Vec<Reminder<'a>>)> {
        view.pets
            .iter()
            .map(|pet| (pet, self.reminders_for(view, pet, now, per_pet_limit)))
            .collect()
    }

    /// Sort into the canonical urgency order
    pub fn rank(reminders: &mut [Reminder<'_>]) {
        reminders.sort_by_key(|r| r.days_offset);
    }
}
