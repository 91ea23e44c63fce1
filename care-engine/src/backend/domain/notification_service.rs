//! Notification feed: the cross-pet to-do list.
//!
//! Only reminders that are due today or overdue are surfaced here; upcoming
//! ones belong to the pet detail and calendar views. Entries come out in
//! natural iteration order (pets, then task catalog); callers that want
//! urgency order can pass the result through `ReminderService::rank`.

use chrono::NaiveDateTime;

use super::models::{CareView, Reminder};
use super::reminder_service::ReminderService;

#[derive(Clone, Default)]
pub struct NotificationService {
    reminders: ReminderService,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            reminders: ReminderService::new(),
        }
    }

    /// Actionable reminders across every pet and recurring task
    pub fn notification_feed<'a>(&self, view: &CareView<'a>, now: NaiveDateTime) -> Vec<Reminder<'a>> {
        let feed: Vec<Reminder<'a>> = view
            .pets
            .iter()
            .flat_map(|pet| self.reminders.all_for_pet(view, pet, now))
            .filter(Reminder::is_actionable)
            .collect();

        log::debug!("Notification feed has {} entries", feed.len());
        feed
    }
}
