//! Due-date calculation for recurring care tasks.
//!
//! The next due date is the local day of the most recent record plus the
//! task's cycle, computed in calendar days so the time of day of the seed
//! record never shifts the due day. The signed offset is measured from the
//! local day of the reference instant:
//!
//! - `offset < 0` → overdue
//! - `offset == 0` → due today
//! - `offset > 0` → upcoming

use chrono::{Days, NaiveDate, NaiveDateTime};
use shared::{CalendarMarker, ReminderStatus};

use super::models::{Pet, Record, Reminder, TaskType};

#[derive(Clone, Default)]
pub struct DueDateService;

impl DueDateService {
    pub fn new() -> Self {
        Self
    }

    /// Next due day for a task seeded by `last_record`, `None` for one-off tasks
    pub fn next_due_date(&self, task_type: &TaskType, last_record: &Record) -> Option<NaiveDate> {
        let cycle = task_type.cycle?;
        last_record
            .local_day()
            .checked_add_days(Days::new(u64::from(cycle.days())))
    }

    /// Compute the reminder for one (pet, task type) pair.
    ///
    /// Returns `None` when the task has no cycle or the pet has no history
    /// for it; untracked tasks never produce reminders.
    pub fn evaluate<'a>(
        &self,
        pet: &'a Pet,
        task_type: &'a TaskType,
        last_record: Option<&'a Record>,
        now: NaiveDateTime,
    ) -> Option<Reminder<'a>> {
        let last_record = last_record?;
        let next_due_date = self.next_due_date(task_type, last_record)?;
        let days_offset = (next_due_date - now.date()).num_days();

        Some(Reminder {
            pet,
            task_type,
            last_record,
            next_due_date,
            days_offset,
            status: status_for_offset(days_offset),
        })
    }

    /// Whether a reminder shows up on a calendar day.
    ///
    /// A reminder lands on its exact due day. Independently, today's cell
    /// keeps showing it for as long as it is overdue.
    pub fn calendar_marker(
        &self,
        reminder: &Reminder<'_>,
        day: NaiveDate,
        now: NaiveDateTime,
    ) -> Option<CalendarMarker> {
        if day == reminder.next_due_date {
            Some(CalendarMarker::DueDay)
        } else if day == now.date() && reminder.next_due_date < day {
            Some(CalendarMarker::StillOutstanding)
        } else {
            None
        }
    }
}

pub fn status_for_offset(days_offset: i64) -> ReminderStatus {
    match days_offset {
        d if d < 0 => ReminderStatus::Overdue,
        0 => ReminderStatus::DueToday,
        _ => ReminderStatus::Upcoming,
    }
}
