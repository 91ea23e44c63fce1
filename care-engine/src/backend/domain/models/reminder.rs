//! Derived reminder model. Reminders are computed on demand from records
//! and task types and are never stored.

use chrono::NaiveDate;
use shared::ReminderStatus;

use super::{Pet, Record, TaskType};

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder<'a> {
    pub pet: &'a Pet,
    pub task_type: &'a TaskType,
    /// Most recent record of this task for this pet; it seeds the cycle
    pub last_record: &'a Record,
    pub next_due_date: NaiveDate,
    /// Calendar days from the reference day to the due date
    pub days_offset: i64,
    pub status: ReminderStatus,
}

impl<'a> Reminder<'a> {
    /// Due today or overdue
    pub fn is_actionable(&self) -> bool {
        matches!(self.status, ReminderStatus::DueToday | ReminderStatus::Overdue)
    }

    pub fn overdue_days(&self) -> i64 {
        (-self.days_offset).max(0)
    }
}
