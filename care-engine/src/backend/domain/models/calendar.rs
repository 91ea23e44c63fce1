//! Calendar view models: filters, focus and the classified contents of a day.

use chrono::NaiveDate;
use shared::CalendarMarker;

use super::{Pet, Record, Reminder};

/// Pet and task filters of the calendar screen. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarFilter {
    pub pet_id: Option<String>,
    pub task_type_id: Option<String>,
}

impl CalendarFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_pet(pet_id: &str) -> Self {
        Self {
            pet_id: Some(pet_id.to_string()),
            task_type_id: None,
        }
    }

    pub fn with_task(mut self, task_type_id: &str) -> Self {
        self.task_type_id = Some(task_type_id.to_string());
        self
    }

    pub fn matches_pet(&self, pet_id: &str) -> bool {
        self.pet_id.as_deref().map_or(true, |id| id == pet_id)
    }

    pub fn matches_task(&self, task_type_id: &str) -> bool {
        self.task_type_id.as_deref().map_or(true, |id| id == task_type_id)
    }
}

/// Displayed month plus the selected day-of-month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFocus {
    pub year: i32,
    pub month: u32,
    pub selected_day: Option<u32>,
}

impl CalendarFocus {
    pub fn new(year: i32, month: u32, selected_day: Option<u32>) -> Self {
        Self { year, month, selected_day }
    }

    /// Focus on the month containing `date`, with `date` selected
    pub fn on(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(date.year(), date.month(), Some(date.day()))
    }

    /// The selected date, or `None` when this month has no such day
    pub fn selected_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.selected_day?)
    }
}

/// A reminder placed on a calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarReminder<'a> {
    pub reminder: Reminder<'a>,
    pub marker: CalendarMarker,
}

impl<'a> CalendarReminder<'a> {
    pub fn overdue_days(&self) -> i64 {
        self.reminder.overdue_days()
    }
}

/// Everything that happened, falls due, or is celebrated on one day
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub records: Vec<&'a Record>,
    pub reminders: Vec<CalendarReminder<'a>>,
    pub birthdays: Vec<&'a Pet>,
}

impl<'a> CalendarDay<'a> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.reminders.is_empty() && self.birthdays.is_empty()
    }

    /// Number of entries listed under the day
    pub fn entry_count(&self) -> usize {
        self.records.len() + self.reminders.len() + self.birthdays.len()
    }
}
