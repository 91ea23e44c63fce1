//! src/backend/io/mappers/reminder_mapper.rs

use shared::{
    CalendarDay as SharedCalendarDay, CalendarReminder as SharedCalendarReminder,
    Reminder as SharedReminder,
};

use crate::backend::domain::models::{CalendarDay, CalendarReminder, Reminder};

use super::{PetMapper, RecordMapper, TaskTypeMapper, DATE_FORMAT};

/// Mapper from derived reminder and calendar views to their shared DTOs.
/// These views are computed per query, so there is no `to_domain`.
pub struct ReminderMapper;

impl ReminderMapper {
    pub fn to_dto(reminder: &Reminder<'_>) -> SharedReminder {
        SharedReminder {
            pet: PetMapper::to_dto(reminder.pet),
            task_type: TaskTypeMapper::to_dto(reminder.task_type),
            last_record: Some(RecordMapper::to_dto(reminder.last_record)),
            next_due_date: reminder.next_due_date.format(DATE_FORMAT).to_string(),
            days_offset: reminder.days_offset,
            status: reminder.status,
        }
    }

    pub fn to_calendar_reminder_dto(entry: &CalendarReminder<'_>) -> SharedCalendarReminder {
        SharedCalendarReminder {
            pet: PetMapper::to_dto(entry.reminder.pet),
            task_type: TaskTypeMapper::to_dto(entry.reminder.task_type),
            next_due_date: entry.reminder.next_due_date.format(DATE_FORMAT).to_string(),
            overdue_days: entry.overdue_days(),
            marker: entry.marker,
        }
    }

    pub fn to_calendar_day_dto(day: &CalendarDay<'_>) -> SharedCalendarDay {
        SharedCalendarDay {
            date: day.date.format(DATE_FORMAT).to_string(),
            records: day.records.iter().map(|r| RecordMapper::to_dto(r)).collect(),
            reminders: day.reminders.iter().map(Self::to_calendar_reminder_dto).collect(),
            birthdays: day.birthdays.iter().map(|p| PetMapper::to_dto(p)).collect(),
        }
    }
}
