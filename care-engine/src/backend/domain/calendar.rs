//! Calendar domain logic for the pet care engine.
//!
//! This module classifies every day of a displayed month into matching
//! records, reminders landing on that day, and pet birthdays, and builds the
//! month grid with deduplicated indicator colours. Everything is recomputed
//! from the snapshot on each call; the UI only handles presentation.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use shared::{CalendarDayType, CalendarDaySummary, CalendarMonth};

use super::due_date_service::DueDateService;
use super::models::{CalendarDay, CalendarFilter, CalendarFocus, CalendarReminder, CareView, Reminder};
use super::reminder_service::ReminderService;

/// Calendar service that handles all calendar-related business logic
#[derive(Clone, Default)]
pub struct CalendarService {
    reminders: ReminderService,
    due_dates: DueDateService,
}

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self {
            reminders: ReminderService::new(),
            due_dates: DueDateService::new(),
        }
    }

    /// Classify a single day. Returns `None` when the day does not exist in
    /// that month, which callers treat as "no day selected".
    pub fn calendar_day<'a>(
        &self,
        view: &CareView<'a>,
        year: i32,
        month: u32,
        day: u32,
        filter: &CalendarFilter,
        now: NaiveDateTime,
    ) -> Option<CalendarDay<'a>> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let open = self.open_reminders(view, filter, now);
        Some(self.classify_day(view, date, filter, now, &open))
    }

    /// Classify the selected day of a calendar focus
    pub fn selected_day<'a>(
        &self,
        view: &CareView<'a>,
        focus: &CalendarFocus,
        filter: &CalendarFilter,
        now: NaiveDateTime,
    ) -> Option<CalendarDay<'a>> {
        let date = focus.selected_date()?;
        self.calendar_day(view, date.year(), date.month(), date.day(), filter, now)
    }

    /// Generate the month grid with indicator colours for every day
    pub fn generate_calendar_month(
        &self,
        view: &CareView<'_>,
        year: i32,
        month: u32,
        filter: &CalendarFilter,
        now: NaiveDateTime,
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);
        let open = self.open_reminders(view, filter, now);

        log::debug!(
            "Generating calendar for {}/{}: {} days, first weekday {}, {} open reminders",
            month,
            year,
            days_in_month,
            first_day,
            open.len()
        );

        let mut calendar_days = Vec::with_capacity((first_day + days_in_month) as usize);

        // Empty cells before the first day of the month
        for _ in 0..first_day {
            calendar_days.push(CalendarDaySummary {
                day: 0,
                day_type: CalendarDayType::PaddingBefore,
                is_today: false,
                record_colors: Vec::new(),
                reminder_colors: Vec::new(),
                birthday_colors: Vec::new(),
            });
        }

        for day in 1..=days_in_month {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            let classified = self.classify_day(view, date, filter, now, &open);

            let mut record_colors = Vec::new();
            for record in &classified.records {
                if let Some(pet) = view.pet(&record.pet_id) {
                    push_unique(&mut record_colors, &pet.theme_color);
                }
            }
            let mut reminder_colors = Vec::new();
            for entry in &classified.reminders {
                push_unique(&mut reminder_colors, &entry.reminder.task_type.color);
            }
            let mut birthday_colors = Vec::new();
            for pet in &classified.birthdays {
                push_unique(&mut birthday_colors, &pet.theme_color);
            }

            calendar_days.push(CalendarDaySummary {
                day,
                day_type: CalendarDayType::MonthDay,
                is_today: date == now.date(),
                record_colors,
                reminder_colors,
                birthday_colors,
            });
        }

        CalendarMonth {
            year,
            month,
            first_day_of_week: first_day,
            days: calendar_days,
        }
    }

    /// Reminders of every filtered (pet, task type) pair. They do not depend
    /// on the displayed day, so a month is classified against one list.
    fn open_reminders<'a>(
        &self,
        view: &CareView<'a>,
        filter: &CalendarFilter,
        now: NaiveDateTime,
    ) -> Vec<Reminder<'a>> {
        view.pets
            .iter()
            .filter(|pet| filter.matches_pet(&pet.id))
            .flat_map(move |pet| {
                view.recurring_task_types()
                    .filter(move |task_type| filter.matches_task(&task_type.id))
                    .filter_map(move |task_type| self.reminders.reminder_for(view, pet, task_type, now))
            })
            .collect()
    }

    fn classify_day<'a>(
        &self,
        view: &CareView<'a>,
        date: NaiveDate,
        filter: &CalendarFilter,
        now: NaiveDateTime,
        open: &[Reminder<'a>],
    ) -> CalendarDay<'a> {
        let records = view
            .index
            .all_on(date, filter.pet_id.as_deref(), filter.task_type_id.as_deref())
            .into_iter()
            .filter(|record| view.is_attached(record))
            .collect();

        let reminders = open
            .iter()
            .filter_map(|reminder| {
                self.due_dates
                    .calendar_marker(reminder, date, now)
                    .map(|marker| CalendarReminder {
                        reminder: reminder.clone(),
                        marker,
                    })
            })
            .collect();

        let birthdays = view
            .pets
            .iter()
            .filter(|pet| filter.matches_pet(&pet.id) && pet.has_birthday_on(date))
            .collect();

        CalendarDay {
            date,
            records,
            reminders,
            birthdays,
        }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => if self.is_leap_year(year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }

    /// Move the focus one month back, keeping the selected day-of-month
    pub fn navigate_previous_month(&self, focus: CalendarFocus) -> CalendarFocus {
        let (month, year) = self.previous_month(focus.month, focus.year);
        CalendarFocus::new(year, month, focus.selected_day)
    }

    /// Move the focus one month forward, keeping the selected day-of-month
    pub fn navigate_next_month(&self, focus: CalendarFocus) -> CalendarFocus {
        let (month, year) = self.next_month(focus.month, focus.year);
        CalendarFocus::new(year, month, focus.selected_day)
    }
}

fn push_unique(colors: &mut Vec<String>, color: &str) {
    if !colors.iter().any(|c| c == color) {
        colors.push(color.to_string());
    }
}
