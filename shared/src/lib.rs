use serde::{Deserialize, Serialize};
use std::fmt;

/// Species of a pet, serialized with the labels the host application stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetKind {
    #[serde(rename = "猫", alias = "cat")]
    Cat,
    #[serde(rename = "狗", alias = "dog")]
    Dog,
    #[serde(rename = "其他", alias = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "公", alias = "male")]
    Male,
    #[serde(rename = "母", alias = "female")]
    Female,
    #[serde(rename = "未知", alias = "unknown")]
    Unknown,
}

/// A pet as stored by the host application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PetKind,
    pub gender: Gender,
    pub breed: String,
    /// Calendar date (YYYY-MM-DD)
    pub birthday: String,
    /// Weight in kilograms at registration time
    pub initial_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Colour used for this pet's calendar dots
    pub theme_color: String,
}

/// A care activity definition (vaccination, grooming, weigh-in, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskType {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Presentation tag (icon class)
    pub icon: String,
    /// Repeat cycle in days; `None` means the task never produces a reminder
    #[serde(default)]
    pub cycle_days: Option<i64>,
    #[serde(default)]
    pub is_default: bool,
    /// Whether records of this task carry a numeric value
    #[serde(default)]
    pub has_value: bool,
    /// Label for the numeric value (e.g. "体重 (kg)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_name: Option<String>,
}

/// One logged care activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    /// ID of the pet this record belongs to
    pub pet_id: String,
    /// ID of the task type this record logs
    pub task_type_id: String,
    /// Timestamp (RFC 3339, or naive ISO-8601 in the owner's local time)
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Everything the engine needs for one round of queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareSnapshot {
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub task_types: Vec<TaskType>,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl CareSnapshot {
    /// Parse a snapshot exported by the host application
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Urgency of a reminder relative to the reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderStatus {
    Upcoming,
    DueToday,
    Overdue,
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderStatus::Upcoming => write!(f, "upcoming"),
            ReminderStatus::DueToday => write!(f, "due-today"),
            ReminderStatus::Overdue => write!(f, "overdue"),
        }
    }
}

/// Next occurrence of a recurring task for one pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub pet: Pet,
    pub task_type: TaskType,
    /// Most recent record that seeded the current cycle
    pub last_record: Option<Record>,
    /// Calendar date (YYYY-MM-DD)
    pub next_due_date: String,
    /// Days until due (negative when overdue)
    pub days_offset: i64,
    pub status: ReminderStatus,
}

/// Why a reminder shows up on a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarMarker {
    /// The day is the exact due date
    DueDay,
    /// The day is today and the due date has already passed
    StillOutstanding,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarReminder {
    pub pet: Pet,
    pub task_type: TaskType,
    pub next_due_date: String,
    pub overdue_days: i64,
    pub marker: CalendarMarker,
}

/// Classified contents of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub records: Vec<Record>,
    pub reminders: Vec<CalendarReminder>,
    pub birthdays: Vec<Pet>,
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty padding cell before the first day of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// Indicator dots for one cell of the month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDaySummary {
    pub day: u32,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub record_colors: Vec<String>,
    pub reminder_colors: Vec<String>,
    pub birthday_colors: Vec<String>,
}

/// A calendar month with its indicator data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days: Vec<CalendarDaySummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetAge {
    pub years: u32,
    pub months: u32,
}

/// Summary shown on a pet's card in the pet list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetCard {
    pub pet: Pet,
    pub age: PetAge,
    pub latest_weight: f64,
    /// Most urgent reminders, already truncated
    pub reminders: Vec<Reminder>,
}

/// One point on a pet's weight curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    pub date: String,
    pub value: f64,
}
