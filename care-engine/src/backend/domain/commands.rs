//! Domain-level query types.
//! These structs are what the engine façade accepts; the host maps its own
//! screen state (selected pet, filters, focused month) onto them.

pub mod reminders {
    /// Ranked reminders of one pet
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ReminderListQuery {
        pub pet_id: String,
        /// `None` returns the full list ("show more")
        pub limit: Option<usize>,
    }

    /// Reminder of a single (pet, task type) pair
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ReminderQuery {
        pub pet_id: String,
        pub task_type_id: String,
    }
}

pub mod calendar {
    use crate::backend::domain::models::CalendarFilter;

    /// Contents of one selected day
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CalendarDayQuery {
        pub year: i32,
        pub month: u32,
        pub day: u32,
        pub filter: CalendarFilter,
    }

    /// Month grid with indicator colours
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CalendarMonthQuery {
        pub year: i32,
        pub month: u32,
        pub filter: CalendarFilter,
    }
}

pub mod timeline {
    /// A pet's activity history, optionally for one task type
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TimelineQuery {
        pub pet_id: String,
        pub task_type_id: Option<String>,
    }
}
