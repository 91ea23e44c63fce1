//! Domain model for a logged care activity.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub pet_id: String,
    pub task_type_id: String,
    /// Local wall-clock time of the activity
    pub date: NaiveDateTime,
    pub value: Option<f64>,
    pub note: Option<String>,
}

impl Record {
    /// Generate a unique record ID
    pub fn generate_id() -> String {
        format!("record::{}", Uuid::new_v4())
    }

    /// ID of the weight record created together with a pet
    pub fn initial_weight_id(pet_id: &str) -> String {
        format!("init-weight-{}", pet_id)
    }

    /// Local calendar day the activity happened on
    pub fn local_day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Return a copy with the editable fields replaced. Pet and task type
    /// are fixed once a record exists.
    pub fn with_update(&self, update: RecordUpdate) -> Record {
        Record {
            date: update.date,
            value: update.value,
            note: update.note,
            ..self.clone()
        }
    }

    /// Canonical recency ordering: newest first, ties broken by the greater id
    pub fn recency_cmp(a: &Record, b: &Record) -> Ordering {
        b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id))
    }
}

/// Input for logging a new activity. A missing id is generated by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub id: Option<String>,
    pub pet_id: String,
    pub task_type_id: String,
    pub date: NaiveDateTime,
    pub value: Option<f64>,
    pub note: Option<String>,
}

/// Editable fields of an existing record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub date: NaiveDateTime,
    pub value: Option<f64>,
    pub note: Option<String>,
}
