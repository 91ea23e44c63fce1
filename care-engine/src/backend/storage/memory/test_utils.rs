//! Shared fixtures for the memory store tests.

use chrono::{NaiveDate, NaiveDateTime};
use shared::{Gender, PetKind};
use std::sync::Arc;

use crate::backend::clock::FixedClock;
use crate::backend::config::EngineConfig;
use crate::backend::domain::models::{NewRecord, Pet};

use super::MemoryConnection;

/// A store seeded with the default catalog and a frozen clock
pub struct TestEnvironment {
    pub connection: MemoryConnection,
    pub now: NaiveDateTime,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let now = test_now();
        let connection = MemoryConnection::with_default_catalog(config, Arc::new(FixedClock(now)));
        Self { connection, now }
    }
}

pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

pub fn create_test_pet(id: &str, name: &str) -> Pet {
    Pet {
        id: id.to_string(),
        name: name.to_string(),
        kind: PetKind::Cat,
        gender: Gender::Female,
        breed: "狸花猫".to_string(),
        birthday: NaiveDate::from_ymd_opt(2019, 3, 10).unwrap(),
        initial_weight: 3.5,
        avatar: None,
        theme_color: "#FCA5A5".to_string(),
    }
}

pub fn create_test_new_record(pet_id: &str, task_type_id: &str, date: NaiveDateTime) -> NewRecord {
    NewRecord {
        id: None,
        pet_id: pet_id.to_string(),
        task_type_id: task_type_id.to_string(),
        date,
        value: None,
        note: None,
    }
}
