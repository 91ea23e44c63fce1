//! Domain model for a pet.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::{Gender, PetAge, PetKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub kind: PetKind,
    pub gender: Gender,
    pub breed: String,
    pub birthday: NaiveDate,
    pub initial_weight: f64,
    pub avatar: Option<String>,
    pub theme_color: String,
}

impl Pet {
    /// Check the invariants the host enforces when a pet is created or edited
    pub fn validate(&self) -> Result<(), PetValidationError> {
        if self.name.trim().is_empty() {
            return Err(PetValidationError::EmptyName);
        }
        if !(self.initial_weight > 0.0) {
            return Err(PetValidationError::NonPositiveWeight(self.initial_weight));
        }
        Ok(())
    }

    /// Whether `date` is this pet's birthday, ignoring the year
    pub fn has_birthday_on(&self, date: NaiveDate) -> bool {
        self.birthday.month() == date.month() && self.birthday.day() == date.day()
    }

    /// Age in whole years and months. Only the year and month fields are
    /// compared; a birthday in the future yields zero.
    pub fn age_on(&self, today: NaiveDate) -> PetAge {
        let mut years = today.year() - self.birthday.year();
        let mut months = today.month() as i32 - self.birthday.month() as i32;
        if months < 0 {
            years -= 1;
            months += 12;
        }
        if years < 0 {
            return PetAge { years: 0, months: 0 };
        }
        PetAge {
            years: years as u32,
            months: months as u32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PetValidationError {
    #[error("Pet name cannot be empty")]
    EmptyName,
    #[error("Initial weight must be positive, got {0}")]
    NonPositiveWeight(f64),
}
