//! src/backend/io/mappers/pet_mapper.rs

use anyhow::{Context, Result};
use chrono::NaiveDate;
use shared::{Pet as SharedPet, PetCard, WeightPoint};

use crate::backend::domain::models::Pet as DomainPet;
use crate::backend::domain::{PetCardView, WeightSample};

use super::{ReminderMapper, DATE_FORMAT, DATE_TIME_FORMAT};

/// Mapper to convert between shared Pet DTOs and domain Pet models.
pub struct PetMapper;

impl PetMapper {
    /// Converts a shared Pet DTO to a domain Pet model.
    pub fn to_domain(dto: SharedPet) -> Result<DomainPet> {
        let birthday = NaiveDate::parse_from_str(dto.birthday.trim(), DATE_FORMAT)
            .with_context(|| format!("Failed to parse birthday of pet {}", dto.id))?;

        Ok(DomainPet {
            id: dto.id,
            name: dto.name,
            kind: dto.kind,
            gender: dto.gender,
            breed: dto.breed,
            birthday,
            initial_weight: dto.initial_weight,
            avatar: dto.avatar,
            theme_color: dto.theme_color,
        })
    }

    /// Converts a domain Pet model to a shared Pet DTO.
    pub fn to_dto(domain: &DomainPet) -> SharedPet {
        SharedPet {
            id: domain.id.clone(),
            name: domain.name.clone(),
            kind: domain.kind,
            gender: domain.gender,
            breed: domain.breed.clone(),
            birthday: domain.birthday.format(DATE_FORMAT).to_string(),
            initial_weight: domain.initial_weight,
            avatar: domain.avatar.clone(),
            theme_color: domain.theme_color.clone(),
        }
    }

    pub fn to_pet_card_dto(card: &PetCardView<'_>) -> PetCard {
        PetCard {
            pet: Self::to_dto(card.pet),
            age: card.age,
            latest_weight: card.latest_weight,
            reminders: card.reminders.iter().map(ReminderMapper::to_dto).collect(),
        }
    }

    pub fn to_weight_point_dto(sample: &WeightSample) -> WeightPoint {
        WeightPoint {
            date: sample.date.format(DATE_TIME_FORMAT).to_string(),
            value: sample.value,
        }
    }
}
