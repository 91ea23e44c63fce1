//! src/backend/io/mappers/task_type_mapper.rs

use log::warn;
use shared::TaskType as SharedTaskType;

use crate::backend::domain::models::{CareCycle, Measurement, TaskType as DomainTaskType};

/// Mapper to convert between shared TaskType DTOs and domain TaskType models.
pub struct TaskTypeMapper;

impl TaskTypeMapper {
    /// Converts a shared TaskType DTO to a domain TaskType model.
    ///
    /// A cycle that is zero or negative cannot drive a reminder and is
    /// treated as absent.
    pub fn to_domain(dto: SharedTaskType) -> DomainTaskType {
        let cycle = dto.cycle_days.and_then(|days| match CareCycle::new(days) {
            Ok(cycle) => Some(cycle),
            Err(e) => {
                warn!("Task type {} has an unusable cycle: {}", dto.id, e);
                None
            }
        });
        let measurement = if dto.has_value {
            Measurement::Value { label: dto.value_name }
        } else {
            Measurement::None
        };

        DomainTaskType {
            id: dto.id,
            name: dto.name,
            color: dto.color,
            icon: dto.icon,
            cycle,
            measurement,
            is_default: dto.is_default,
        }
    }

    /// Converts a domain TaskType model to a shared TaskType DTO.
    pub fn to_dto(domain: &DomainTaskType) -> SharedTaskType {
        SharedTaskType {
            id: domain.id.clone(),
            name: domain.name.clone(),
            color: domain.color.clone(),
            icon: domain.icon.clone(),
            cycle_days: domain.cycle.map(|cycle| i64::from(cycle.days())),
            is_default: domain.is_default,
            has_value: domain.has_value(),
            value_name: domain.value_label().map(str::to_string),
        }
    }
}
