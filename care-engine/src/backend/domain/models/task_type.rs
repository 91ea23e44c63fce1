//! Domain model for a care task definition.

use serde::{Deserialize, Serialize};

/// Repeat interval of a recurring task, always a positive number of days
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CareCycle(u32);

impl CareCycle {
    pub fn new(days: i64) -> Result<Self, TaskTypeValidationError> {
        match u32::try_from(days) {
            Ok(days) if days > 0 => Ok(Self(days)),
            _ => Err(TaskTypeValidationError::InvalidCycle(days)),
        }
    }

    pub fn days(self) -> u32 {
        self.0
    }
}

/// Whether records of a task carry a numeric value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Measurement {
    None,
    Value { label: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskType {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    /// `None` for one-off activities, which never produce a reminder
    pub cycle: Option<CareCycle>,
    pub measurement: Measurement,
    pub is_default: bool,
}

impl TaskType {
    /// Create a non-recurring task type without a value
    pub fn new(id: &str, name: &str, color: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
            cycle: None,
            measurement: Measurement::None,
            is_default: false,
        }
    }

    /// Make the task recur every `days` days
    pub fn with_cycle(mut self, days: i64) -> Result<Self, TaskTypeValidationError> {
        self.cycle = Some(CareCycle::new(days)?);
        Ok(self)
    }

    pub fn measured(mut self, label: Option<&str>) -> Self {
        self.measurement = Measurement::Value {
            label: label.map(str::to_string),
        };
        self
    }

    pub fn validate(&self) -> Result<(), TaskTypeValidationError> {
        if self.name.trim().is_empty() {
            return Err(TaskTypeValidationError::EmptyName);
        }
        if let Measurement::Value { label: Some(label) } = &self.measurement {
            if label.trim().is_empty() {
                return Err(TaskTypeValidationError::EmptyValueLabel);
            }
        }
        Ok(())
    }

    pub fn is_recurring(&self) -> bool {
        self.cycle.is_some()
    }

    pub fn has_value(&self) -> bool {
        matches!(self.measurement, Measurement::Value { .. })
    }

    pub fn value_label(&self) -> Option<&str> {
        match &self.measurement {
            Measurement::Value { label } => label.as_deref(),
            Measurement::None => None,
        }
    }

    /// The task types every new account starts with
    pub fn default_catalog() -> Vec<TaskType> {
        let builtin = |id: &str, name: &str, color: &str, icon: &str, cycle: Option<u32>| TaskType {
            cycle: cycle.map(CareCycle),
            is_default: true,
            ..TaskType::new(id, name, color, icon)
        };

        vec![
            builtin("1", "体重", "#f97316", "fa-solid fa-weight-scale", None).measured(Some("体重 (kg)")),
            builtin("2", "看医生", "#ef4444", "fa-solid fa-stethoscope", Some(180)),
            builtin("3", "驱虫", "#10b981", "fa-solid fa-shield-virus", Some(30)),
            builtin("4", "洗澡", "#8b5cf6", "fa-solid fa-bath", Some(30)),
            builtin("5", "剪指甲", "#ec4899", "fa-solid fa-hand-scissors", Some(21)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskTypeValidationError {
    #[error("Task name cannot be empty")]
    EmptyName,
    #[error("Cycle must be a positive number of days, got {0}")]
    InvalidCycle(i64),
    #[error("Value label cannot be blank")]
    EmptyValueLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_care_cycle_rejects_non_positive() {
        assert_eq!(CareCycle::new(30).unwrap().days(), 30);
        assert_eq!(CareCycle::new(0), Err(TaskTypeValidationError::InvalidCycle(0)));
        assert_eq!(CareCycle::new(-7), Err(TaskTypeValidationError::InvalidCycle(-7)));
    }

    #[test]
    fn test_with_cycle() {
        let task = TaskType::new("9", "疫苗", "#000000", "fa-solid fa-syringe");
        assert!(!task.is_recurring());

        let task = task.with_cycle(365).unwrap();
        assert_eq!(task.cycle.map(CareCycle::days), Some(365));

        let err = TaskType::new("9", "疫苗", "#000000", "fa-solid fa-syringe")
            .with_cycle(0)
            .unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_measurement_distinguishes_absent_from_unlabelled() {
        let plain = TaskType::new("a", "Walk", "#111111", "fa-solid fa-bone");
        let unlabelled = plain.clone().measured(None);
        let labelled = plain.clone().measured(Some("食量"));

        assert!(!plain.has_value());
        assert!(unlabelled.has_value());
        assert_eq!(unlabelled.value_label(), None);
        assert_eq!(labelled.value_label(), Some("食量"));
    }

    #[test]
    fn test_validate() {
        assert!(TaskType::new("a", "", "#111111", "x").validate().is_err());
        assert_eq!(
            TaskType::new("a", "Feed", "#111111", "x").measured(Some(" ")).validate(),
            Err(TaskTypeValidationError::EmptyValueLabel)
        );
        assert!(TaskType::new("a", "Feed", "#111111", "x").validate().is_ok());
    }

    #[test]
    fn test_default_catalog() {
        let catalog = TaskType::default_catalog();

        assert_eq!(catalog.len(), 5);
        assert!(catalog.iter().all(|t| t.is_default));

        let weight = &catalog[0];
        assert_eq!(weight.id, "1");
        assert!(!weight.is_recurring());
        assert_eq!(weight.value_label(), Some("体重 (kg)"));

        let cycles: Vec<Option<u32>> = catalog.iter().map(|t| t.cycle.map(CareCycle::days)).collect();
        assert_eq!(cycles, vec![None, Some(180), Some(30), Some(30), Some(21)]);
    }
}
