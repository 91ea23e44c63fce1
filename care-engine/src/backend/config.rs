//! Engine configuration.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the stock behaviour.
//!
//! ```yaml
//! card_reminder_limit: 3
//! detail_reminder_limit: 5
//! weight_task_type_id: "1"
//! initial_weight_note: "初始体重记录"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reminders shown on each pet card in the pet list
    pub card_reminder_limit: usize,
    /// Reminders shown on the pet detail screen before "show more"
    pub detail_reminder_limit: usize,
    /// Task type whose record values are body weights
    pub weight_task_type_id: String,
    /// Note attached to the weight record created with a new pet
    pub initial_weight_note: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            card_reminder_limit: 3,
            detail_reminder_limit: 5,
            weight_task_type_id: "1".to_string(),
            initial_weight_note: "初始体重记录".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse engine configuration")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine configuration at {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }
}
