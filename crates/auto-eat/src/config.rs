//! Controller configuration, loaded from YAML.

use std::path::Path;

use eat_core::ItemId;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{self, ItemCatalog};
use crate::{ConfigError, ExclusionSet, Thresholds};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoEatConfig {
    /// Foods never picked automatically
    pub blacklist: ExclusionSet,

    /// Pause sibling automation (auras) while eating
    pub pause_siblings: bool,

    /// Pause the pathing subsystem while eating
    pub pause_pathing: bool,

    pub threshold: Thresholds,
}

impl Default for AutoEatConfig {
    fn default() -> Self {
        Self {
            blacklist: catalog::default_blacklist().into_iter().collect(),
            pause_siblings: true,
            pause_pathing: true,
            threshold: Thresholds::default(),
        }
    }
}

impl AutoEatConfig {
    /// Load and range-check configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.check_thresholds()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Strict validation: thresholds in range and every blacklist entry known as food.
    pub fn validate(&self, catalog: &(impl ItemCatalog + ?Sized)) -> Result<(), ConfigError> {
        self.check_thresholds()?;

        let unknown: Vec<_> = self
            .blacklist
            .iter()
            .filter(|id| catalog.food(id).is_none())
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(ConfigError::UnknownFood(unknown));
        }
        Ok(())
    }

    /// Drop blacklist entries that are not food, logging each one.
    pub fn sanitize(&mut self, catalog: &(impl ItemCatalog + ?Sized)) -> Vec<ItemId> {
        let dropped = self.blacklist.retain_consumables(catalog);
        for id in &dropped {
            warn!(item = %id, "ignoring non-food blacklist entry");
        }
        dropped
    }

    fn check_thresholds(&self) -> Result<(), ConfigError> {
        let (min, max) = (Thresholds::RANGE_MIN, Thresholds::RANGE_MAX);

        // Also rejects NaN.
        if !(min as f32..=max as f32).contains(&self.threshold.health) {
            return Err(ConfigError::HealthThresholdOutOfRange(self.threshold.health));
        }
        if !(min..=max).contains(&self.threshold.hunger) {
            return Err(ConfigError::HungerThresholdOutOfRange(self.threshold.hunger));
        }
        Ok(())
    }
}
