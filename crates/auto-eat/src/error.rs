use std::path::PathBuf;

use eat_core::ItemId;
use thiserror::Error;

use crate::Thresholds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Yaml(#[from] serde_yaml::Error),

    #[error(
        "health threshold {0} outside {}..={}",
        Thresholds::RANGE_MIN,
        Thresholds::RANGE_MAX
    )]
    HealthThresholdOutOfRange(f32),

    #[error(
        "hunger threshold {0} outside {}..={}",
        Thresholds::RANGE_MIN,
        Thresholds::RANGE_MAX
    )]
    HungerThresholdOutOfRange(u32),

    #[error("blacklist entries are not food: {}", join(.0))]
    UnknownFood(Vec<ItemId>),
}

fn join(items: &[ItemId]) -> String {
    items
        .iter()
        .map(ItemId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
