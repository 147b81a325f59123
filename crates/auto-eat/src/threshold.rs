use eat_core::VitalsView;
use serde::{Deserialize, Serialize};

/// How the health and hunger signals combine into a single trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMode {
    /// Eat when health is low.
    Health,
    /// Eat when hunger is low.
    Hunger,
    /// Eat when either is low.
    #[default]
    Any,
    /// Eat only when both are low.
    Both,
}

impl ThresholdMode {
    pub const ALL: [ThresholdMode; 4] = [
        ThresholdMode::Health,
        ThresholdMode::Hunger,
        ThresholdMode::Any,
        ThresholdMode::Both,
    ];

    pub fn test(self, health_low: bool, hunger_low: bool) -> bool {
        match self {
            ThresholdMode::Health => health_low,
            ThresholdMode::Hunger => hunger_low,
            ThresholdMode::Any => health_low || hunger_low,
            ThresholdMode::Both => health_low && hunger_low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub mode: ThresholdMode,
    /// Health at or below this counts as low.
    pub health: f32,
    /// Food level at or below this counts as low.
    pub hunger: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mode: ThresholdMode::Any,
            health: 10.0,
            hunger: 16,
        }
    }
}

impl Thresholds {
    pub const RANGE_MIN: u32 = 1;
    pub const RANGE_MAX: u32 = 19;

    pub fn health_low(&self, vitals: &(impl VitalsView + ?Sized)) -> bool {
        vitals.health() <= self.health
    }

    pub fn hunger_low(&self, vitals: &(impl VitalsView + ?Sized)) -> bool {
        vitals.food_level() <= self.hunger
    }

    pub fn triggered(&self, vitals: &(impl VitalsView + ?Sized)) -> bool {
        self.mode
            .test(self.health_low(vitals), self.hunger_low(vitals))
    }
}
