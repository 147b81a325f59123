use core::fmt;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Item type identity, e.g. `minecraft:bread`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(Cow<'static, str>);

impl ItemId {
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ItemId {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Food data attached to a consumable item. Items without it are not food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FoodProperties {
    /// Hunger points restored; used to rank candidates.
    pub nutrition: u32,
    /// Edible even when hunger is full.
    pub always_edible: bool,
}

impl FoodProperties {
    pub const fn new(nutrition: u32) -> Self {
        Self {
            nutrition,
            always_edible: false,
        }
    }

    pub const fn always_edible(mut self) -> Self {
        self.always_edible = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u32,
    pub food: Option<FoodProperties>,
}

impl ItemStack {
    pub fn new(item: impl Into<ItemId>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
            food: None,
        }
    }

    pub fn food(item: impl Into<ItemId>, count: u32, food: FoodProperties) -> Self {
        Self {
            item: item.into(),
            count,
            food: Some(food),
        }
    }

    pub fn is_food(&self) -> bool {
        self.food.is_some()
    }

    pub fn nutrition(&self) -> Option<u32> {
        self.food.map(|f| f.nutrition)
    }
}
