use std::collections::BTreeSet;

use eat_core::{FoodProperties, InventoryView, ItemId, Slot};
use serde::{Deserialize, Serialize};

use crate::ItemCatalog;

/// Item types that must never be picked automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    items: BTreeSet<ItemId>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.items.contains(item)
    }

    pub fn insert(&mut self, item: impl Into<ItemId>) -> bool {
        self.items.insert(item.into())
    }

    pub fn remove(&mut self, item: &ItemId) -> bool {
        self.items.remove(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    /// Drop every entry the catalog does not know as food. Returns what was dropped, sorted.
    pub fn retain_consumables(&mut self, catalog: &(impl ItemCatalog + ?Sized)) -> Vec<ItemId> {
        let (keep, dropped): (BTreeSet<ItemId>, BTreeSet<ItemId>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|id| catalog.food(id).is_some());
        self.items = keep;
        dropped.into_iter().collect()
    }
}

impl<I: Into<ItemId>> FromIterator<I> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A slot chosen for eating and the food found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub slot: Slot,
    pub food: FoodProperties,
}

/// Pick the most nutritious non-excluded food.
///
/// Hotbar slots are scanned in index order and only a strictly higher nutrition replaces the
/// current pick, so the first of several equal candidates wins. The off-hand is considered last
/// and must strictly beat the best hotbar candidate; it never wins a tie.
pub fn select_best(
    inventory: &(impl InventoryView + ?Sized),
    exclusions: &ExclusionSet,
) -> Option<Selection> {
    let eligible = |slot: Slot| {
        let stack = inventory.stack(slot)?;
        let food = stack.food?;
        (!exclusions.contains(&stack.item)).then_some(Selection { slot, food })
    };

    let mut best: Option<Selection> = None;
    for candidate in Slot::hotbar_slots().filter_map(eligible) {
        if best.map_or(true, |b| candidate.food.nutrition > b.food.nutrition) {
            best = Some(candidate);
        }
    }

    if let Some(offhand) = eligible(Slot::OffHand) {
        if best.map_or(true, |b| offhand.food.nutrition > b.food.nutrition) {
            best = Some(offhand);
        }
    }

    best
}
