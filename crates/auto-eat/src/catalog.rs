//! Built-in food table for the vanilla item set.

use eat_core::{FoodProperties, ItemId, ItemStack};

/// Lookup of food data by item type.
pub trait ItemCatalog {
    fn food(&self, item: &ItemId) -> Option<FoodProperties>;

    /// A stack of `item`, carrying food data when the catalog knows it as food.
    fn stack(&self, item: ItemId, count: u32) -> ItemStack {
        let food = self.food(&item);
        ItemStack { item, count, food }
    }
}

pub mod items {
    use eat_core::ItemId;

    pub const APPLE: ItemId = ItemId::from_static("minecraft:apple");
    pub const BAKED_POTATO: ItemId = ItemId::from_static("minecraft:baked_potato");
    pub const BEETROOT: ItemId = ItemId::from_static("minecraft:beetroot");
    pub const BEETROOT_SOUP: ItemId = ItemId::from_static("minecraft:beetroot_soup");
    pub const BREAD: ItemId = ItemId::from_static("minecraft:bread");
    pub const CARROT: ItemId = ItemId::from_static("minecraft:carrot");
    pub const CHICKEN: ItemId = ItemId::from_static("minecraft:chicken");
    pub const CHORUS_FRUIT: ItemId = ItemId::from_static("minecraft:chorus_fruit");
    pub const COOKED_BEEF: ItemId = ItemId::from_static("minecraft:cooked_beef");
    pub const COOKED_CHICKEN: ItemId = ItemId::from_static("minecraft:cooked_chicken");
    pub const COOKED_COD: ItemId = ItemId::from_static("minecraft:cooked_cod");
    pub const COOKED_MUTTON: ItemId = ItemId::from_static("minecraft:cooked_mutton");
    pub const COOKED_PORKCHOP: ItemId = ItemId::from_static("minecraft:cooked_porkchop");
    pub const COOKED_RABBIT: ItemId = ItemId::from_static("minecraft:cooked_rabbit");
    pub const COOKED_SALMON: ItemId = ItemId::from_static("minecraft:cooked_salmon");
    pub const COOKIE: ItemId = ItemId::from_static("minecraft:cookie");
    pub const DRIED_KELP: ItemId = ItemId::from_static("minecraft:dried_kelp");
    pub const ENCHANTED_GOLDEN_APPLE: ItemId =
        ItemId::from_static("minecraft:enchanted_golden_apple");
    pub const GLOW_BERRIES: ItemId = ItemId::from_static("minecraft:glow_berries");
    pub const GOLDEN_APPLE: ItemId = ItemId::from_static("minecraft:golden_apple");
    pub const GOLDEN_CARROT: ItemId = ItemId::from_static("minecraft:golden_carrot");
    pub const MELON_SLICE: ItemId = ItemId::from_static("minecraft:melon_slice");
    pub const MUSHROOM_STEW: ItemId = ItemId::from_static("minecraft:mushroom_stew");
    pub const POISONOUS_POTATO: ItemId = ItemId::from_static("minecraft:poisonous_potato");
    pub const POTATO: ItemId = ItemId::from_static("minecraft:potato");
    pub const PUFFERFISH: ItemId = ItemId::from_static("minecraft:pufferfish");
    pub const PUMPKIN_PIE: ItemId = ItemId::from_static("minecraft:pumpkin_pie");
    pub const RABBIT_STEW: ItemId = ItemId::from_static("minecraft:rabbit_stew");
    pub const ROTTEN_FLESH: ItemId = ItemId::from_static("minecraft:rotten_flesh");
    pub const SPIDER_EYE: ItemId = ItemId::from_static("minecraft:spider_eye");
    pub const SUSPICIOUS_STEW: ItemId = ItemId::from_static("minecraft:suspicious_stew");
    pub const SWEET_BERRIES: ItemId = ItemId::from_static("minecraft:sweet_berries");

    pub const DIAMOND_SWORD: ItemId = ItemId::from_static("minecraft:diamond_sword");
    pub const SHIELD: ItemId = ItemId::from_static("minecraft:shield");
    pub const TOTEM_OF_UNDYING: ItemId = ItemId::from_static("minecraft:totem_of_undying");
}

const fn food(nutrition: u32) -> FoodProperties {
    FoodProperties::new(nutrition)
}

static VANILLA_FOODS: &[(&str, FoodProperties)] = &[
    ("minecraft:apple", food(4)),
    ("minecraft:baked_potato", food(5)),
    ("minecraft:beetroot", food(1)),
    ("minecraft:beetroot_soup", food(6)),
    ("minecraft:bread", food(5)),
    ("minecraft:carrot", food(3)),
    ("minecraft:chicken", food(2)),
    ("minecraft:chorus_fruit", food(4).always_edible()),
    ("minecraft:cooked_beef", food(8)),
    ("minecraft:cooked_chicken", food(6)),
    ("minecraft:cooked_cod", food(5)),
    ("minecraft:cooked_mutton", food(6)),
    ("minecraft:cooked_porkchop", food(8)),
    ("minecraft:cooked_rabbit", food(5)),
    ("minecraft:cooked_salmon", food(6)),
    ("minecraft:cookie", food(2)),
    ("minecraft:dried_kelp", food(1)),
    ("minecraft:enchanted_golden_apple", food(4).always_edible()),
    ("minecraft:glow_berries", food(2)),
    ("minecraft:golden_apple", food(4).always_edible()),
    ("minecraft:golden_carrot", food(6)),
    ("minecraft:melon_slice", food(2)),
    ("minecraft:mushroom_stew", food(6)),
    ("minecraft:poisonous_potato", food(2)),
    ("minecraft:potato", food(1)),
    ("minecraft:pufferfish", food(1)),
    ("minecraft:pumpkin_pie", food(8)),
    ("minecraft:rabbit_stew", food(10)),
    ("minecraft:rotten_flesh", food(4)),
    ("minecraft:spider_eye", food(2)),
    ("minecraft:suspicious_stew", food(6).always_edible()),
    ("minecraft:sweet_berries", food(2)),
];

/// Foods of the vanilla game.
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaCatalog;

impl ItemCatalog for VanillaCatalog {
    fn food(&self, item: &ItemId) -> Option<FoodProperties> {
        VANILLA_FOODS
            .iter()
            .find(|(id, _)| *id == item.as_str())
            .map(|(_, food)| *food)
    }
}

/// Default exclusion set: golden apples plus foods with harmful side effects.
pub fn default_blacklist() -> Vec<ItemId> {
    vec![
        items::ENCHANTED_GOLDEN_APPLE,
        items::GOLDEN_APPLE,
        items::CHORUS_FRUIT,
        items::POISONOUS_POTATO,
        items::PUFFERFISH,
        items::CHICKEN,
        items::ROTTEN_FLESH,
        items::SPIDER_EYE,
        items::SUSPICIOUS_STEW,
    ]
}
