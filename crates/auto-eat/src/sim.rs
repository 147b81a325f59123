//! Deterministic in-memory host.
//!
//! `SimHost` implements every host trait with simple, vanilla-like rules: eating takes a fixed
//! number of ticks of held input, hunger drains over time, health regenerates while well fed and
//! takes random hits from a seeded RNG. Every mutation made through a host trait is appended to
//! [`SimHost::calls`], which lets tests assert exactly what a controller touched.

use std::collections::BTreeMap;

use eat_core::{
    DeterministicRng, ExclusiveView, InventoryMut, InventoryView, ItemId, ItemStack, PathingMut,
    PathingView, SiblingId, SiblingMut, SiblingView, Slot, TickContext, UseInputMut,
    UseInputView, VitalsView, HOTBAR_SIZE,
};
use tracing::trace;

pub const MAX_FOOD_LEVEL: u32 = 20;
pub const MAX_HEALTH: f32 = 20.0;

const DAMAGE_STREAM: u64 = 0xDA3A_6E00;

/// A mutation a controller made through the host traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    SelectHotbar(u8),
    SetUseHeld(bool),
    UseItem,
    ToggleSibling(SiblingId),
    PausePathing,
    ResumePathing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimRules {
    /// Ticks of held input needed to finish one item.
    pub eat_ticks: u32,
    /// Food level drops by one every this many ticks (0 disables).
    pub hunger_drain_every: u64,
    /// Health regenerates by one every this many ticks while food level is at least 18
    /// (0 disables).
    pub regen_every: u64,
    /// Chance per tick of taking damage.
    pub damage_chance: f32,
    /// Largest single hit.
    pub max_damage: u32,
}

impl Default for SimRules {
    fn default() -> Self {
        Self {
            eat_ticks: 32,
            hunger_drain_every: 80,
            regen_every: 40,
            damage_chance: 0.01,
            max_damage: 4,
        }
    }
}

impl SimRules {
    /// No drain, regen or damage: vitals change only by eating.
    pub fn frozen() -> Self {
        Self {
            hunger_drain_every: 0,
            regen_every: 0,
            damage_chance: 0.0,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InUse {
    slot: Slot,
    ticks_left: u32,
}

#[derive(Debug, Clone)]
pub struct SimHost {
    pub rules: SimRules,
    pub hotbar: [Option<ItemStack>; HOTBAR_SIZE],
    pub offhand: Option<ItemStack>,
    pub selected: u8,
    /// The host reports the off-hand as the held slot until a hotbar slot is selected.
    pub main_is_offhand: bool,
    pub health: f32,
    pub food_level: u32,
    pub use_held: bool,
    pub navigating: bool,
    pub pathing_paused: bool,
    pub exclusive_busy: bool,
    pub calls: Vec<HostCall>,
    /// Items finished, in order.
    pub eaten: Vec<ItemId>,
    siblings: BTreeMap<SiblingId, bool>,
    in_use: Option<InUse>,
}

impl Default for SimHost {
    fn default() -> Self {
        Self::new(SimRules::default())
    }
}

impl SimHost {
    pub fn new(rules: SimRules) -> Self {
        Self {
            rules,
            hotbar: std::array::from_fn(|_| None),
            offhand: None,
            selected: 0,
            main_is_offhand: false,
            health: MAX_HEALTH,
            food_level: MAX_FOOD_LEVEL,
            use_held: false,
            navigating: false,
            pathing_paused: false,
            exclusive_busy: false,
            calls: Vec::new(),
            eaten: Vec::new(),
            siblings: BTreeMap::new(),
            in_use: None,
        }
    }

    pub fn with_hotbar(mut self, index: usize, stack: ItemStack) -> Self {
        self.hotbar[index] = Some(stack);
        self
    }

    pub fn with_offhand(mut self, stack: ItemStack) -> Self {
        self.offhand = Some(stack);
        self
    }

    pub fn with_sibling(mut self, id: SiblingId, active: bool) -> Self {
        self.siblings.insert(id, active);
        self
    }

    pub fn with_vitals(mut self, health: f32, food_level: u32) -> Self {
        self.health = health;
        self.food_level = food_level;
        self
    }

    /// Flip a sibling from outside the controller; not recorded in `calls`.
    pub fn set_sibling_active(&mut self, id: SiblingId, active: bool) {
        self.siblings.insert(id, active);
    }

    pub fn sibling_active(&self, id: SiblingId) -> bool {
        self.siblings.get(&id).copied().unwrap_or(false)
    }

    /// The host dropping the held input on its own (screen opened, focus lost, ...).
    pub fn release_use_input(&mut self) {
        self.use_held = false;
        self.in_use = None;
    }

    /// Slot currently being eaten from.
    pub fn using_slot(&self) -> Option<Slot> {
        self.in_use.map(|u| u.slot)
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Whether `slot`'s food could be eaten right now.
    fn can_eat(&self, slot: Slot) -> bool {
        self.stack(slot)
            .and_then(|s| s.food)
            .is_some_and(|f| f.always_edible || !self.is_hunger_full())
    }

    /// Advance the world after the controller's pre-tick handler has run.
    pub fn step(&mut self, ctx: &TickContext) {
        self.step_eating(ctx);
        self.step_vitals(ctx);
    }

    fn step_eating(&mut self, ctx: &TickContext) {
        if !self.use_held {
            self.in_use = None;
            return;
        }
        let Some(mut in_use) = self.in_use else {
            return;
        };
        // Swapping away from the item being eaten interrupts it.
        if in_use.slot != Slot::OffHand && in_use.slot != self.selected_slot() {
            self.in_use = None;
            return;
        }

        in_use.ticks_left = in_use.ticks_left.saturating_sub(1);
        if in_use.ticks_left > 0 {
            self.in_use = Some(in_use);
            return;
        }

        self.in_use = None;
        self.finish_item(ctx, in_use.slot);
    }

    fn finish_item(&mut self, ctx: &TickContext, slot: Slot) {
        let stack = match slot {
            Slot::Hotbar(i) => &mut self.hotbar[i as usize],
            Slot::OffHand => &mut self.offhand,
        };
        let Some(item) = stack.as_mut() else {
            return;
        };
        let nutrition = item.nutrition().unwrap_or(0);
        let id = item.item.clone();

        item.count = item.count.saturating_sub(1);
        if item.count == 0 {
            *stack = None;
        }

        self.food_level = (self.food_level + nutrition).min(MAX_FOOD_LEVEL);
        trace!(tick = ctx.tick, item = %id, food_level = self.food_level, "sim: finished item");
        self.eaten.push(id);
    }

    fn step_vitals(&mut self, ctx: &TickContext) {
        let tick = ctx.tick;
        if self.rules.hunger_drain_every > 0 && tick > 0 && tick % self.rules.hunger_drain_every == 0
        {
            self.food_level = self.food_level.saturating_sub(1);
        }

        if self.rules.regen_every > 0
            && tick % self.rules.regen_every == 0
            && self.food_level >= 18
            && self.health < MAX_HEALTH
        {
            self.health = (self.health + 1.0).min(MAX_HEALTH);
        }

        let mut rng = ctx.rng(DAMAGE_STREAM);
        if self.rules.max_damage > 0 && rng.chance(self.rules.damage_chance) {
            let damage = 1 + rng.next_below(self.rules.max_damage);
            self.health = (self.health - damage as f32).max(1.0);
            trace!(tick, damage, health = self.health, "sim: took damage");
        }
    }
}

impl VitalsView for SimHost {
    fn health(&self) -> f32 {
        self.health
    }

    fn food_level(&self) -> u32 {
        self.food_level
    }

    fn is_hunger_full(&self) -> bool {
        self.food_level >= MAX_FOOD_LEVEL
    }
}

impl InventoryView for SimHost {
    fn hotbar_stack(&self, index: usize) -> Option<&ItemStack> {
        self.hotbar.get(index).and_then(Option::as_ref)
    }

    fn offhand_stack(&self) -> Option<&ItemStack> {
        self.offhand.as_ref()
    }

    fn selected_slot(&self) -> Slot {
        if self.main_is_offhand {
            Slot::OffHand
        } else {
            Slot::Hotbar(self.selected)
        }
    }
}

impl InventoryMut for SimHost {
    fn select_hotbar(&mut self, index: u8) {
        self.calls.push(HostCall::SelectHotbar(index));
        if (index as usize) < HOTBAR_SIZE {
            self.selected = index;
            self.main_is_offhand = false;
        }
    }
}

impl UseInputView for SimHost {
    fn is_using_item(&self) -> bool {
        self.in_use.is_some()
    }
}

impl UseInputMut for SimHost {
    fn set_use_held(&mut self, held: bool) {
        self.calls.push(HostCall::SetUseHeld(held));
        self.use_held = held;
        if !held {
            self.in_use = None;
        }
    }

    fn use_item(&mut self) {
        self.calls.push(HostCall::UseItem);
        if self.in_use.is_some() {
            return;
        }
        let main = self.selected_slot();
        let slot = if self.can_eat(main) {
            main
        } else if self.can_eat(Slot::OffHand) {
            Slot::OffHand
        } else {
            return;
        };
        self.in_use = Some(InUse {
            slot,
            ticks_left: self.rules.eat_ticks.max(1),
        });
    }
}

impl SiblingView for SimHost {
    fn is_sibling_active(&self, id: SiblingId) -> bool {
        self.sibling_active(id)
    }
}

impl SiblingMut for SimHost {
    fn toggle_sibling(&mut self, id: SiblingId) {
        self.calls.push(HostCall::ToggleSibling(id));
        let active = self.sibling_active(id);
        self.siblings.insert(id, !active);
    }
}

impl PathingView for SimHost {
    fn is_pathing(&self) -> bool {
        self.navigating && !self.pathing_paused
    }
}

impl PathingMut for SimHost {
    fn pause_pathing(&mut self) {
        self.calls.push(HostCall::PausePathing);
        self.pathing_paused = true;
    }

    fn resume_pathing(&mut self) {
        self.calls.push(HostCall::ResumePathing);
        self.pathing_paused = false;
    }
}

impl ExclusiveView for SimHost {
    fn exclusive_consumer_busy(&self) -> bool {
        self.exclusive_busy
    }
}
