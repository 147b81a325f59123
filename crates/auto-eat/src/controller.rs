//! The per-tick consumption state machine.

use eat_core::{
    EatWorld, InventoryMut, InventoryView, NullTraceSink, SiblingId, Slot, TickContext,
    TraceEvent, TraceKind, TraceSink, UseInputMut, VitalsView,
};
use tracing::{debug, info, trace};

use crate::{select_best, AutoEatConfig, Coordinator, Selection};

/// Result of evaluating whether to eat right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Eat(Selection),
    /// Nothing eligible to eat.
    NoFood,
    /// Food exists but thresholds are not met, or hunger is full and the food is not
    /// always-edible.
    NotHungry,
}

impl Verdict {
    pub fn selection(self) -> Option<Selection> {
        match self {
            Verdict::Eat(selection) => Some(selection),
            Verdict::NoFood | Verdict::NotHungry => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The trigger evaluated false.
    Satisfied,
    OutOfFood,
    Deactivated,
}

/// What a single [`AutoEat::on_tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The exclusive consumer was busy; nothing was read or changed.
    Yielded,
    Idle,
    Started(Slot),
    Continued(Slot),
    Stopped(StopReason),
}

/// Automatically eats when health or hunger runs low.
///
/// Call [`on_tick`](Self::on_tick) once per pre-tick event and
/// [`deactivate`](Self::deactivate) when the module is turned off. Hand slot and use input are
/// host state that anything may change between ticks, so every active tick re-asserts both.
pub struct AutoEat {
    config: AutoEatConfig,
    coordinator: Coordinator,
    trace: Box<dyn TraceSink>,
    eating: bool,
    slot: Slot,
    prev_slot: Slot,
}

impl Default for AutoEat {
    fn default() -> Self {
        Self::new(AutoEatConfig::default())
    }
}

impl AutoEat {
    pub fn new(config: AutoEatConfig) -> Self {
        Self {
            config,
            coordinator: Coordinator::default(),
            trace: Box::new(NullTraceSink),
            eating: false,
            slot: Slot::Hotbar(0),
            prev_slot: Slot::Hotbar(0),
        }
    }

    /// Replace the sibling list. Ignored while eating so resume still sees what was suspended.
    pub fn with_siblings(mut self, siblings: Vec<SiblingId>) -> Self {
        if self.eating {
            debug!(
                requested = siblings.len(),
                "mid-meal, keeping current sibling list"
            );
        } else {
            self.coordinator = Coordinator::new(siblings);
        }
        self
    }

    pub fn with_trace_sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = sink;
        self
    }

    pub fn config(&self) -> &AutoEatConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AutoEatConfig {
        &mut self.config
    }

    pub fn is_active(&self) -> bool {
        self.eating
    }

    pub fn is_eating(&self) -> bool {
        self.eating
    }

    /// Slot being eaten from; `None` while idle.
    pub fn current_slot(&self) -> Option<Slot> {
        self.eating.then_some(self.slot)
    }

    /// Slot to restore when the meal ends; `None` while idle.
    pub fn previous_slot(&self) -> Option<Slot> {
        self.eating.then_some(self.prev_slot)
    }

    pub fn suspended_siblings(&self) -> &[SiblingId] {
        self.coordinator.suspended()
    }

    pub fn suspended_pathing(&self) -> bool {
        self.coordinator.paused_pathing()
    }

    /// Decide whether to eat, and what.
    ///
    /// Selection happens first: thresholds are never consulted when there is nothing to eat.
    pub fn evaluate<W>(&self, world: &W) -> Verdict
    where
        W: VitalsView + InventoryView + ?Sized,
    {
        let Some(selection) = select_best(world, &self.config.blacklist) else {
            return Verdict::NoFood;
        };

        let triggered = self.config.threshold.triggered(world);
        let edible = !world.is_hunger_full() || selection.food.always_edible;
        if triggered && edible {
            Verdict::Eat(selection)
        } else {
            Verdict::NotHungry
        }
    }

    /// Whether the controller would eat this tick.
    pub fn should_eat<W>(&self, world: &W) -> bool
    where
        W: VitalsView + InventoryView + ?Sized,
    {
        self.evaluate(world).selection().is_some()
    }

    pub fn on_tick<W>(&mut self, ctx: &TickContext, world: &mut W) -> TickOutcome
    where
        W: EatWorld + ?Sized,
    {
        if world.exclusive_consumer_busy() {
            trace!(tick = ctx.tick, "exclusive consumer busy, yielding");
            self.trace.emit(TraceEvent::new(ctx.tick, TraceKind::Yield));
            return TickOutcome::Yielded;
        }

        let verdict = self.evaluate(&*world);

        if self.eating {
            let Some(selection) = verdict.selection() else {
                let reason = match verdict {
                    Verdict::NoFood => StopReason::OutOfFood,
                    _ => StopReason::Satisfied,
                };
                self.stop(ctx, world, reason);
                return TickOutcome::Stopped(reason);
            };
            // Also covers the stack in hand running out: selection has already moved on.
            if selection.slot != self.slot {
                self.retarget(ctx, selection.slot);
            }

            self.eat(world);
            return TickOutcome::Continued(self.slot);
        }

        match verdict {
            Verdict::Eat(selection) => {
                self.start(ctx, world, selection);
                TickOutcome::Started(selection.slot)
            }
            Verdict::NoFood | Verdict::NotHungry => TickOutcome::Idle,
        }
    }

    /// Forced stop. A no-op while idle.
    pub fn deactivate<W>(&mut self, ctx: &TickContext, world: &mut W)
    where
        W: EatWorld + ?Sized,
    {
        if self.eating {
            self.stop(ctx, world, StopReason::Deactivated);
        }
    }

    /// Clears the host's interaction target while eating so the use input eats instead of
    /// interacting with whatever the agent is looking at.
    pub fn filter_use_target<T>(&self, target: Option<T>) -> Option<T> {
        if self.eating {
            None
        } else {
            target
        }
    }

    fn start<W>(&mut self, ctx: &TickContext, world: &mut W, selection: Selection)
    where
        W: EatWorld + ?Sized,
    {
        self.prev_slot = world.selected_slot();
        self.coordinator
            .suspend(&self.config, ctx, world, self.trace.as_mut());
        self.slot = selection.slot;
        self.eat(world);

        info!(
            tick = ctx.tick,
            slot = %self.slot,
            nutrition = selection.food.nutrition,
            health = world.health(),
            food_level = world.food_level(),
            "started eating"
        );
        self.trace.emit(
            TraceEvent::new(ctx.tick, TraceKind::Start)
                .with_a(self.slot.index() as u64)
                .with_b(self.prev_slot.index() as u64),
        );
    }

    /// Hold the use input on the current slot. Re-issued every active tick.
    fn eat<W>(&mut self, world: &mut W)
    where
        W: InventoryMut + UseInputMut + ?Sized,
    {
        select(world, self.slot);
        world.set_use_held(true);
        if !world.is_using_item() {
            world.use_item();
        }
        self.eating = true;
    }

    fn retarget(&mut self, ctx: &TickContext, slot: Slot) {
        debug!(tick = ctx.tick, from = %self.slot, to = %slot, "switching food slot");
        self.trace.emit(
            TraceEvent::new(ctx.tick, TraceKind::Swap)
                .with_a(slot.index() as u64)
                .with_b(self.slot.index() as u64),
        );
        self.slot = slot;
    }

    fn stop<W>(&mut self, ctx: &TickContext, world: &mut W, reason: StopReason)
    where
        W: EatWorld + ?Sized,
    {
        if !self.prev_slot.is_offhand() {
            select(world, self.prev_slot);
        }
        world.set_use_held(false);
        self.eating = false;

        self.coordinator
            .resume(&self.config, ctx, world, self.trace.as_mut());

        info!(tick = ctx.tick, ?reason, restored = %self.prev_slot, "stopped eating");
        self.trace.emit(TraceEvent::new(ctx.tick, TraceKind::Stop).with_a(reason as u64));
    }
}

/// The off-hand is always held, so only hotbar slots need selecting.
fn select<W>(world: &mut W, slot: Slot)
where
    W: InventoryMut + ?Sized,
{
    if let Slot::Hotbar(index) = slot {
        world.select_hotbar(index);
    }
}
