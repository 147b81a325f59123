//! Suspending and resuming other automation while a meal is in progress.
//!
//! The coordinator only ever undoes what it did itself: a sibling is recorded only if it was
//! active when we turned it off, and it is toggled back only if it is still off at resume time.
//! Anything the user (or another module) changed in between is left alone. Both directions are
//! gated by the config switches read at the time of the call.

use eat_core::{
    PathingMut, SiblingId, SiblingMut, TickContext, TraceEvent, TraceKind, TraceSink,
};
use tracing::debug;

use crate::AutoEatConfig;

/// Siblings paused while eating, in priority order.
pub const DEFAULT_SIBLINGS: [SiblingId; 4] = [
    SiblingId("kill-aura"),
    SiblingId("crystal-aura"),
    SiblingId("anchor-aura"),
    SiblingId("bed-aura"),
];

#[derive(Debug, Clone)]
pub struct Coordinator {
    siblings: Vec<SiblingId>,
    suspended: Vec<SiblingId>,
    paused_pathing: bool,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(DEFAULT_SIBLINGS.to_vec())
    }
}

impl Coordinator {
    /// `siblings` is visited in the given order on both suspend and resume. Duplicates are
    /// ignored.
    pub fn new(siblings: Vec<SiblingId>) -> Self {
        let mut unique = Vec::with_capacity(siblings.len());
        for id in siblings {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            siblings: unique,
            suspended: Vec::new(),
            paused_pathing: false,
        }
    }

    pub fn siblings(&self) -> &[SiblingId] {
        &self.siblings
    }

    /// Siblings this coordinator turned off and has not yet restored.
    pub fn suspended(&self) -> &[SiblingId] {
        &self.suspended
    }

    pub fn paused_pathing(&self) -> bool {
        self.paused_pathing
    }

    pub fn suspend<W>(
        &mut self,
        config: &AutoEatConfig,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) where
        W: SiblingMut + PathingMut + ?Sized,
    {
        self.suspended.clear();

        if config.pause_siblings {
            for (i, &id) in self.siblings.iter().enumerate() {
                if !world.is_sibling_active(id) {
                    continue;
                }
                world.toggle_sibling(id);
                self.suspended.push(id);
                debug!(tick = ctx.tick, sibling = %id, "suspended sibling");
                trace.emit(TraceEvent::new(ctx.tick, TraceKind::SiblingSuspended).with_a(i as u64));
            }
        }

        if config.pause_pathing && world.is_pathing() && !self.paused_pathing {
            world.pause_pathing();
            self.paused_pathing = true;
            debug!(tick = ctx.tick, "paused pathing");
            trace.emit(TraceEvent::new(ctx.tick, TraceKind::PathingPaused));
        }
    }

    /// Undo `suspend`, gated by the same switches.
    ///
    /// With `pause_siblings` off the recorded siblings are forgotten without being toggled back.
    /// With `pause_pathing` off a recorded pause is kept, so the next suspend will not pause again
    /// and a later resume with the switch back on still releases it.
    pub fn resume<W>(
        &mut self,
        config: &AutoEatConfig,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) where
        W: SiblingMut + PathingMut + ?Sized,
    {
        if config.pause_siblings {
            for (i, &id) in self.siblings.iter().enumerate() {
                if !self.suspended.contains(&id) || world.is_sibling_active(id) {
                    continue;
                }
                world.toggle_sibling(id);
                debug!(tick = ctx.tick, sibling = %id, "resumed sibling");
                trace.emit(TraceEvent::new(ctx.tick, TraceKind::SiblingResumed).with_a(i as u64));
            }
        } else if !self.suspended.is_empty() {
            debug!(
                tick = ctx.tick,
                count = self.suspended.len(),
                "sibling pause disabled, leaving siblings off"
            );
        }
        self.suspended.clear();

        if config.pause_pathing && self.paused_pathing {
            self.paused_pathing = false;
            world.resume_pathing();
            debug!(tick = ctx.tick, "resumed pathing");
            trace.emit(TraceEvent::new(ctx.tick, TraceKind::PathingResumed));
        }
    }
}
