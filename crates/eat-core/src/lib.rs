//! Host-boundary primitives for tick-driven auto-eat controllers.
//!
//! Nothing in this crate makes decisions. It describes what a host (the game client, a test
//! world, the simulation) must expose so a controller can read vitals and inventory, drive the
//! use input, and coordinate with sibling automation once per tick.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod item;
pub mod rng;
pub mod sibling;
pub mod slot;
pub mod tick;
pub mod trace;
pub mod world;

pub use item::{FoodProperties, ItemId, ItemStack};
pub use rng::{DeterministicRng, SplitMix64};
pub use sibling::SiblingId;
pub use slot::{Slot, HOTBAR_SIZE};
pub use tick::TickContext;
pub use trace::{
    NullTraceSink, SharedTraceSink, TraceEvent, TraceKind, TraceSink, VecTraceSink,
};
pub use world::{
    EatWorld, ExclusiveView, InventoryMut, InventoryView, PathingMut, PathingView, SiblingMut,
    SiblingView, UseInputMut, UseInputView, VitalsView,
};
