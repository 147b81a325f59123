//! What a host exposes to a consumption controller.
//!
//! Each collaborator is its own small trait so test worlds only implement what they need;
//! [`EatWorld`] bundles the full set a controller requires. Everything here is shared, mutable
//! host state: controllers must read it fresh every tick and never cache it.

use crate::{ItemStack, SiblingId, Slot};

pub trait VitalsView {
    fn health(&self) -> f32;
    fn food_level(&self) -> u32;
    fn is_hunger_full(&self) -> bool;
}

pub trait InventoryView {
    /// Stack in hotbar slot `index` (`0..HOTBAR_SIZE`); `None` when empty.
    fn hotbar_stack(&self, index: usize) -> Option<&ItemStack>;
    fn offhand_stack(&self) -> Option<&ItemStack>;
    /// The slot currently held in the main hand.
    fn selected_slot(&self) -> Slot;

    fn stack(&self, slot: Slot) -> Option<&ItemStack> {
        match slot {
            Slot::Hotbar(i) => self.hotbar_stack(i as usize),
            Slot::OffHand => self.offhand_stack(),
        }
    }
}

pub trait InventoryMut: InventoryView {
    /// Move the main hand to hotbar slot `index`.
    fn select_hotbar(&mut self, index: u8);
}

pub trait UseInputView {
    /// Whether the agent is mid-use (e.g. partway through eating).
    fn is_using_item(&self) -> bool;
}

pub trait UseInputMut: UseInputView {
    /// Hold or release the use input. The host may clear it on its own at any time.
    fn set_use_held(&mut self, held: bool);
    /// One explicit use attempt, as if the input had just been pressed.
    fn use_item(&mut self);
}

pub trait SiblingView {
    fn is_sibling_active(&self, id: SiblingId) -> bool;
}

pub trait SiblingMut: SiblingView {
    fn toggle_sibling(&mut self, id: SiblingId);
}

/// The external movement-automation subsystem.
pub trait PathingView {
    fn is_pathing(&self) -> bool;
}

pub trait PathingMut: PathingView {
    fn pause_pathing(&mut self);
    fn resume_pathing(&mut self);
}

/// A distinct consumption controller that must not be interrupted.
pub trait ExclusiveView {
    fn exclusive_consumer_busy(&self) -> bool;
}

pub trait EatWorld:
    VitalsView + InventoryMut + UseInputMut + SiblingMut + PathingMut + ExclusiveView
{
}

impl<W> EatWorld for W where
    W: VitalsView + InventoryMut + UseInputMut + SiblingMut + PathingMut + ExclusiveView + ?Sized
{
}
