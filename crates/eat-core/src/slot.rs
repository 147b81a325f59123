use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of ordinary (hotbar) slots a controller may select from.
pub const HOTBAR_SIZE: usize = 9;

/// A slot the agent can eat from.
///
/// `OffHand` plays the role of the host's off-hand sentinel index: it is distinct from every
/// hotbar index and can never be "selected" the way a hotbar slot is, because the off-hand is
/// always held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Slot {
    Hotbar(u8),
    OffHand,
}

impl Slot {
    /// Raw inventory index the host uses for the off-hand.
    pub const OFFHAND_INDEX: usize = 45;

    /// `None` when `index` is outside the hotbar.
    pub fn hotbar(index: usize) -> Option<Self> {
        (index < HOTBAR_SIZE).then_some(Slot::Hotbar(index as u8))
    }

    /// Hotbar slots in index order.
    pub fn hotbar_slots() -> impl Iterator<Item = Slot> {
        (0..HOTBAR_SIZE as u8).map(Slot::Hotbar)
    }

    pub fn is_offhand(self) -> bool {
        matches!(self, Slot::OffHand)
    }

    pub fn index(self) -> usize {
        match self {
            Slot::Hotbar(i) => i as usize,
            Slot::OffHand => Self::OFFHAND_INDEX,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Hotbar(i) => write!(f, "hotbar[{i}]"),
            Slot::OffHand => f.write_str("offhand"),
        }
    }
}
