use core::fmt;

/// Opaque identity of a sibling automation behavior (an aura, a miner, ...).
///
/// The host maps each id to whatever it actually toggles; controllers only ever compare ids and
/// hand them back through [`crate::SiblingMut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SiblingId(pub &'static str);

impl SiblingId {
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SiblingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
