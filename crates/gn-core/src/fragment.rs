//! Message fragments and the three reply slots they fill.
//!
//! Every reply is assembled from three ordered slots: an opener, a pivot
//! (the load-bearing excuse), and a closer. Each level offers a set of
//! pre-written fragments per slot; the player may also type their own.

use serde::{Deserialize, Serialize};

use crate::tone::Tone;

/// A pre-written selectable phrase for one slot of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Stable catalog identifier.
    pub id: String,
    /// The phrase itself.
    pub text: String,
    /// Rhetorical register, shown to the player as a hint.
    pub tone: Tone,
}

impl Fragment {
    /// Convenience constructor for catalog data.
    pub fn new(id: &str, text: &str, tone: Tone) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            tone,
        }
    }
}

/// One of the three reply slots, in composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// The first piece of the reply.
    Opener,
    /// The middle piece carrying the actual excuse.
    Pivot,
    /// The sign-off.
    Closer,
}

impl Slot {
    /// All slots in composition order.
    pub const ALL: [Slot; 3] = [Slot::Opener, Slot::Pivot, Slot::Closer];
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opener => write!(f, "opener"),
            Self::Pivot => write!(f, "pivot"),
            Self::Closer => write!(f, "closer"),
        }
    }
}

/// The fragments a level offers, grouped by slot.
///
/// A level with no catalog entry yields an empty set: the composer offers
/// nothing to tap, but free-text entry still works.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FragmentSet {
    /// Fragments offered for the opener slot.
    pub openers: Vec<Fragment>,
    /// Fragments offered for the pivot slot.
    pub pivots: Vec<Fragment>,
    /// Fragments offered for the closer slot.
    pub closers: Vec<Fragment>,
}

impl FragmentSet {
    /// Get the fragments offered for a slot.
    pub fn for_slot(&self, slot: Slot) -> &[Fragment] {
        match slot {
            Slot::Opener => &self.openers,
            Slot::Pivot => &self.pivots,
            Slot::Closer => &self.closers,
        }
    }

    /// Whether no slot offers any fragment.
    pub fn is_empty(&self) -> bool {
        self.openers.is_empty() && self.pivots.is_empty() && self.closers.is_empty()
    }
}
