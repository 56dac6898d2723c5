//! Dense identifiers for stations and stages.
//!
//! Ids are handed out in insertion order and index straight into the
//! owning `Vec`. The niche in `NonZeroU32` keeps `Option<Id>` at four bytes,
//! which the producer table of the stage graph relies on.

use core::fmt;
use core::num::NonZeroU32;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Id for position `index` of the owning collection.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Position in the owning `Vec`.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.index(), f)
    }
}

/// Point on the gas path between two stages.
pub type StationId = Id;
/// Component node of the stage graph.
pub type StageId = Id;
