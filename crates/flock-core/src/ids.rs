//! Strongly typed, zero-cost boid identifier.
//!
//! The inner integer is `pub` to allow direct indexing into the flock `Vec`
//! via `id.0 as usize`, but callers should prefer the `.index()` helper for
//! clarity.

use std::fmt;

/// Index of a boid in the flock's insertion-ordered storage.
///
/// A `BoidId` is only meaningful within one population generation: every
/// reset/resize discards all boids and re-issues IDs from zero.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoidId(pub u32);

impl BoidId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BoidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoidId({})", self.0)
    }
}

impl From<BoidId> for usize {
    #[inline(always)]
    fn from(id: BoidId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for BoidId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<BoidId, Self::Error> {
        u32::try_from(n).map(BoidId)
    }
}
