//! Integer grid coordinates.
//!
//! The lot is a dense regular grid, so every heuristic in the engine is an
//! integer metric on `GridPos`.  Entrances and exits sit one cell outside the
//! grid and may have negative coordinates.

use std::fmt;

/// Cell coordinates on the lot grid: `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|`.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `max(|dx|, |dy|)`.  Two cells are grid-adjacent iff this is ≤ 1.
    #[inline]
    pub fn chebyshev(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Unit step `(signum dx, signum dy)` pointing from `self` toward `other`.
    #[inline]
    pub fn step_toward(self, other: GridPos) -> (i32, i32) {
        ((other.x - self.x).signum(), (other.y - self.y).signum())
    }

    /// The position `k` steps of `(dx, dy)` away from `self`.
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32), k: i32) -> GridPos {
        GridPos::new(self.x + dx * k, self.y + dy * k)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
