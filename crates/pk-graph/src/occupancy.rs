//! Read-only occupancy access for searches.

use pk_core::{Spot, SpotId};

/// Occupancy snapshot consulted by context-aware searches and the jump step.
///
/// Ids outside the view read as free.
pub trait OccupancyView {
    fn is_occupied(&self, spot: SpotId) -> bool;
}

impl OccupancyView for [Spot] {
    #[inline]
    fn is_occupied(&self, spot: SpotId) -> bool {
        self.get(spot.index()).is_some_and(|s| s.occupied)
    }
}

impl OccupancyView for Vec<Spot> {
    #[inline]
    fn is_occupied(&self, spot: SpotId) -> bool {
        self.as_slice().is_occupied(spot)
    }
}

impl OccupancyView for [bool] {
    #[inline]
    fn is_occupied(&self, spot: SpotId) -> bool {
        self.get(spot.index()).copied().unwrap_or(false)
    }
}

impl OccupancyView for Vec<bool> {
    #[inline]
    fn is_occupied(&self, spot: SpotId) -> bool {
        self.as_slice().is_occupied(spot)
    }
}

/// A view in which every spot is free.
#[derive(Copy, Clone, Debug, Default)]
pub struct AllFree;

impl OccupancyView for AllFree {
    #[inline]
    fn is_occupied(&self, _spot: SpotId) -> bool {
        false
    }
}
