//! Search results.

use pk_core::SpotId;

use crate::{LotGraph, OccupancyView};

/// An ordered sequence of spots from source to destination, inclusive.
///
/// An empty route means the destination is unreachable.  A route from a spot
/// to itself is the singleton `[spot]` with distance 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub spots: Vec<SpotId>,
}

impl Route {
    pub fn new(spots: Vec<SpotId>) -> Self {
        Self { spots }
    }

    /// The "no route" result.
    pub fn unreachable() -> Self {
        Self { spots: Vec::new() }
    }

    #[inline]
    pub fn is_unreachable(&self) -> bool {
        self.spots.is_empty()
    }

    /// Number of spots on the route (vertex count).
    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Edge count (`len - 1`); `None` when unreachable.  This is the only
    /// distance unit the engine reports.
    #[inline]
    pub fn distance(&self) -> Option<usize> {
        self.spots.len().checked_sub(1)
    }

    pub fn source(&self) -> Option<SpotId> {
        self.spots.first().copied()
    }

    pub fn destination(&self) -> Option<SpotId> {
        self.spots.last().copied()
    }

    pub fn contains(&self, spot: SpotId) -> bool {
        self.spots.contains(&spot)
    }

    /// Consecutive `(from, to)` pairs.
    pub fn hops(&self) -> impl Iterator<Item = (SpotId, SpotId)> + '_ {
        self.spots.windows(2).map(|w| (w[0], w[1]))
    }

    /// Sum of base link weights along the route.
    ///
    /// `None` if unreachable or if some hop is not a link of `graph` (a jump
    /// substitution can produce one).
    pub fn base_cost(&self, graph: &LotGraph) -> Option<u64> {
        if self.is_unreachable() {
            return None;
        }
        self.hops()
            .map(|(a, b)| graph.link_weight(a, b).map(u64::from))
            .sum()
    }

    /// Base cost plus the occupancy penalty of every spot entered (all spots
    /// after the source).
    pub fn adjusted_cost(&self, graph: &LotGraph, occupancy: &dyn OccupancyView) -> Option<u64> {
        let base = self.base_cost(graph)?;
        let penalty: u64 = self.spots[1..]
            .iter()
            .map(|&s| u64::from(graph.penalty(occupancy, s)))
            .sum();
        Some(base + penalty)
    }
}
