//! Route-search strategies.
//!
//! # Pluggability
//!
//! Callers route through the [`PathFinder`] trait, so allocation and exit
//! resolution can be pointed at any strategy.  [`SearchStrategy`] names the
//! five built-in strategies and dispatches to them; its default is
//! [`SearchStrategy::Combined`].
//!
//! | Strategy          | Order key                 | Cost of entering `v`         |
//! |-------------------|---------------------------|------------------------------|
//! | `Dijkstra`        | `dist`                    | `w(u,v)`                     |
//! | `BellmanFord`     | none (`|V|-1` rounds)     | `w(u,v)`                     |
//! | `ContextWeighted` | `dist`                    | `w(u,v) + penalty(v)`        |
//! | `JumpPoint`       | `dist + manhattan(v, dst)`| `w(u,v)`, with jump step     |
//! | `Combined`        | `dist + manhattan(v, dst)`| `w(u,v) + penalty(v)`, jump  |
//!
//! # Cost units
//!
//! Costs are accumulated as `u64` so the penalty can never overflow a path.

mod bellman_ford;
mod dijkstra;
mod jump;

use std::fmt;
use std::str::FromStr;

use pk_core::SpotId;

use crate::{GraphError, GraphResult, LotGraph, OccupancyView, Route};

pub use bellman_ford::BellmanFord;
pub use dijkstra::{ContextWeighted, Dijkstra};
pub use jump::{Combined, JumpPoint};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable route search.
///
/// Implementations must not mutate the graph or the occupancy they are given
/// (both are borrowed immutably), and must return an empty [`Route`] rather
/// than an error when `to` is unreachable.  The only error is an id outside
/// the graph.
pub trait PathFinder: Send + Sync {
    /// Short machine-readable name, e.g. `"dijkstra"`.
    fn name(&self) -> &'static str;

    fn find_route(
        &self,
        graph:     &LotGraph,
        occupancy: &dyn OccupancyView,
        from:      SpotId,
        to:        SpotId,
    ) -> GraphResult<Route>;
}

// ── SearchStrategy ────────────────────────────────────────────────────────────

/// The five built-in strategies, in benchmark order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchStrategy {
    Dijkstra,
    BellmanFord,
    ContextWeighted,
    JumpPoint,
    #[default]
    Combined,
}

impl SearchStrategy {
    /// Fixed benchmark order.
    pub const ALL: [SearchStrategy; 5] = [
        SearchStrategy::Dijkstra,
        SearchStrategy::BellmanFord,
        SearchStrategy::ContextWeighted,
        SearchStrategy::JumpPoint,
        SearchStrategy::Combined,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchStrategy::Dijkstra => Dijkstra.name(),
            SearchStrategy::BellmanFord => BellmanFord.name(),
            SearchStrategy::ContextWeighted => ContextWeighted.name(),
            SearchStrategy::JumpPoint => JumpPoint.name(),
            SearchStrategy::Combined => Combined.name(),
        }
    }

    fn finder(self) -> &'static dyn PathFinder {
        match self {
            SearchStrategy::Dijkstra => &Dijkstra,
            SearchStrategy::BellmanFord => &BellmanFord,
            SearchStrategy::ContextWeighted => &ContextWeighted,
            SearchStrategy::JumpPoint => &JumpPoint,
            SearchStrategy::Combined => &Combined,
        }
    }
}

impl PathFinder for SearchStrategy {
    fn name(&self) -> &'static str {
        SearchStrategy::name(*self)
    }

    fn find_route(
        &self,
        graph:     &LotGraph,
        occupancy: &dyn OccupancyView,
        from:      SpotId,
        to:        SpotId,
    ) -> GraphResult<Route> {
        self.finder().find_route(graph, occupancy, from, to)
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchStrategy::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| GraphError::UnknownStrategy(s.to_owned()))
    }
}

// ── Shared search state ───────────────────────────────────────────────────────

const UNREACHED: u64 = u64::MAX;

/// `dist[]` / `prev[]` arrays shared by every strategy.
struct SearchState {
    dist: Vec<u64>,
    prev: Vec<SpotId>,
}

impl SearchState {
    fn new(spot_count: usize, from: SpotId) -> Self {
        let mut dist = vec![UNREACHED; spot_count];
        dist[from.index()] = 0;
        Self { dist, prev: vec![SpotId::INVALID; spot_count] }
    }

    #[inline]
    fn dist(&self, spot: SpotId) -> u64 {
        self.dist[spot.index()]
    }

    /// Record `via → to` at `cost` if it beats the best known cost.
    #[inline]
    fn relax(&mut self, via: SpotId, to: SpotId, cost: u64) -> bool {
        if cost < self.dist[to.index()] {
            self.dist[to.index()] = cost;
            self.prev[to.index()] = via;
            true
        } else {
            false
        }
    }

    /// Walk `prev[]` back from `to`.  Empty unless the walk reaches `from`.
    fn into_route(self, from: SpotId, to: SpotId) -> Route {
        if from == to {
            return Route::new(vec![from]);
        }
        let mut spots = vec![to];
        let mut cur = to;
        while cur != from {
            cur = self.prev[cur.index()];
            if cur == SpotId::INVALID || spots.len() > self.prev.len() {
                return Route::unreachable();
            }
            spots.push(cur);
        }
        spots.reverse();
        Route::new(spots)
    }
}

/// Validate both endpoints before any search work.
#[inline]
fn check_endpoints(graph: &LotGraph, from: SpotId, to: SpotId) -> GraphResult<()> {
    graph.check(from)?;
    graph.check(to)
}
