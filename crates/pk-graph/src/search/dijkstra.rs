//! Dijkstra and the context-weighted (occupancy-penalized) variant.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use pk_core::SpotId;

use super::{PathFinder, SearchState, check_endpoints};
use crate::{GraphResult, LotGraph, OccupancyView, Route};

/// Classic Dijkstra over base link weights.  Ignores occupancy.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

impl PathFinder for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn find_route(
        &self,
        graph:      &LotGraph,
        _occupancy: &dyn OccupancyView,
        from:       SpotId,
        to:         SpotId,
    ) -> GraphResult<Route> {
        check_endpoints(graph, from, to)?;
        Ok(dijkstra(graph, from, to, |_| 0))
    }
}

/// Dijkstra where entering an occupied spot costs the graph's occupancy
/// penalty on top of the link weight.  Steers routes around parked cars when
/// equal-length alternatives exist.
#[derive(Copy, Clone, Debug, Default)]
pub struct ContextWeighted;

impl PathFinder for ContextWeighted {
    fn name(&self) -> &'static str {
        "cbs"
    }

    fn find_route(
        &self,
        graph:     &LotGraph,
        occupancy: &dyn OccupancyView,
        from:      SpotId,
        to:        SpotId,
    ) -> GraphResult<Route> {
        check_endpoints(graph, from, to)?;
        Ok(dijkstra(graph, from, to, |v| graph.penalty(occupancy, v)))
    }
}

/// Shared relaxation loop.  `extra(v)` is added to every link entering `v`
/// and must be ≥ 0, which `u32` guarantees.
fn dijkstra(
    graph: &LotGraph,
    from:  SpotId,
    to:    SpotId,
    extra: impl Fn(SpotId) -> u32,
) -> Route {
    let mut state = SearchState::new(graph.spot_count(), from);

    // Min-heap: (cost, spot).  Secondary key SpotId keeps tie-breaking
    // deterministic.
    let mut heap: BinaryHeap<Reverse<(u64, SpotId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));
    let mut relaxations = 0usize;

    while let Some(Reverse((cost, spot))) = heap.pop() {
        if spot == to {
            break;
        }
        // Skip stale heap entries.
        if cost > state.dist(spot) {
            continue;
        }

        for link in graph.links(spot) {
            let next = cost + u64::from(link.weight) + u64::from(extra(link.to));
            if state.relax(spot, link.to, next) {
                relaxations += 1;
                heap.push(Reverse((next, link.to)));
            }
        }
    }

    let route = state.into_route(from, to);
    debug!(%from, %to, relaxations, hops = ?route.distance(), "dijkstra search done");
    route
}
