//! Heuristic search with a jump step, plain and occupancy-penalized.
//!
//! Both strategies are A*-style: the open set is ordered by
//! `dist + manhattan(spot, destination)` and the search stops the first time
//! the destination is popped.
//!
//! # Jump step
//!
//! A link whose endpoints are not grid-adjacent (Chebyshev distance > 1) is a
//! jump candidate.  Instead of relaxing its far end, the search walks from
//! the current spot one unit at a time in the `(signum dx, signum dy)`
//! direction, up to the far end's Chebyshev distance, and relaxes the first
//! free spot found at exact coordinates (lowest id if several share them).
//! If the walk finds none, the link is skipped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use pk_core::SpotId;

use super::{PathFinder, SearchState, check_endpoints};
use crate::{GraphResult, LotGraph, OccupancyView, Route};

/// Heuristic search with the jump step, over base link weights.
#[derive(Copy, Clone, Debug, Default)]
pub struct JumpPoint;

impl PathFinder for JumpPoint {
    fn name(&self) -> &'static str {
        "jps"
    }

    fn find_route(
        &self,
        graph:     &LotGraph,
        occupancy: &dyn OccupancyView,
        from:      SpotId,
        to:        SpotId,
    ) -> GraphResult<Route> {
        check_endpoints(graph, from, to)?;
        Ok(heuristic_search(graph, occupancy, from, to, false))
    }
}

/// [`JumpPoint`] plus the occupancy penalty on every spot entered.  The
/// default strategy for allocation routing and exit resolution.
#[derive(Copy, Clone, Debug, Default)]
pub struct Combined;

impl PathFinder for Combined {
    fn name(&self) -> &'static str {
        "combined"
    }

    fn find_route(
        &self,
        graph:     &LotGraph,
        occupancy: &dyn OccupancyView,
        from:      SpotId,
        to:        SpotId,
    ) -> GraphResult<Route> {
        check_endpoints(graph, from, to)?;
        Ok(heuristic_search(graph, occupancy, from, to, true))
    }
}

fn heuristic_search(
    graph:     &LotGraph,
    occupancy: &dyn OccupancyView,
    from:      SpotId,
    to:        SpotId,
    penalized: bool,
) -> Route {
    let mut state = SearchState::new(graph.spot_count(), from);
    let h = |spot: SpotId| u64::from(graph.manhattan(spot, to));

    // Min-heap: (f = g + h, g, spot).
    let mut open: BinaryHeap<Reverse<(u64, u64, SpotId)>> = BinaryHeap::new();
    open.push(Reverse((h(from), 0, from)));
    let mut jumps = 0usize;

    while let Some(Reverse((_, g, current))) = open.pop() {
        if current == to {
            let route = state.into_route(from, to);
            debug!(%from, %to, penalized, jumps, hops = ?route.distance(), "heuristic search done");
            return route;
        }
        if g > state.dist(current) {
            continue;
        }

        for link in graph.links(current) {
            let target = if graph.pos(current).chebyshev(graph.pos(link.to)) > 1 {
                match jump_target(graph, occupancy, current, link.to) {
                    Some(t) => {
                        jumps += 1;
                        t
                    }
                    None => continue,
                }
            } else {
                link.to
            };

            let mut step = u64::from(link.weight);
            if penalized {
                step += u64::from(graph.penalty(occupancy, target));
            }
            let next = g + step;
            if state.relax(current, target, next) {
                open.push(Reverse((next + h(target), next, target)));
            }
        }
    }

    debug!(%from, %to, penalized, jumps, "heuristic search exhausted open set");
    Route::unreachable()
}

/// First free spot on the unit-step walk from `current` toward `far`.
fn jump_target(
    graph:     &LotGraph,
    occupancy: &dyn OccupancyView,
    current:   SpotId,
    far:       SpotId,
) -> Option<SpotId> {
    let origin = graph.pos(current);
    let far_pos = graph.pos(far);
    let step = origin.step_toward(far_pos);
    let reach = origin.chebyshev(far_pos) as i32;

    (1..=reach).find_map(|k| graph.free_spot_at(origin.offset(step, k), occupancy))
}
