//! Bellman-Ford over base link weights.
//!
//! The lot graph has no negative weights, so this never finds anything
//! Dijkstra would not; it exists as a cross-check and a timing baseline.

use tracing::debug;

use pk_core::SpotId;

use super::{PathFinder, SearchState, UNREACHED, check_endpoints};
use crate::{GraphResult, LotGraph, OccupancyView, Route};

#[derive(Copy, Clone, Debug, Default)]
pub struct BellmanFord;

impl PathFinder for BellmanFord {
    fn name(&self) -> &'static str {
        "bellman_ford"
    }

    fn find_route(
        &self,
        graph:      &LotGraph,
        _occupancy: &dyn OccupancyView,
        from:       SpotId,
        to:         SpotId,
    ) -> GraphResult<Route> {
        check_endpoints(graph, from, to)?;

        let n = graph.spot_count();
        let mut state = SearchState::new(n, from);
        let mut rounds = 0usize;

        // |V|-1 rounds over every link; stop early once a round changes nothing.
        for _ in 1..n {
            rounds += 1;
            let mut changed = false;
            for u in 0..n as u32 {
                let u = SpotId(u);
                let du = state.dist(u);
                if du == UNREACHED {
                    continue;
                }
                for link in graph.links(u) {
                    changed |= state.relax(u, link.to, du + u64::from(link.weight));
                }
            }
            if !changed {
                break;
            }
        }

        let route = state.into_route(from, to);
        debug!(%from, %to, rounds, hops = ?route.distance(), "bellman-ford search done");
        Ok(route)
    }
}
