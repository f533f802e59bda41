//! Closest-exit query.

use tracing::debug;

use pk_core::SpotId;

use crate::{GraphResult, LotGraph, OccupancyView, PathFinder, Route};

/// The nearer exit and the route to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitChoice {
    pub exit:     SpotId,
    pub route:    Route,
    /// Edge count of `route`.
    pub distance: usize,
}

/// Search from `from` to every id in `exits` with `finder` and return the
/// one at the smallest edge-count distance.
///
/// Ties go to the earlier exit in `exits`.  `Ok(None)` means no exit is
/// reachable.  Every id is checked before any search runs.
pub fn closest_exit(
    graph:     &LotGraph,
    occupancy: &dyn OccupancyView,
    finder:    &dyn PathFinder,
    from:      SpotId,
    exits:     &[SpotId],
) -> GraphResult<Option<ExitChoice>> {
    graph.check(from)?;
    for &exit in exits {
        graph.check(exit)?;
    }

    let mut best: Option<ExitChoice> = None;
    for &exit in exits {
        let route = finder.find_route(graph, occupancy, from, exit)?;
        let Some(distance) = route.distance() else {
            debug!(%from, %exit, "exit unreachable");
            continue;
        };
        if best.as_ref().is_none_or(|b| distance < b.distance) {
            best = Some(ExitChoice { exit, route, distance });
        }
    }
    Ok(best)
}
