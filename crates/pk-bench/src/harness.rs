//! The per-strategy timing harness.

use std::hint::black_box;
use std::time::Instant;

use tracing::debug;

use pk_core::SpotId;
use pk_graph::{LotGraph, OccupancyView, PathFinder, SearchStrategy};

use crate::{BenchResult, BenchmarkRecord};

/// Runs five path finders once each on the same inputs and times each call
/// in isolation.
///
/// The slots map to the record columns in [`SearchStrategy::ALL`] order:
/// Dijkstra, Bellman-Ford, context-weighted, jump, combined.  The default
/// harness fills them with the built-in strategies; [`with_finders`]
/// substitutes others (e.g. instrumented wrappers).
///
/// [`with_finders`]: BenchmarkHarness::with_finders
pub struct BenchmarkHarness {
    finders: [Box<dyn PathFinder>; 5],
}

impl BenchmarkHarness {
    pub fn new() -> Self {
        Self::with_finders(SearchStrategy::ALL.map(|s| Box::new(s) as Box<dyn PathFinder>))
    }

    pub fn with_finders(finders: [Box<dyn PathFinder>; 5]) -> Self {
        Self { finders }
    }

    /// Time one call of each finder for `from → to`.
    ///
    /// Only the search call sits inside each timed region; endpoint checks
    /// happen once up front, so an unknown id fails before anything is
    /// timed.
    pub fn run(
        &self,
        graph:     &LotGraph,
        occupancy: &dyn OccupancyView,
        from:      SpotId,
        to:        SpotId,
    ) -> BenchResult<BenchmarkRecord> {
        graph.check(from)?;
        graph.check(to)?;

        let mut ns = [0u64; 5];
        for (slot, finder) in ns.iter_mut().zip(&self.finders) {
            let t0 = Instant::now();
            let route = finder.find_route(graph, occupancy, from, to)?;
            let elapsed = t0.elapsed();
            black_box(&route);
            *slot = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        }

        let record = BenchmarkRecord::from_timings(from, to, ns);
        debug!(%from, %to, timings = ?ns, fastest = %record.fastest(), "benchmarked strategies");
        Ok(record)
    }
}

impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self::new()
    }
}
