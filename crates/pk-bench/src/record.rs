//! Benchmark records and the append-only log.

use pk_core::SpotId;
use pk_graph::SearchStrategy;

use crate::{BenchResult, BenchmarkWriter};

/// Wall-clock nanoseconds of one call per strategy for one `(from, spot)`
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkRecord {
    /// Route source (the entrance at allocation time).
    pub from:            SpotId,
    /// Route destination (the allocated spot).
    pub spot:            SpotId,
    pub dijkstra_ns:     u64,
    pub bellman_ford_ns: u64,
    pub cbs_ns:          u64,
    pub jps_ns:          u64,
    pub combined_ns:     u64,
}

impl BenchmarkRecord {
    /// Build a record from timings in [`SearchStrategy::ALL`] order.
    pub fn from_timings(from: SpotId, spot: SpotId, ns: [u64; 5]) -> Self {
        let [dijkstra_ns, bellman_ford_ns, cbs_ns, jps_ns, combined_ns] = ns;
        Self { from, spot, dijkstra_ns, bellman_ford_ns, cbs_ns, jps_ns, combined_ns }
    }

    /// Timings in [`SearchStrategy::ALL`] order.
    pub fn timings(&self) -> [u64; 5] {
        [self.dijkstra_ns, self.bellman_ford_ns, self.cbs_ns, self.jps_ns, self.combined_ns]
    }

    pub fn timing(&self, strategy: SearchStrategy) -> u64 {
        match strategy {
            SearchStrategy::Dijkstra => self.dijkstra_ns,
            SearchStrategy::BellmanFord => self.bellman_ford_ns,
            SearchStrategy::ContextWeighted => self.cbs_ns,
            SearchStrategy::JumpPoint => self.jps_ns,
            SearchStrategy::Combined => self.combined_ns,
        }
    }

    /// Strategy with the smallest timing; earlier strategies win ties.
    pub fn fastest(&self) -> SearchStrategy {
        let mut best = SearchStrategy::ALL[0];
        for s in SearchStrategy::ALL {
            if self.timing(s) < self.timing(best) {
                best = s;
            }
        }
        best
    }
}

/// Growing log of benchmark records, one per allocation, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkLog {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&BenchmarkRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkRecord> + '_ {
        self.records.iter()
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Mean timing of `strategy` over all records; `None` for an empty log.
    pub fn mean_ns(&self, strategy: SearchStrategy) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: u128 = self.records.iter().map(|r| u128::from(r.timing(strategy))).sum();
        Some(total as f64 / self.records.len() as f64)
    }

    /// Write every record to `writer`, then finish it.
    pub fn write_to<W: BenchmarkWriter>(&self, writer: &mut W) -> BenchResult<()> {
        for record in &self.records {
            writer.write_record(record)?;
        }
        writer.finish()
    }
}
