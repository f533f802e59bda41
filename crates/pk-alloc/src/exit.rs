//! Exit resolution at release time.

use pk_core::{SpotClass, SpotId};
use pk_graph::{ExitChoice, GraphError, LotGraph, OccupancyView, SearchStrategy, closest_exit};

use crate::{AllocError, AllocResult};

/// Finds the nearer of the lot's exits for a departing vehicle.
///
/// Exit ids are validated once against the graph at construction; a missing,
/// misclassified, or unlinked exit is a [`GraphError::MalformedGraph`].
#[derive(Debug, Clone)]
pub struct ExitResolver {
    exits:    Vec<SpotId>,
    strategy: SearchStrategy,
}

impl ExitResolver {
    pub fn new(graph: &LotGraph, exits: Vec<SpotId>) -> AllocResult<Self> {
        if exits.is_empty() {
            return Err(GraphError::MalformedGraph("no exits configured".into()).into());
        }
        for &exit in &exits {
            if !graph.contains(exit) {
                return Err(GraphError::MalformedGraph(format!("exit {exit} is not in the graph")).into());
            }
            if graph.class(exit) != SpotClass::Exit {
                return Err(GraphError::MalformedGraph(format!(
                    "spot {exit} is configured as an exit but is {:?}",
                    graph.class(exit)
                ))
                .into());
            }
            if graph.degree(exit) == 0 {
                return Err(GraphError::MalformedGraph(format!("exit {exit} has no links")).into());
            }
        }
        Ok(Self { exits, strategy: SearchStrategy::Combined })
    }

    /// Override the search used for resolution (default: combined).
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn exits(&self) -> &[SpotId] {
        &self.exits
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Nearest exit from `from` by edge count; first configured exit on ties.
    pub fn resolve(
        &self,
        graph:     &LotGraph,
        occupancy: &dyn OccupancyView,
        from:      SpotId,
    ) -> AllocResult<ExitChoice> {
        closest_exit(graph, occupancy, &self.strategy, from, &self.exits)?
            .ok_or(AllocError::NoExitReachable { from })
    }
}
