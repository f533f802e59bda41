use thiserror::Error;

use pk_bench::BenchError;
use pk_core::{CoreError, ParkingTerm, SpotId, VehicleClass};
use pk_graph::GraphError;

#[derive(Debug, Error)]
pub enum AllocError {
    #[error("no {vehicle} spot available")]
    NoSpotAvailable { vehicle: VehicleClass },

    #[error("no exit reachable from {from}")]
    NoExitReachable { from: SpotId },

    #[error("spot {0} is already occupied")]
    SpotOccupied(SpotId),

    #[error("spot {0} is not occupied")]
    SpotNotOccupied(SpotId),

    #[error("spot {0} is not an entrance")]
    NotAnEntrance(SpotId),

    #[error("spot {0} is not a parking spot")]
    NotParkable(SpotId),

    #[error("allocation term must be short-term or long-term, got {0}")]
    InvalidTerm(ParkingTerm),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Bench(#[from] BenchError),
}

pub type AllocResult<T> = Result<T, AllocError>;
