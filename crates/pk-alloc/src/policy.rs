//! Spot selection.

use pk_core::{Spot, SpotId, SpotRange, VehicleClass};

/// Chooses which free spot a request gets.
///
/// Implementations read occupancy from `spots` and must not mutate it;
/// [`ParkingLot`](crate::ParkingLot) marks the chosen spot afterwards.
pub trait AllocationPolicy: Send + Sync {
    /// Pick a free spot for `vehicle` within `range`, arriving at `entrance`.
    /// `None` if every candidate is occupied.
    fn select(
        &self,
        spots:    &[Spot],
        range:    SpotRange,
        vehicle:  VehicleClass,
        entrance: SpotId,
    ) -> Option<SpotId>;
}

/// The free spot with the smallest Manhattan distance to the entrance,
/// lowest id on ties.
///
/// This is a straight-line estimate, not a graph search: on a dense regular
/// grid it tracks route cost closely and costs one scan of the range.
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestFreeSpot;

impl AllocationPolicy for NearestFreeSpot {
    fn select(
        &self,
        spots:    &[Spot],
        range:    SpotRange,
        vehicle:  VehicleClass,
        entrance: SpotId,
    ) -> Option<SpotId> {
        let origin = spots.get(entrance.index())?.pos;
        range
            .iter()
            .filter_map(|id| spots.get(id.index()))
            .filter(|s| s.is_available_for(vehicle))
            .min_by_key(|s| (origin.manhattan(s.pos), s.id))
            .map(|s| s.id)
    }
}
