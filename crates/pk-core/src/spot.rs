//! Spot records and their classification.

use std::fmt;

use crate::{GridPos, SpotId};

/// What a spot is for.  Fixed at creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpotClass {
    FourWheeler,
    TwoWheeler,
    Entrance,
    Exit,
}

impl SpotClass {
    /// `true` for the two parking classes; entrances and exits are never
    /// allocation targets.
    #[inline]
    pub fn is_parking(self) -> bool {
        matches!(self, SpotClass::FourWheeler | SpotClass::TwoWheeler)
    }
}

/// Vehicle class named in an allocation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VehicleClass {
    FourWheeler,
    TwoWheeler,
}

impl VehicleClass {
    /// The spot class this vehicle parks in.
    #[inline]
    pub fn spot_class(self) -> SpotClass {
        match self {
            VehicleClass::FourWheeler => SpotClass::FourWheeler,
            VehicleClass::TwoWheeler => SpotClass::TwoWheeler,
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VehicleClass::FourWheeler => "four-wheeler",
            VehicleClass::TwoWheeler => "two-wheeler",
        })
    }
}

/// Parking term of an occupied spot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParkingTerm {
    #[default]
    None,
    ShortTerm,
    LongTerm,
}

impl fmt::Display for ParkingTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParkingTerm::None => "none",
            ParkingTerm::ShortTerm => "short-term",
            ParkingTerm::LongTerm => "long-term",
        })
    }
}

/// One vertex of the lot: identity, position, class, and occupancy.
///
/// `id`, `pos`, and `class` never change.  `occupied` and `term` toggle for
/// the lifetime of the lot; `term` is [`ParkingTerm::None`] whenever the spot
/// is free.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spot {
    pub id:       SpotId,
    pub pos:      GridPos,
    pub class:    SpotClass,
    pub occupied: bool,
    pub term:     ParkingTerm,
}

impl Spot {
    /// A free spot.
    pub fn new(id: SpotId, pos: GridPos, class: SpotClass) -> Self {
        Self { id, pos, class, occupied: false, term: ParkingTerm::None }
    }

    /// Mark the spot occupied for `term`.
    #[inline]
    pub fn occupy(&mut self, term: ParkingTerm) {
        self.occupied = true;
        self.term = term;
    }

    /// Reset to the free state.
    #[inline]
    pub fn release(&mut self) {
        self.occupied = false;
        self.term = ParkingTerm::None;
    }

    /// `true` if a vehicle of `vehicle` class may park here right now.
    #[inline]
    pub fn is_available_for(&self, vehicle: VehicleClass) -> bool {
        !self.occupied && self.class == vehicle.spot_class()
    }
}
