//! Lot configuration.
//!
//! `LotConfig::default()` describes the reference lot: a 10×10 grid whose
//! upper five rows (ids 0–49) are four-wheeler spots and lower five rows
//! (ids 50–99) two-wheeler spots, with two entrances and two exits attached
//! to fixed border cells.
//!
//! # Id assignment
//!
//! Grid cell `(col, row)` gets id `row * grid_width + col`.  Entrances follow
//! in configuration order, then exits, so the reference lot has entrances
//! 100 and 101 and exits 102 and 103.

use crate::{CoreError, CoreResult, GridPos, SpotId, VehicleClass};

/// Default additive cost for entering an occupied spot.
pub const DEFAULT_OCCUPANCY_PENALTY: u32 = 10;

// ── SpotRange ─────────────────────────────────────────────────────────────────

/// Inclusive id range `start..=end` scanned when allocating one vehicle class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotRange {
    pub start: SpotId,
    pub end:   SpotId,
}

impl SpotRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start: SpotId(start), end: SpotId(end) }
    }

    #[inline]
    pub fn contains(&self, id: SpotId) -> bool {
        self.start <= id && id <= self.end
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = SpotId> + use<> {
        (self.start.0..=self.end.0).map(SpotId)
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end.0 - self.start.0) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn overlaps(&self, other: &SpotRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

// ── AccessPoint ───────────────────────────────────────────────────────────────

/// An entrance or exit: a spot outside the grid linked to one border cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessPoint {
    pub pos:       GridPos,
    /// Grid cell this access point is linked to.
    pub attach_to: SpotId,
}

impl AccessPoint {
    pub const fn new(x: i32, y: i32, attach_to: u32) -> Self {
        Self { pos: GridPos::new(x, y), attach_to: SpotId(attach_to) }
    }
}

// ── LotConfig ─────────────────────────────────────────────────────────────────

/// Top-level lot configuration.
///
/// Typically left at its default, or loaded from JSON by the application
/// crate (feature `serde`) and passed to the layout builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LotConfig {
    /// Grid columns.  Default: 10.
    pub grid_width: u32,

    /// Grid rows.  Default: 10.
    pub grid_height: u32,

    /// Base weight of every link in the layout.  Default: 1.
    pub link_weight: u32,

    /// Cost added for entering an occupied spot in context-aware searches.
    /// Default: [`DEFAULT_OCCUPANCY_PENALTY`].
    pub occupancy_penalty: u32,

    /// Spots scanned for four-wheeler requests.  Default: 0–49.
    pub four_wheeler: SpotRange,

    /// Spots scanned for two-wheeler requests.  Default: 50–99.
    pub two_wheeler: SpotRange,

    pub entrances: Vec<AccessPoint>,

    pub exits: Vec<AccessPoint>,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            grid_width:        10,
            grid_height:       10,
            link_weight:       1,
            occupancy_penalty: DEFAULT_OCCUPANCY_PENALTY,
            four_wheeler:      SpotRange::new(0, 49),
            two_wheeler:       SpotRange::new(50, 99),
            entrances: vec![
                AccessPoint::new(-1, 2, 20),
                AccessPoint::new(10, 7, 79),
            ],
            exits: vec![
                AccessPoint::new(5, -1, 4),
                AccessPoint::new(7, -1, 6),
            ],
        }
    }
}

impl LotConfig {
    /// Number of grid cells (parking spots).  Saturates at `u32::MAX`;
    /// [`validate`](Self::validate) rejects grids that large.
    #[inline]
    pub fn grid_cells(&self) -> u32 {
        self.grid_width.saturating_mul(self.grid_height)
    }

    /// Cells plus access points, or `None` if the total leaves no room below
    /// the `SpotId::INVALID` sentinel.
    fn checked_spot_total(&self) -> Option<u32> {
        let access = u32::try_from(self.entrances.len() + self.exits.len()).ok()?;
        let total = self.grid_width.checked_mul(self.grid_height)?.checked_add(access)?;
        (total < SpotId::INVALID.0).then_some(total)
    }

    /// Total spot count including entrances and exits.
    pub fn spot_count(&self) -> usize {
        self.grid_cells() as usize + self.entrances.len() + self.exits.len()
    }

    /// Id of grid cell `(col, row)`.
    #[inline]
    pub fn cell_id(&self, col: u32, row: u32) -> SpotId {
        SpotId(row.saturating_mul(self.grid_width).saturating_add(col))
    }

    /// Allocation range for `vehicle`.
    pub fn range_for(&self, vehicle: VehicleClass) -> SpotRange {
        match vehicle {
            VehicleClass::FourWheeler => self.four_wheeler,
            VehicleClass::TwoWheeler => self.two_wheeler,
        }
    }

    /// Ids assigned to the entrances, in configuration order.
    pub fn entrance_ids(&self) -> Vec<SpotId> {
        let base = self.grid_cells();
        (0..self.entrances.len() as u32).map(|i| SpotId(base.saturating_add(i))).collect()
    }

    /// Ids assigned to the exits, in configuration order.
    pub fn exit_ids(&self) -> Vec<SpotId> {
        let base = self.grid_cells().saturating_add(self.entrances.len() as u32);
        (0..self.exits.len() as u32).map(|i| SpotId(base.saturating_add(i))).collect()
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(CoreError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.checked_spot_total().is_none() {
            return Err(CoreError::Config(format!(
                "{}x{} grid with {} access points exceeds the spot id space",
                self.grid_width,
                self.grid_height,
                self.entrances.len() + self.exits.len()
            )));
        }
        let cells = self.grid_cells();

        for (name, range) in [("four_wheeler", &self.four_wheeler), ("two_wheeler", &self.two_wheeler)] {
            if range.is_empty() {
                return Err(CoreError::Config(format!("{name} range is empty")));
            }
            if range.end.0 >= cells {
                return Err(CoreError::Config(format!(
                    "{name} range ends at {} but the grid has {cells} cells",
                    range.end
                )));
            }
        }
        if self.four_wheeler.overlaps(&self.two_wheeler) {
            return Err(CoreError::Config("vehicle ranges overlap".into()));
        }

        if self.entrances.is_empty() {
            return Err(CoreError::Config("at least one entrance is required".into()));
        }
        if self.exits.is_empty() {
            return Err(CoreError::Config("at least one exit is required".into()));
        }
        for ap in self.entrances.iter().chain(&self.exits) {
            if ap.attach_to.0 >= cells {
                return Err(CoreError::Config(format!(
                    "access point at {} attaches to {}, outside the grid",
                    ap.pos, ap.attach_to
                )));
            }
            if self.in_grid(ap.pos) {
                return Err(CoreError::Config(format!(
                    "access point at {} overlaps a grid cell",
                    ap.pos
                )));
            }
        }
        Ok(())
    }

    fn in_grid(&self, pos: GridPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as u32) < self.grid_width
            && (pos.y as u32) < self.grid_height
    }
}
