//! Lot graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency is a `Vec<Vec<Link>>` indexed by `SpotId`, with an entry
//! (possibly empty) for every spot.  Each undirected link is stored twice,
//! once in each endpoint's list, with `from` set to the owning spot.
//!
//! # Cell index
//!
//! A hash map from `GridPos` to the ids at that position (ascending) lets
//! the jump step find "the lowest-id free spot at these coordinates" without
//! scanning every spot.

use rustc_hash::FxHashMap;

use pk_core::config::DEFAULT_OCCUPANCY_PENALTY;
use pk_core::{GridPos, Spot, SpotClass, SpotId};

use crate::{GraphError, GraphResult, OccupancyView};

// ── Link ──────────────────────────────────────────────────────────────────────

/// One direction of an undirected, non-negative-weight connection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub from:   SpotId,
    pub to:     SpotId,
    pub weight: u32,
}

// ── LotGraph ──────────────────────────────────────────────────────────────────

/// Undirected lot graph over a fixed set of spots.
///
/// Holds topology, positions, and classes; occupancy lives with the caller
/// and is passed to searches as an [`OccupancyView`].  Do not construct
/// directly; use [`LotGraphBuilder`].
pub struct LotGraph {
    /// Grid position of each spot.  Indexed by `SpotId`.
    pub spot_pos: Vec<GridPos>,

    /// Class of each spot.  Indexed by `SpotId`.
    pub spot_class: Vec<SpotClass>,

    adjacency: Vec<Vec<Link>>,
    link_count: usize,
    occupancy_penalty: u32,
    cell_index: FxHashMap<GridPos, Vec<SpotId>>,
}

impl LotGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn spot_count(&self) -> usize {
        self.spot_pos.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    pub fn is_empty(&self) -> bool {
        self.spot_pos.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, spot: SpotId) -> bool {
        spot.index() < self.spot_count()
    }

    /// `Ok` if `spot` is in `[0, spot_count)`.
    #[inline]
    pub fn check(&self, spot: SpotId) -> GraphResult<()> {
        if self.contains(spot) {
            Ok(())
        } else {
            Err(GraphError::UnknownSpot(spot))
        }
    }

    #[inline]
    pub fn pos(&self, spot: SpotId) -> GridPos {
        self.spot_pos[spot.index()]
    }

    #[inline]
    pub fn class(&self, spot: SpotId) -> SpotClass {
        self.spot_class[spot.index()]
    }

    /// Links incident to `spot`, each with `from == spot`.
    #[inline]
    pub fn links(&self, spot: SpotId) -> &[Link] {
        &self.adjacency[spot.index()]
    }

    #[inline]
    pub fn degree(&self, spot: SpotId) -> usize {
        self.adjacency[spot.index()].len()
    }

    /// Lowest base weight among links between `a` and `b`, if any.
    pub fn link_weight(&self, a: SpotId, b: SpotId) -> Option<u32> {
        self.adjacency
            .get(a.index())?
            .iter()
            .filter(|l| l.to == b)
            .map(|l| l.weight)
            .min()
    }

    /// Ids of all spots of `class`, ascending.
    pub fn spots_of_class(&self, class: SpotClass) -> impl Iterator<Item = SpotId> + '_ {
        self.spot_class
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == class)
            .map(|(i, _)| SpotId(i as u32))
    }

    // ── Heuristics and costs ──────────────────────────────────────────────

    #[inline]
    pub fn manhattan(&self, a: SpotId, b: SpotId) -> u32 {
        self.pos(a).manhattan(self.pos(b))
    }

    pub fn occupancy_penalty(&self) -> u32 {
        self.occupancy_penalty
    }

    /// Additive cost of entering `spot` under `occupancy`.
    #[inline]
    pub fn penalty(&self, occupancy: &dyn OccupancyView, spot: SpotId) -> u32 {
        if occupancy.is_occupied(spot) { self.occupancy_penalty } else { 0 }
    }

    /// Lowest-id unoccupied spot at exactly `pos`.
    pub fn free_spot_at(&self, pos: GridPos, occupancy: &dyn OccupancyView) -> Option<SpotId> {
        self.cell_index
            .get(&pos)?
            .iter()
            .copied()
            .find(|&id| !occupancy.is_occupied(id))
    }

    /// A fresh, fully unoccupied spot table matching this graph.
    pub fn fresh_spots(&self) -> Vec<Spot> {
        self.spot_pos
            .iter()
            .zip(&self.spot_class)
            .enumerate()
            .map(|(i, (&pos, &class))| Spot::new(SpotId(i as u32), pos, class))
            .collect()
    }
}

// ── LotGraphBuilder ───────────────────────────────────────────────────────────

/// Construct a [`LotGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use pk_core::{GridPos, SpotClass};
/// use pk_graph::LotGraphBuilder;
///
/// let mut b = LotGraphBuilder::new();
/// let a = b.add_spot(GridPos::new(0, 0), SpotClass::FourWheeler);
/// let c = b.add_spot(GridPos::new(1, 0), SpotClass::FourWheeler);
/// b.add_link(a, c, 1);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.spot_count(), 2);
/// assert_eq!(graph.link_count(), 1);
/// assert_eq!(graph.degree(a), 1);
/// ```
pub struct LotGraphBuilder {
    spots:             Vec<(GridPos, SpotClass)>,
    links:             Vec<(SpotId, SpotId, u32)>,
    occupancy_penalty: u32,
}

impl LotGraphBuilder {
    pub fn new() -> Self {
        Self {
            spots:             Vec::new(),
            links:             Vec::new(),
            occupancy_penalty: DEFAULT_OCCUPANCY_PENALTY,
        }
    }

    pub fn with_capacity(spots: usize, links: usize) -> Self {
        Self {
            spots: Vec::with_capacity(spots),
            links: Vec::with_capacity(links),
            ..Self::new()
        }
    }

    /// Override the occupancy penalty (default 10).
    pub fn occupancy_penalty(mut self, penalty: u32) -> Self {
        self.occupancy_penalty = penalty;
        self
    }

    /// Add a spot and return its `SpotId` (sequential from 0).
    pub fn add_spot(&mut self, pos: GridPos, class: SpotClass) -> SpotId {
        let id = SpotId(self.spots.len() as u32);
        self.spots.push((pos, class));
        id
    }

    /// Add an undirected link; `a` and `b` reach each other at `weight`.
    pub fn add_link(&mut self, a: SpotId, b: SpotId, weight: u32) {
        self.links.push((a, b, weight));
    }

    pub fn spot_count(&self) -> usize { self.spots.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    /// Consume the builder and produce a [`LotGraph`].
    ///
    /// Fails with [`GraphError::MalformedGraph`] if a link names a spot that
    /// was never added.
    pub fn build(self) -> GraphResult<LotGraph> {
        let n = self.spots.len();
        let mut adjacency: Vec<Vec<Link>> = vec![Vec::new(); n];

        for &(a, b, weight) in &self.links {
            if a.index() >= n || b.index() >= n {
                return Err(GraphError::MalformedGraph(format!(
                    "link {a}–{b} references a spot outside 0..{n}"
                )));
            }
            adjacency[a.index()].push(Link { from: a, to: b, weight });
            adjacency[b.index()].push(Link { from: b, to: a, weight });
        }

        let mut cell_index: FxHashMap<GridPos, Vec<SpotId>> = FxHashMap::default();
        for (i, &(pos, _)) in self.spots.iter().enumerate() {
            cell_index.entry(pos).or_default().push(SpotId(i as u32));
        }

        Ok(LotGraph {
            spot_pos: self.spots.iter().map(|&(p, _)| p).collect(),
            spot_class: self.spots.iter().map(|&(_, c)| c).collect(),
            adjacency,
            link_count: self.links.len(),
            occupancy_penalty: self.occupancy_penalty,
            cell_index,
        })
    }
}

impl Default for LotGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
