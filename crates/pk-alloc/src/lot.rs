//! Lot state and the allocation / release request paths.

use tracing::{info, warn};

use pk_bench::{BenchmarkHarness, BenchmarkLog, BenchmarkRecord};
use pk_core::{LotConfig, ParkingTerm, Spot, SpotClass, SpotId, VehicleClass};
use pk_graph::{ExitChoice, GraphError, LotGraph, PathFinder, Route, SearchStrategy};

use crate::{
    AllocError, AllocResult, AllocationPolicy, ExitResolver, LotObserver, NearestFreeSpot,
    build_layout,
};

// ── Requests and outcomes ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationRequest {
    pub vehicle:  VehicleClass,
    pub term:     ParkingTerm,
    pub entrance: SpotId,
}

/// Result of a successful allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub spot:      SpotId,
    pub entrance:  SpotId,
    pub term:      ParkingTerm,
    /// Entrance → spot under the lot's routing strategy, computed after the
    /// spot was marked occupied.  Empty if the spot is unreachable.
    pub route:     Route,
    pub benchmark: BenchmarkRecord,
}

impl Allocation {
    /// Edge count of `route`; `None` if unreachable.
    pub fn distance(&self) -> Option<usize> {
        self.route.distance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub spot:            SpotId,
    /// Overstay measured by the caller; passed through unchanged.
    pub overstayed_secs: u64,
}

/// Result of a successful release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub spot:            SpotId,
    /// Term the spot was held for.
    pub term:            ParkingTerm,
    pub overstayed_secs: u64,
    pub exit:            ExitChoice,
}

impl Release {
    pub fn exit_id(&self) -> SpotId {
        self.exit.exit
    }

    /// Edge count from the released spot to the chosen exit.
    pub fn distance(&self) -> usize {
        self.exit.distance
    }
}

// ── ParkingLot ────────────────────────────────────────────────────────────────

/// One lot: its graph, spot table, and allocation machinery.
///
/// Every lot is an independent value, so any number can coexist.  All
/// mutation goes through `&mut self`; searches borrow the spot table
/// immutably for their whole run.
pub struct ParkingLot<P: AllocationPolicy = NearestFreeSpot> {
    config:    LotConfig,
    graph:     LotGraph,
    spots:     Vec<Spot>,
    entrances: Vec<SpotId>,
    exits:     ExitResolver,
    policy:    P,
    routing:   SearchStrategy,
    harness:   BenchmarkHarness,
    log:       BenchmarkLog,
}

impl ParkingLot<NearestFreeSpot> {
    /// Build the lot described by `config` with the default policy.
    pub fn new(config: LotConfig) -> AllocResult<Self> {
        Self::with_policy(config, NearestFreeSpot)
    }

    /// The reference 10×10 lot.
    pub fn reference() -> AllocResult<Self> {
        Self::new(LotConfig::default())
    }
}

impl<P: AllocationPolicy> ParkingLot<P> {
    pub fn with_policy(config: LotConfig, policy: P) -> AllocResult<Self> {
        let graph = build_layout(&config)?;
        let entrances = config.entrance_ids();
        let exits = config.exit_ids();
        Self::assemble(config, graph, entrances, exits, policy)
    }

    /// Wrap a hand-built graph.  Entrances and exits are taken from the
    /// graph's spot classes (ascending id); `config` supplies the allocation
    /// ranges.
    pub fn from_graph(config: LotConfig, graph: LotGraph, policy: P) -> AllocResult<Self> {
        for range in [config.four_wheeler, config.two_wheeler] {
            if !graph.contains(range.end) {
                return Err(GraphError::MalformedGraph(format!(
                    "allocation range ends at {} but the graph has {} spots",
                    range.end,
                    graph.spot_count()
                ))
                .into());
            }
        }
        let entrances: Vec<SpotId> = graph.spots_of_class(SpotClass::Entrance).collect();
        let exits: Vec<SpotId> = graph.spots_of_class(SpotClass::Exit).collect();
        Self::assemble(config, graph, entrances, exits, policy)
    }

    fn assemble(
        config:    LotConfig,
        graph:     LotGraph,
        entrances: Vec<SpotId>,
        exits:     Vec<SpotId>,
        policy:    P,
    ) -> AllocResult<Self> {
        let exits = ExitResolver::new(&graph, exits)?;
        let spots = graph.fresh_spots();
        info!(
            spots = spots.len(),
            links = graph.link_count(),
            entrances = ?entrances,
            exits = ?exits.exits(),
            "parking lot ready"
        );
        Ok(Self {
            config,
            graph,
            spots,
            entrances,
            exits,
            policy,
            routing: SearchStrategy::Combined,
            harness: BenchmarkHarness::default(),
            log: BenchmarkLog::new(),
        })
    }

    /// Strategy used for allocation routes and exit resolution (default:
    /// combined).
    pub fn with_routing(mut self, strategy: SearchStrategy) -> Self {
        self.routing = strategy;
        self.exits = self.exits.with_strategy(strategy);
        self
    }

    pub fn with_harness(mut self, harness: BenchmarkHarness) -> Self {
        self.harness = harness;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &LotConfig { &self.config }
    pub fn graph(&self) -> &LotGraph { &self.graph }
    pub fn spots(&self) -> &[Spot] { &self.spots }
    pub fn entrances(&self) -> &[SpotId] { &self.entrances }
    pub fn exits(&self) -> &[SpotId] { self.exits.exits() }
    pub fn routing(&self) -> SearchStrategy { self.routing }
    pub fn benchmarks(&self) -> &BenchmarkLog { &self.log }

    pub fn spot(&self, id: SpotId) -> AllocResult<&Spot> {
        self.spots.get(id.index()).ok_or(AllocError::Graph(GraphError::UnknownSpot(id)))
    }

    /// Free spots in `vehicle`'s allocation range.
    pub fn free_count(&self, vehicle: VehicleClass) -> usize {
        self.config
            .range_for(vehicle)
            .iter()
            .filter(|id| self.spots[id.index()].is_available_for(vehicle))
            .count()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Route under current occupancy with the lot's routing strategy.
    pub fn route(&self, from: SpotId, to: SpotId) -> AllocResult<Route> {
        self.route_with(self.routing, from, to)
    }

    pub fn route_with(&self, finder: impl PathFinder, from: SpotId, to: SpotId) -> AllocResult<Route> {
        Ok(finder.find_route(&self.graph, &self.spots, from, to)?)
    }

    /// The spot the policy would choose now, without allocating it.
    pub fn nearest_free(&self, vehicle: VehicleClass, entrance: SpotId) -> AllocResult<Option<SpotId>> {
        self.check_entrance(entrance)?;
        Ok(self.policy.select(&self.spots, self.config.range_for(vehicle), vehicle, entrance))
    }

    /// Nearest exit from `spot` under current occupancy.
    pub fn closest_exit(&self, spot: SpotId) -> AllocResult<ExitChoice> {
        self.exits.resolve(&self.graph, &self.spots, spot)
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Allocate the policy's choice for `request` and route to it.
    pub fn allocate(
        &mut self,
        request: AllocationRequest,
        obs:     &mut impl LotObserver,
    ) -> AllocResult<Allocation> {
        let chosen = check_term(request.term)
            .and_then(|()| self.nearest_free(request.vehicle, request.entrance))
            .and_then(|c| c.ok_or(AllocError::NoSpotAvailable { vehicle: request.vehicle }));

        let spot = match chosen {
            Ok(spot) => spot,
            Err(e) => {
                warn!(vehicle = %request.vehicle, entrance = %request.entrance, error = %e, "allocation rejected");
                obs.on_rejected(&request, &e);
                return Err(e);
            }
        };
        self.occupy_and_route(spot, request.term, request.entrance, obs)
    }

    /// Allocate a specific spot.  Fails with [`AllocError::SpotOccupied`]
    /// if it is taken; release it first to reassign it.  `term` must not be
    /// [`ParkingTerm::None`].
    pub fn allocate_at(
        &mut self,
        spot:     SpotId,
        term:     ParkingTerm,
        entrance: SpotId,
        obs:      &mut impl LotObserver,
    ) -> AllocResult<Allocation> {
        check_term(term)?;
        self.check_entrance(entrance)?;
        let s = self.spot(spot)?;
        if !s.class.is_parking() {
            return Err(AllocError::NotParkable(spot));
        }
        if s.occupied {
            return Err(AllocError::SpotOccupied(spot));
        }
        self.occupy_and_route(spot, term, entrance, obs)
    }

    /// Free an occupied spot and report the nearest exit.
    ///
    /// The exit is resolved before the spot is freed; if no exit is
    /// reachable the spot stays occupied and
    /// [`AllocError::NoExitReachable`] is returned.
    pub fn release(
        &mut self,
        request: ReleaseRequest,
        obs:     &mut impl LotObserver,
    ) -> AllocResult<Release> {
        let s = self.spot(request.spot)?;
        if !s.occupied {
            return Err(AllocError::SpotNotOccupied(request.spot));
        }
        let term = s.term;

        let exit = self.closest_exit(request.spot)?;
        self.spots[request.spot.index()].release();

        let release = Release {
            spot: request.spot,
            term,
            overstayed_secs: request.overstayed_secs,
            exit,
        };
        info!(
            spot = %release.spot,
            exit = %release.exit_id(),
            distance = release.distance(),
            overstayed_secs = release.overstayed_secs,
            "spot released"
        );
        obs.on_released(&release);
        Ok(release)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_entrance(&self, entrance: SpotId) -> AllocResult<()> {
        self.graph.check(entrance)?;
        if self.entrances.contains(&entrance) {
            Ok(())
        } else {
            Err(AllocError::NotAnEntrance(entrance))
        }
    }

    fn occupy_and_route(
        &mut self,
        spot:     SpotId,
        term:     ParkingTerm,
        entrance: SpotId,
        obs:      &mut impl LotObserver,
    ) -> AllocResult<Allocation> {
        self.spots[spot.index()].occupy(term);

        let outcome = self
            .harness
            .run(&self.graph, &self.spots, entrance, spot)
            .map_err(AllocError::from)
            .and_then(|benchmark| Ok((benchmark, self.route(entrance, spot)?)));
        let (benchmark, route) = match outcome {
            Ok(v) => v,
            Err(e) => {
                self.spots[spot.index()].release();
                return Err(e);
            }
        };

        self.log.push(benchmark);
        let allocation = Allocation { spot, entrance, term, route, benchmark };
        info!(
            spot = %spot,
            entrance = %entrance,
            term = %term,
            distance = ?allocation.distance(),
            "spot allocated"
        );
        obs.on_allocated(&allocation);
        Ok(allocation)
    }
}

/// An occupied spot always carries a real term.
fn check_term(term: ParkingTerm) -> AllocResult<()> {
    match term {
        ParkingTerm::None => Err(AllocError::InvalidTerm(term)),
        ParkingTerm::ShortTerm | ParkingTerm::LongTerm => Ok(()),
    }
}
