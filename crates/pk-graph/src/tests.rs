//! Unit tests for pk-graph.
//!
//! All tests build their graphs by hand; the reference lot lives in
//! `pk-alloc` and is exercised there.

#[cfg(test)]
mod helpers {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use pk_core::{GridPos, SpotClass, SpotId};
    use crate::{LotGraph, LotGraphBuilder};

    /// `w × h` grid, id = `row * w + col`, 4-neighbour links of weight 1.
    pub fn grid(w: u32, h: u32) -> LotGraph {
        grid_with(w, h, |_, _| true)
    }

    /// Grid whose horizontal/vertical links are kept when `keep(a, b)`.
    pub fn grid_with(w: u32, h: u32, mut keep: impl FnMut(SpotId, SpotId) -> bool) -> LotGraph {
        let mut b = LotGraphBuilder::new();
        for row in 0..h {
            for col in 0..w {
                b.add_spot(GridPos::new(col as i32, row as i32), SpotClass::FourWheeler);
            }
        }
        for row in 0..h {
            for col in 0..w {
                let id = SpotId(row * w + col);
                if col + 1 < w && keep(id, SpotId(id.0 + 1)) {
                    b.add_link(id, SpotId(id.0 + 1), 1);
                }
                if row + 1 < h && keep(id, SpotId(id.0 + w)) {
                    b.add_link(id, SpotId(id.0 + w), 1);
                }
            }
        }
        b.build().unwrap()
    }

    /// Grid with roughly `keep_pct`% of links kept, reproducible per seed.
    pub fn random_grid(w: u32, h: u32, keep_pct: u32, seed: u64) -> LotGraph {
        let mut rng = SmallRng::seed_from_u64(seed);
        grid_with(w, h, |_, _| rng.gen_range(0..100) < keep_pct)
    }

    /// Two parallel rows:
    ///
    /// ```text
    ///   0 ─ 1 ─ 2
    ///   │       │
    ///   3 ─ 4 ─ 5
    /// ```
    ///
    /// 0→2 is uniquely shortest through 1 (cost 2); the detour through the
    /// bottom row costs 4.
    pub fn ladder() -> LotGraph {
        let mut b = LotGraphBuilder::new();
        for row in 0..2 {
            for col in 0..3 {
                b.add_spot(GridPos::new(col, row), SpotClass::FourWheeler);
            }
        }
        for (a, c) in [(0, 1), (1, 2), (0, 3), (3, 4), (4, 5), (5, 2)] {
            b.add_link(SpotId(a), SpotId(c), 1);
        }
        b.build().unwrap()
    }

    /// Occupancy vector with `occupied` set.
    pub fn occupied(n: usize, occupied: &[u32]) -> Vec<bool> {
        let mut v = vec![false; n];
        for &i in occupied {
            v[i as usize] = true;
        }
        v
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use pk_core::{GridPos, SpotClass, SpotId};
    use crate::{AllFree, GraphError, LotGraphBuilder};

    #[test]
    fn empty_build() {
        let g = LotGraphBuilder::new().build().unwrap();
        assert_eq!(g.spot_count(), 0);
        assert_eq!(g.link_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn links_are_symmetric() {
        let mut b = LotGraphBuilder::new();
        let a = b.add_spot(GridPos::new(0, 0), SpotClass::FourWheeler);
        let c = b.add_spot(GridPos::new(1, 0), SpotClass::FourWheeler);
        b.add_link(a, c, 7);
        let g = b.build().unwrap();

        assert_eq!(g.link_count(), 1);
        assert_eq!(g.link_weight(a, c), Some(7));
        assert_eq!(g.link_weight(c, a), Some(7));
        assert!(g.links(a).iter().all(|l| l.from == a));
        assert!(g.links(c).iter().all(|l| l.from == c));
    }

    #[test]
    fn every_spot_has_an_adjacency_entry() {
        let mut b = LotGraphBuilder::new();
        let lonely = b.add_spot(GridPos::new(4, 4), SpotClass::TwoWheeler);
        let g = b.build().unwrap();
        assert_eq!(g.degree(lonely), 0);
        assert!(g.links(lonely).is_empty());
    }

    #[test]
    fn link_to_missing_spot_is_malformed() {
        let mut b = LotGraphBuilder::new();
        let a = b.add_spot(GridPos::new(0, 0), SpotClass::FourWheeler);
        b.add_link(a, SpotId(9), 1);
        assert!(matches!(b.build(), Err(GraphError::MalformedGraph(_))));
    }

    #[test]
    fn check_rejects_out_of_range() {
        let g = super::helpers::grid(2, 2);
        assert!(g.check(SpotId(3)).is_ok());
        assert!(matches!(g.check(SpotId(4)), Err(GraphError::UnknownSpot(SpotId(4)))));
    }

    #[test]
    fn free_spot_at_prefers_lowest_free_id() {
        let mut b = LotGraphBuilder::new();
        let first = b.add_spot(GridPos::new(2, 2), SpotClass::FourWheeler);
        let second = b.add_spot(GridPos::new(2, 2), SpotClass::TwoWheeler);
        let g = b.build().unwrap();

        assert_eq!(g.free_spot_at(GridPos::new(2, 2), &AllFree), Some(first));
        let occ = super::helpers::occupied(2, &[0]);
        assert_eq!(g.free_spot_at(GridPos::new(2, 2), &occ), Some(second));
        let occ = super::helpers::occupied(2, &[0, 1]);
        assert_eq!(g.free_spot_at(GridPos::new(2, 2), &occ), None);
        assert_eq!(g.free_spot_at(GridPos::new(0, 0), &AllFree), None);
    }

    #[test]
    fn fresh_spots_match_graph() {
        let g = super::helpers::grid(3, 2);
        let spots = g.fresh_spots();
        assert_eq!(spots.len(), 6);
        assert_eq!(spots[4].pos, GridPos::new(1, 1));
        assert!(spots.iter().all(|s| !s.occupied));
    }

    #[test]
    fn penalty_follows_occupancy() {
        let mut b = LotGraphBuilder::new().occupancy_penalty(25);
        b.add_spot(GridPos::new(0, 0), SpotClass::FourWheeler);
        let g = b.build().unwrap();
        assert_eq!(g.penalty(&vec![true], SpotId(0)), 25);
        assert_eq!(g.penalty(&AllFree, SpotId(0)), 0);
    }
}

// ── Route helpers ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use pk_core::SpotId;
    use crate::{AllFree, Route};

    #[test]
    fn distance_is_edge_count() {
        assert_eq!(Route::unreachable().distance(), None);
        assert_eq!(Route::new(vec![SpotId(1)]).distance(), Some(0));
        assert_eq!(Route::new(vec![SpotId(0), SpotId(1), SpotId(2)]).distance(), Some(2));
    }

    #[test]
    fn costs_on_ladder() {
        let g = super::helpers::ladder();
        let top = Route::new(vec![SpotId(0), SpotId(1), SpotId(2)]);
        assert_eq!(top.base_cost(&g), Some(2));
        assert_eq!(top.adjusted_cost(&g, &AllFree), Some(2));

        let occ = super::helpers::occupied(6, &[1]);
        assert_eq!(top.adjusted_cost(&g, &occ), Some(12));

        let not_linked = Route::new(vec![SpotId(0), SpotId(4)]);
        assert_eq!(not_linked.base_cost(&g), None);
        assert_eq!(Route::unreachable().base_cost(&g), None);
    }
}

// ── Strategies ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod strategies {
    use pk_core::{GridPos, SpotClass, SpotId};
    use crate::{AllFree, GraphError, LotGraphBuilder, PathFinder, SearchStrategy};

    #[test]
    fn same_spot_is_singleton() {
        let g = super::helpers::grid(3, 3);
        for s in SearchStrategy::ALL {
            let r = s.find_route(&g, &AllFree, SpotId(4), SpotId(4)).unwrap();
            assert_eq!(r.spots, vec![SpotId(4)], "{s}");
            assert_eq!(r.distance(), Some(0));
        }
    }

    #[test]
    fn unknown_spot_fails_fast() {
        let g = super::helpers::grid(3, 3);
        for s in SearchStrategy::ALL {
            let r = s.find_route(&g, &AllFree, SpotId(0), SpotId(9));
            assert!(matches!(r, Err(GraphError::UnknownSpot(SpotId(9)))), "{s}");
            let r = s.find_route(&g, &AllFree, SpotId(42), SpotId(0));
            assert!(matches!(r, Err(GraphError::UnknownSpot(SpotId(42)))), "{s}");
        }
    }

    #[test]
    fn isolated_spot_is_unreachable() {
        let mut b = LotGraphBuilder::new();
        let a = b.add_spot(GridPos::new(0, 0), SpotClass::FourWheeler);
        let c = b.add_spot(GridPos::new(1, 0), SpotClass::FourWheeler);
        let lonely = b.add_spot(GridPos::new(5, 5), SpotClass::FourWheeler);
        b.add_link(a, c, 1);
        let g = b.build().unwrap();

        for s in SearchStrategy::ALL {
            assert!(s.find_route(&g, &AllFree, a, lonely).unwrap().is_unreachable(), "{s}");
            assert!(s.find_route(&g, &AllFree, lonely, a).unwrap().is_unreachable(), "{s}");
        }
    }

    #[test]
    fn routes_are_linked_end_to_end() {
        let g = super::helpers::grid(5, 4);
        for s in SearchStrategy::ALL {
            let r = s.find_route(&g, &AllFree, SpotId(0), SpotId(19)).unwrap();
            assert_eq!(r.source(), Some(SpotId(0)), "{s}");
            assert_eq!(r.destination(), Some(SpotId(19)), "{s}");
            for (a, b) in r.hops() {
                assert!(g.link_weight(a, b).is_some(), "{s}: {a}->{b} not linked");
            }
            assert_eq!(r.distance(), Some(7), "{s}");
        }
    }

    #[test]
    fn reruns_are_identical() {
        let g = super::helpers::random_grid(8, 8, 75, 7);
        let occ = super::helpers::occupied(64, &[9, 18, 27, 36]);
        for s in SearchStrategy::ALL {
            let a = s.find_route(&g, &occ, SpotId(0), SpotId(63)).unwrap();
            let b = s.find_route(&g, &occ, SpotId(0), SpotId(63)).unwrap();
            assert_eq!(a, b, "{s}");
        }
    }

    #[test]
    fn strategy_names_parse_back() {
        for s in SearchStrategy::ALL {
            assert_eq!(s.name().parse::<SearchStrategy>().unwrap(), s);
        }
        assert!("astar".parse::<SearchStrategy>().is_err());
        assert_eq!(SearchStrategy::default(), SearchStrategy::Combined);
    }
}

// ── Cross-checks on random grids ──────────────────────────────────────────────

#[cfg(test)]
mod cross_check {
    use pk_core::SpotId;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{AllFree, BellmanFord, Combined, Dijkstra, PathFinder};

    #[test]
    fn uniform_weights_agree_on_cost() {
        let mut pairs = SmallRng::seed_from_u64(99);
        for seed in 0..20 {
            let g = super::helpers::random_grid(7, 6, 70, seed);
            let n = g.spot_count() as u32;
            for _ in 0..15 {
                let from = SpotId(pairs.gen_range(0..n));
                let to = SpotId(pairs.gen_range(0..n));

                let d = Dijkstra.find_route(&g, &AllFree, from, to).unwrap();
                let bf = BellmanFord.find_route(&g, &AllFree, from, to).unwrap();
                let c = Combined.find_route(&g, &AllFree, from, to).unwrap();

                assert_eq!(d.is_unreachable(), bf.is_unreachable(), "seed {seed} {from}->{to}");
                assert_eq!(d.is_unreachable(), c.is_unreachable(), "seed {seed} {from}->{to}");
                if d.is_unreachable() {
                    continue;
                }
                let cost = d.base_cost(&g);
                assert!(cost.is_some());
                assert_eq!(bf.base_cost(&g), cost, "seed {seed} {from}->{to}");
                assert_eq!(c.base_cost(&g), cost, "seed {seed} {from}->{to}");
            }
        }
    }
}

// ── Occupancy sensitivity ─────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use pk_core::SpotId;
    use crate::{AllFree, Combined, ContextWeighted, Dijkstra, JumpPoint, PathFinder, Route};

    #[test]
    fn free_ladder_takes_top_row() {
        let g = super::helpers::ladder();
        let r = Combined.find_route(&g, &AllFree, SpotId(0), SpotId(2)).unwrap();
        assert_eq!(r.spots, vec![SpotId(0), SpotId(1), SpotId(2)]);
    }

    #[test]
    fn occupied_middle_forces_detour() {
        let g = super::helpers::ladder();
        let occ = super::helpers::occupied(6, &[1]);
        let through = Route::new(vec![SpotId(0), SpotId(1), SpotId(2)]);

        let penalized: [&dyn PathFinder; 2] = [&Combined, &ContextWeighted];
        for finder in penalized {
            let r = finder.find_route(&g, &occ, SpotId(0), SpotId(2)).unwrap();
            assert!(!r.contains(SpotId(1)), "{}", finder.name());
            let cost = r.adjusted_cost(&g, &occ).unwrap();
            assert!(cost <= through.adjusted_cost(&g, &occ).unwrap());
            assert_eq!(cost, 4);
        }

        // Occupancy-blind strategies keep the short route.
        let blind: [&dyn PathFinder; 2] = [&Dijkstra, &JumpPoint];
        for finder in blind {
            let r = finder.find_route(&g, &occ, SpotId(0), SpotId(2)).unwrap();
            assert!(r.contains(SpotId(1)), "{}", finder.name());
        }
    }

    #[test]
    fn penalty_below_detour_keeps_route() {
        use pk_core::{GridPos, SpotClass};
        use crate::LotGraphBuilder;

        // Same ladder, but a penalty of 1 makes the top row cost 3 < 4.
        let mut b = LotGraphBuilder::new().occupancy_penalty(1);
        for row in 0..2 {
            for col in 0..3 {
                b.add_spot(GridPos::new(col, row), SpotClass::FourWheeler);
            }
        }
        for (a, c) in [(0, 1), (1, 2), (0, 3), (3, 4), (4, 5), (5, 2)] {
            b.add_link(SpotId(a), SpotId(c), 1);
        }
        let g = b.build().unwrap();
        let occ = super::helpers::occupied(6, &[1]);
        let r = Combined.find_route(&g, &occ, SpotId(0), SpotId(2)).unwrap();
        assert_eq!(r.spots, vec![SpotId(0), SpotId(1), SpotId(2)]);
    }

    #[test]
    fn equal_length_alternative_avoids_occupied() {
        // 2×2 square: 0→3 via 1 or via 2, both two hops.
        let g = super::helpers::grid(2, 2);
        let occ = super::helpers::occupied(4, &[1]);
        let r = ContextWeighted.find_route(&g, &occ, SpotId(0), SpotId(3)).unwrap();
        assert_eq!(r.spots, vec![SpotId(0), SpotId(2), SpotId(3)]);
        let r = Combined.find_route(&g, &occ, SpotId(0), SpotId(3)).unwrap();
        assert_eq!(r.spots, vec![SpotId(0), SpotId(2), SpotId(3)]);
    }
}

// ── Jump step ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod jump {
    use pk_core::{GridPos, SpotClass, SpotId};
    use crate::{AllFree, Combined, Dijkstra, JumpPoint, LotGraph, LotGraphBuilder, PathFinder};

    /// `a(0,0)` has one long link to `b(3,0)`; `c(1,0)` and `d(2,0)` sit on
    /// the line between them with no links of their own.
    fn long_link() -> (LotGraph, [SpotId; 4]) {
        let mut bld = LotGraphBuilder::new();
        let a = bld.add_spot(GridPos::new(0, 0), SpotClass::FourWheeler);
        let b = bld.add_spot(GridPos::new(3, 0), SpotClass::FourWheeler);
        let c = bld.add_spot(GridPos::new(1, 0), SpotClass::FourWheeler);
        let d = bld.add_spot(GridPos::new(2, 0), SpotClass::FourWheeler);
        bld.add_link(a, b, 3);
        (bld.build().unwrap(), [a, b, c, d])
    }

    const JUMPERS: [&dyn PathFinder; 2] = [&JumpPoint, &Combined];

    #[test]
    fn jump_lands_on_first_free_cell() {
        let (g, [a, _, c, _]) = long_link();
        for finder in JUMPERS {
            let r = finder.find_route(&g, &AllFree, a, c).unwrap();
            assert_eq!(r.spots, vec![a, c], "{}", finder.name());
        }
    }

    #[test]
    fn jump_steps_past_occupied_cells() {
        let (g, [a, _, c, d]) = long_link();
        let occ = super::helpers::occupied(4, &[c.0]);
        for finder in JUMPERS {
            let r = finder.find_route(&g, &occ, a, d).unwrap();
            assert_eq!(r.spots, vec![a, d], "{}", finder.name());
        }
    }

    #[test]
    fn jump_with_nothing_free_skips_link() {
        let (g, [a, b, c, d]) = long_link();
        let occ = super::helpers::occupied(4, &[b.0, c.0, d.0]);
        for finder in JUMPERS {
            assert!(finder.find_route(&g, &occ, a, b).unwrap().is_unreachable(), "{}", finder.name());
        }
    }

    /// `a(0,0)` reaches `t(1,1)` two ways: through `m(0,1)` at cost 2, or by
    /// the long link `a–b(3,0)` (weight 3) landing on `c(1,0)`, then `c–t`,
    /// at cost 4.
    fn detour_by_jump() -> (LotGraph, [SpotId; 5]) {
        let mut bld = LotGraphBuilder::new();
        let a = bld.add_spot(GridPos::new(0, 0), SpotClass::FourWheeler);
        let m = bld.add_spot(GridPos::new(0, 1), SpotClass::FourWheeler);
        let t = bld.add_spot(GridPos::new(1, 1), SpotClass::FourWheeler);
        let b = bld.add_spot(GridPos::new(3, 0), SpotClass::FourWheeler);
        let c = bld.add_spot(GridPos::new(1, 0), SpotClass::FourWheeler);
        bld.add_link(a, m, 1);
        bld.add_link(m, t, 1);
        bld.add_link(a, b, 3);
        bld.add_link(c, t, 1);
        (bld.build().unwrap(), [a, m, t, b, c])
    }

    #[test]
    fn combined_jumps_around_occupied_spot() {
        let (g, [a, m, t, _, c]) = detour_by_jump();

        let free = AllFree;
        assert_eq!(Combined.find_route(&g, &free, a, t).unwrap().spots, vec![a, m, t]);

        // m occupied: through m costs 2 + 10, the jump to free c costs 3 + 1.
        let occ = super::helpers::occupied(5, &[m.0]);
        let r = Combined.find_route(&g, &occ, a, t).unwrap();
        assert_eq!(r.spots, vec![a, c, t]);
        assert_eq!(JumpPoint.find_route(&g, &occ, a, t).unwrap().spots, vec![a, m, t]);

        // c occupied too: the walk overshoots to b, a dead end, so the
        // penalized route through m is the only one left.
        let occ = super::helpers::occupied(5, &[m.0, c.0]);
        assert_eq!(Combined.find_route(&g, &occ, a, t).unwrap().spots, vec![a, m, t]);
    }

    #[test]
    fn jump_substitutes_far_end() {
        // With c free, the long link relaxes c instead of b, so b is never
        // reached by the jump search even though Dijkstra walks straight there.
        let (g, [a, b, ..]) = long_link();
        assert!(JumpPoint.find_route(&g, &AllFree, a, b).unwrap().is_unreachable());
        assert_eq!(Dijkstra.find_route(&g, &AllFree, a, b).unwrap().spots, vec![a, b]);
    }
}

// ── Closest exit ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod exits {
    use pk_core::{GridPos, SpotClass, SpotId};
    use crate::{AllFree, Combined, GraphError, LotGraphBuilder, closest_exit};

    #[test]
    fn picks_nearer_exit_by_edge_count() {
        let g = super::helpers::grid(5, 1);
        let choice = closest_exit(&g, &AllFree, &Combined, SpotId(1), &[SpotId(4), SpotId(0)])
            .unwrap()
            .unwrap();
        assert_eq!(choice.exit, SpotId(0));
        assert_eq!(choice.distance, 1);
        assert_eq!(choice.route.spots, vec![SpotId(1), SpotId(0)]);
    }

    #[test]
    fn tie_goes_to_first_listed() {
        let g = super::helpers::grid(5, 1);
        let choice = closest_exit(&g, &AllFree, &Combined, SpotId(2), &[SpotId(4), SpotId(0)])
            .unwrap()
            .unwrap();
        assert_eq!(choice.exit, SpotId(4));
        assert_eq!(choice.distance, 2);
    }

    #[test]
    fn disconnected_exits_yield_none() {
        let mut b = LotGraphBuilder::new();
        let s = b.add_spot(GridPos::new(0, 0), SpotClass::FourWheeler);
        let e1 = b.add_spot(GridPos::new(5, -1), SpotClass::Exit);
        let e2 = b.add_spot(GridPos::new(7, -1), SpotClass::Exit);
        let g = b.build().unwrap();
        assert!(closest_exit(&g, &AllFree, &Combined, s, &[e1, e2]).unwrap().is_none());
    }

    #[test]
    fn unknown_exit_is_an_error() {
        let g = super::helpers::grid(2, 2);
        let r = closest_exit(&g, &AllFree, &Combined, SpotId(0), &[SpotId(3), SpotId(77)]);
        assert!(matches!(r, Err(GraphError::UnknownSpot(SpotId(77)))));
    }
}
