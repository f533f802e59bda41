//! Lot layout construction.
//!
//! Builds the graph described by a [`LotConfig`]: a `grid_width ×
//! grid_height` grid with 4-neighbour links, then each entrance and exit as
//! an extra spot linked to its attach cell.  Ids follow the assignment in
//! [`pk_core::config`].

use tracing::debug;

use pk_core::{GridPos, LotConfig, SpotClass};
use pk_graph::{LotGraph, LotGraphBuilder};

use crate::AllocResult;

/// Validate `config` and build its graph.
pub fn build_layout(config: &LotConfig) -> AllocResult<LotGraph> {
    config.validate()?;

    let (w, h) = (config.grid_width, config.grid_height);
    let (wu, hu) = (w as usize, h as usize);
    let grid_links = (wu - 1) * hu + wu * (hu - 1);
    let mut b = LotGraphBuilder::with_capacity(config.spot_count(), grid_links + 4)
        .occupancy_penalty(config.occupancy_penalty);

    for row in 0..h {
        for col in 0..w {
            let class = if config.two_wheeler.contains(config.cell_id(col, row)) {
                SpotClass::TwoWheeler
            } else {
                SpotClass::FourWheeler
            };
            b.add_spot(GridPos::new(col as i32, row as i32), class);
        }
    }

    for row in 0..h {
        for col in 0..w {
            let id = config.cell_id(col, row);
            if col + 1 < w {
                b.add_link(id, config.cell_id(col + 1, row), config.link_weight);
            }
            if row + 1 < h {
                b.add_link(id, config.cell_id(col, row + 1), config.link_weight);
            }
        }
    }

    for (points, class) in [(&config.entrances, SpotClass::Entrance), (&config.exits, SpotClass::Exit)] {
        for ap in points {
            let id = b.add_spot(ap.pos, class);
            b.add_link(id, ap.attach_to, config.link_weight);
        }
    }

    let graph = b.build()?;
    debug!(spots = graph.spot_count(), links = graph.link_count(), "built lot layout");
    Ok(graph)
}

/// The reference lot: `build_layout(&LotConfig::default())`.
pub fn reference_layout() -> AllocResult<LotGraph> {
    build_layout(&LotConfig::default())
}
