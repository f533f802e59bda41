//! `pk-graph` — lot graph, occupancy-aware costs, and route search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `LotGraph` (adjacency list + cell index), `LotGraphBuilder`, `Link` |
//! | [`occupancy`] | `OccupancyView` trait, `AllFree`                          |
//! | [`route`]     | `Route`                                                   |
//! | [`search`]    | `PathFinder` trait, `SearchStrategy`, the five strategies |
//! | [`exit`]      | `closest_exit`, `ExitChoice`                              |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! # Occupancy
//!
//! The graph holds topology only.  Every search borrows an
//! [`OccupancyView`] for its whole run, so occupancy cannot change under a
//! search and no search can write it.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod exit;
pub mod graph;
pub mod occupancy;
pub mod route;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use exit::{ExitChoice, closest_exit};
pub use graph::{Link, LotGraph, LotGraphBuilder};
pub use occupancy::{AllFree, OccupancyView};
pub use route::Route;
pub use search::{
    BellmanFord, Combined, ContextWeighted, Dijkstra, JumpPoint, PathFinder, SearchStrategy,
};
