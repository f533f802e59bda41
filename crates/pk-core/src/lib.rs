//! `pk-core` — foundational types for the parking allocation engine.
//!
//! This crate is a dependency of every other `pk-*` crate.  It has no `pk-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `SpotId`                                                 |
//! | [`grid`]     | `GridPos`, Manhattan / Chebyshev distances               |
//! | [`spot`]     | `Spot`, `SpotClass`, `VehicleClass`, `ParkingTerm`       |
//! | [`config`]   | `LotConfig`, `SpotRange`, `AccessPoint`                  |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod spot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AccessPoint, LotConfig, SpotRange};
pub use error::{CoreError, CoreResult};
pub use grid::GridPos;
pub use ids::SpotId;
pub use spot::{ParkingTerm, Spot, SpotClass, VehicleClass};
