//! `pk-alloc` — allocation decisions and lot state.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`layout`]   | `build_layout` (grid + access points from `LotConfig`)     |
//! | [`policy`]   | `AllocationPolicy` trait, `NearestFreeSpot`                |
//! | [`exit`]     | `ExitResolver`                                             |
//! | [`lot`]      | `ParkingLot`, request and outcome types                    |
//! | [`observer`] | `LotObserver`, `NoopObserver`, `BenchmarkCsvObserver`      |
//! | [`error`]    | `AllocError`, `AllocResult<T>`                             |
//!
//! # Request flow
//!
//! One request is processed to completion before the next:
//!
//! ```text
//! allocate:  policy.select → occupy → harness.run (5 timed searches)
//!            → route (default: combined) → log → observer
//! release:   exit resolution (combined) → free the spot → observer
//! ```

pub mod error;
pub mod exit;
pub mod layout;
pub mod lot;
pub mod observer;
pub mod policy;


pub use error::{AllocError, AllocResult};
pub use exit::ExitResolver;
pub use layout::{build_layout, reference_layout};
pub use lot::{Allocation, AllocationRequest, ParkingLot, Release, ReleaseRequest};
pub use observer::{BenchmarkCsvObserver, LotObserver, NoopObserver};
pub use policy::{AllocationPolicy, NearestFreeSpot};
