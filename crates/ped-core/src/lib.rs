//! `ped-core` — foundational types for the `rust_ped` floor-field model.
//!
//! This crate is a dependency of every other `ped-*` crate.  It has no
//! `ped-*` dependencies and only `thiserror` and `tracing` externally (plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `CellPos`, `PedestrianId`                              |
//! | [`cell`]   | `Cell`, `CellState`                                    |
//! | [`grid`]   | `Grid` — cells, target, obstacles, pedestrian roster   |
//! | [`time`]   | `Tick`, `SimConfig`, `PotentialMethod`                 |
//! | [`error`]  | `PedError`, `PedResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, states and config.  |

pub mod cell;
pub mod error;
pub mod grid;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, CellState};
pub use error::{PedError, PedResult};
pub use grid::Grid;
pub use ids::{CellPos, PedestrianId};
pub use time::{PotentialMethod, SimConfig, Tick};
