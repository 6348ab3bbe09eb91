//! `nav-core` — foundational types for the `rust_nav` grid navigation simulator.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`coord`]   | `Coord` (column, row) and orthogonal step helpers     |
//! | [`cell`]    | `Cell` classification and its uniform distribution    |
//! | [`time`]    | `Tick`                                                |
//! | [`config`]  | `NavConfig`                                           |
//! | [`rng`]     | `SimRng`                                              |
//! | [`error`]   | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::NavConfig;
pub use coord::Coord;
pub use error::{NavError, NavResult};
pub use rng::SimRng;
pub use time::Tick;
