//! `nav-grid` — grid model, generation, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`grid`]      | `Grid` — immutable row-major cell classification array    |
//! | [`generator`] | `GridGenerator`, `World` — random grids and targets       |
//! | [`router`]    | `Router` trait, `Path`, `BfsRouter`, `DijkstraRouter`     |
//! | [`error`]     | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod generator;
pub mod grid;
pub mod router;


pub use error::{GridError, GridResult};
pub use generator::{GridGenerator, World};
pub use grid::Grid;
pub use router::{BfsRouter, DijkstraRouter, Path, Router, shortest_path};
