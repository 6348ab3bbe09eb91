//! `nav-sim` — the simulation controller.
//!
//! # Command model
//!
//! ```text
//! reconstruct(seed?)  → GridGenerator → Router → new Agent, running = false
//! start()             → running = true   (only if a route exists)
//! tick()              → if running: Agent::advance
//!                         arrived → running = false, Finished(n)
//! snapshot()          → read-only copy for the presentation layer
//! ```
//!
//! Everything is synchronous and single-threaded; the caller owns the tick
//! cadence.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_core::NavConfig;
//! use nav_sim::{ControllerBuilder, NoopObserver};
//!
//! let mut sim = ControllerBuilder::new(NavConfig::default()).build()?;
//! if sim.start() {
//!     let finished = sim.run_until_settled(1_000, &mut NoopObserver);
//! }
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;
pub mod snapshot;


pub use builder::ControllerBuilder;
pub use controller::{SimulationController, TickOutcome};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::SimulationSnapshot;
