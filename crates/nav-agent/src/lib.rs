//! `nav-agent` — the agent that walks a computed path.
//!
//! # Crate layout
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`state`] | `AgentState`, `Step`                       |
//! | [`agent`] | `Agent` — path, cursor, and transitions    |
//!
//! # Movement model
//!
//! One cell per [`Agent::advance`] call.  The position is frozen between
//! calls; whoever drives the ticks decides the cadence.
//!
//! ```text
//!            advance              advance (cursor == len)
//!   Idle ─────────────▶ Advancing ─────────────────────▶ Arrived
//!     │                                                    ▲
//!     └──────────── advance (path of one cell) ────────────┘
//!
//!   Blocked: empty path and not at target (no route), terminal.
//! ```

pub mod agent;
pub mod state;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use state::{AgentState, Step};
