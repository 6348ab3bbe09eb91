//! The `SimulationController` and its command handlers.

use nav_agent::{Agent, AgentState, Step};
use nav_core::{NavConfig, SimRng, Tick};
use nav_grid::{BfsRouter, Grid, GridGenerator, Router};
use tracing::{debug, info};

use crate::{SimObserver, SimResult, SimulationSnapshot};

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// What a single [`SimulationController::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickOutcome {
    /// Not running; nothing moved.
    NoOp,
    /// The agent moved one cell and has more to go.
    Advanced,
    /// The agent is on the target.  Carries the number of cells traversed.
    Finished(usize),
}

// ── Finished banner ───────────────────────────────────────────────────────────

/// The "finished" message and how many more ticks it stays up (including
/// the tick it was raised on).
#[derive(Copy, Clone, Debug)]
pub(crate) struct FinishedBanner {
    path_length: usize,
    ticks_left:  u64,
}

// ── SimulationController ──────────────────────────────────────────────────────

/// Sole owner of the simulation state: the current grid, the agent (which
/// holds target and path), and the run flags.
///
/// Every mutation goes through [`reconstruct`](Self::reconstruct),
/// [`start`](Self::start) or [`tick`](Self::tick).  Presentation layers read
/// through [`snapshot`](Self::snapshot) or the borrowing accessors.
///
/// Create via [`ControllerBuilder`][crate::ControllerBuilder].
pub struct SimulationController<R: Router = BfsRouter> {
    pub(crate) config:    NavConfig,
    pub(crate) router:    R,
    pub(crate) generator: GridGenerator,
    pub(crate) rng:       SimRng,
    pub(crate) grid:      Grid,
    pub(crate) agent:     Agent,

    pub(crate) running: bool,
    pub(crate) banner:  Option<FinishedBanner>,
    /// Set on finish, cleared on start/reconstruct.  Drives
    /// `reconstruct_offered`.
    pub(crate) finished_run: bool,
    pub(crate) tick:         Tick,
}

impl<R: Router> SimulationController<R> {
    // ── Commands ──────────────────────────────────────────────────────────

    /// Replace the grid, target, path, and agent with freshly generated ones
    /// and stop any run in progress.
    ///
    /// With `Some(seed)` the world is drawn from a fresh RNG seeded with
    /// `seed`, which replaces the controller RNG once the world is
    /// installed.  The same seed always reproduces the same world.
    ///
    /// # Errors
    ///
    /// `SimError::Grid(GenerationExhausted)` if no valid target could be
    /// placed within the retry caps, or any error from the router.  On error
    /// the grid, agent, flags, and tick are left exactly as they were, and a
    /// `Some(seed)` call does not replace the RNG.  A `None` call draws from
    /// the controller RNG directly, so the draws it consumed stay consumed
    /// and the next `reconstruct(None)` tries a different world.
    pub fn reconstruct(&mut self, seed: Option<u64>) -> SimResult<SimulationSnapshot> {
        let (grid, agent) = match seed {
            Some(seed) => {
                let mut rng = SimRng::new(seed);
                let world = build_world(&self.generator, &self.router, &self.config, &mut rng)?;
                self.rng = rng;
                world
            }
            None => build_world(&self.generator, &self.router, &self.config, &mut self.rng)?,
        };

        self.grid = grid;
        self.agent = agent;
        self.running = false;
        self.banner = None;
        self.finished_run = false;
        self.tick = Tick::ZERO;

        Ok(self.snapshot())
    }

    /// Begin advancing the agent on subsequent ticks.
    ///
    /// Returns `false` (and changes nothing) when the current grid has no
    /// route to the target.
    pub fn start(&mut self) -> bool {
        if !self.agent.has_route() {
            debug!(state = %self.agent.state(), "start ignored: no route");
            return false;
        }
        if !self.running {
            debug!(goal = %self.agent.target(), hops = self.agent.path().len(), "run started");
        }
        self.running = true;
        self.finished_run = false;
        true
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick.advance();
        self.age_banner();

        if !self.running {
            return TickOutcome::NoOp;
        }

        match self.agent.advance() {
            Step::Moved(pos) => {
                debug!(tick = %self.tick, %pos, remaining = self.agent.remaining(), "agent advanced");
                TickOutcome::Advanced
            }
            // `start` refuses an agent without a route, so a running agent is
            // only absorbed when a run was restarted after arrival.
            Step::Arrived(_) | Step::Absorbed => self.finish(),
        }
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> SimulationSnapshot {
        let no_path = self.agent.state() == AgentState::Blocked;
        SimulationSnapshot {
            grid:                self.grid.clone(),
            agent_position:      self.agent.position(),
            target:              self.agent.target(),
            path:                self.agent.path().clone(),
            state:               self.agent.state(),
            running:             self.running,
            no_path,
            finished_banner:     self.banner.map(|b| b.path_length),
            reconstruct_offered: no_path || self.finished_run,
            tick:                self.tick,
        }
    }

    // ── Drivers ───────────────────────────────────────────────────────────

    /// Run exactly `n` ticks, reporting each to `observer`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick_observed(observer);
        }
    }

    /// Tick until the current run finishes, at most `max_ticks` times.
    ///
    /// Returns the traversed path length if the agent arrived, `None` if the
    /// controller was not running or the tick budget ran out first.
    pub fn run_until_settled<O: SimObserver>(&mut self, max_ticks: u64, observer: &mut O) -> Option<usize> {
        for _ in 0..max_ticks {
            if !self.running {
                return None;
            }
            if let TickOutcome::Finished(n) = self.tick_observed(observer) {
                return Some(n);
            }
        }
        None
    }

    fn tick_observed<O: SimObserver>(&mut self, observer: &mut O) -> TickOutcome {
        let outcome = self.tick();
        observer.on_tick(self.tick, outcome, &self.grid, &self.agent);
        if let TickOutcome::Finished(n) = outcome {
            observer.on_finished(self.tick, n);
        }
        outcome
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn finish(&mut self) -> TickOutcome {
        let traversed = self.agent.traversed();
        self.running = false;
        self.finished_run = true;
        if self.config.finish_display_ticks > 0 {
            self.banner = Some(FinishedBanner {
                path_length: traversed,
                ticks_left:  self.config.finish_display_ticks,
            });
        }
        info!(tick = %self.tick, path_length = traversed, "agent reached target");
        TickOutcome::Finished(traversed)
    }

    fn age_banner(&mut self) {
        if let Some(banner) = self.banner.as_mut() {
            banner.ticks_left = banner.ticks_left.saturating_sub(1);
        }
        if self.banner.is_some_and(|b| b.ticks_left == 0) {
            self.banner = None;
        }
    }
}

/// Generate a world and plan an agent on it.  Nothing is installed; the
/// caller swaps the results in only if both steps succeed.
pub(crate) fn build_world<R: Router>(
    generator: &GridGenerator,
    router:    &R,
    config:    &NavConfig,
    rng:       &mut SimRng,
) -> SimResult<(Grid, Agent)> {
    let world = generator.generate_world(config.origin, rng)?;
    let agent = Agent::plan(router, &world.grid, config.origin, world.target)?;
    info!(
        goal = %world.target,
        hops = agent.path().len(),
        state = %agent.state(),
        "world reconstructed"
    );
    Ok((world.grid, agent))
}
