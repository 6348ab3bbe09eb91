//! Fluent builder for constructing a [`SimulationController`].

use nav_core::{NavConfig, SimRng, Tick};
use nav_grid::{BfsRouter, GridGenerator, Router};

use crate::SimResult;
use crate::controller::{SimulationController, build_world};

/// Fluent builder for [`SimulationController<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.router(r)`    | [`BfsRouter`]                    |
/// | `.rng(rng)`     | `SimRng::new(config.seed)`       |
///
/// # Example
///
/// ```rust,ignore
/// let sim = ControllerBuilder::new(NavConfig::default())
///     .router(DijkstraRouter)
///     .build()?;
/// ```
pub struct ControllerBuilder<R: Router = BfsRouter> {
    config: NavConfig,
    router: R,
    rng:    Option<SimRng>,
}

impl ControllerBuilder<BfsRouter> {
    /// Create a builder using the default BFS router.
    pub fn new(config: NavConfig) -> Self {
        Self { config, router: BfsRouter, rng: None }
    }
}

impl<R: Router> ControllerBuilder<R> {
    /// Swap in a different routing algorithm.
    pub fn router<R2: Router>(self, router: R2) -> ControllerBuilder<R2> {
        ControllerBuilder { config: self.config, router, rng: self.rng }
    }

    /// Supply the RNG instead of seeding one from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the config, generate the initial world, and return a
    /// controller that is ready but not running.
    pub fn build(self) -> SimResult<SimulationController<R>> {
        self.config.validate()?;

        let generator = GridGenerator::from_config(&self.config);
        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let (grid, agent) = build_world(&generator, &self.router, &self.config, &mut rng)?;

        Ok(SimulationController {
            config:       self.config,
            router:       self.router,
            generator,
            rng,
            grid,
            agent,
            running:      false,
            banner:       None,
            finished_run: false,
            tick:         Tick::ZERO,
        })
    }
}
