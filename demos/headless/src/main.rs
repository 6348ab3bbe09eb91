//! nav-headless — terminal driver for the rust_nav simulator.
//!
//! Generates a random 20×20 grid, routes the agent from the origin to a
//! random reachable target, and animates the walk as ASCII frames at the
//! configured cadence (2 Hz by default).
//!
//! ```text
//! nav-headless [CONFIG.toml] [--fast] [--seed N] [--random]
//! ```
//!
//! Set `RUST_LOG=debug` to see per-tick events from the controller.

mod render;
#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_core::{NavConfig, SimRng};
use nav_sim::ControllerBuilder;

use render::{AsciiRenderer, print_snapshot};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_CONFIG_PATH: &str = "nav.toml";
/// Give up after this many consecutive unroutable worlds.
const MAX_RECONSTRUCTS:    u32  = 50;
/// Hard stop for the walk; a 20×20 route never comes close.
const MAX_TICKS:           u64  = 10_000;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "nav-headless", version, about = "Animate an agent walking a random grid")]
struct Options {
    /// TOML config file; defaults are used when it does not exist.
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Skip the tick delay and render frames back to back.
    #[arg(long)]
    fast: bool,

    /// Override the configured seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the seed from system entropy.
    #[arg(long, conflicts_with = "seed")]
    random: bool,
}

fn load_config(path: &Path) -> Result<NavConfig> {
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        return Ok(NavConfig::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: NavConfig = toml::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Options::parse();
    let mut config = load_config(&opts.config)?;
    if let Some(seed) = opts.seed {
        config.seed = seed;
    }
    if opts.random {
        config.seed = SimRng::from_entropy().random();
    }

    println!("=== nav-headless — grid navigation ===");
    println!(
        "Grid: {}x{}  |  Origin: {}  |  Seed: {}  |  {} Hz",
        config.width, config.height, config.origin, config.seed, config.tick_hz
    );
    println!();

    let interval = if opts.fast { Duration::ZERO } else { config.tick_interval() };
    let display_ticks = config.finish_display_ticks;
    let mut sim = ControllerBuilder::new(config).build()?;

    // Reconstruct until the world has a route, as a user clicking
    // "Reconstruct" would.
    let mut reconstructs = 0;
    while !sim.start() {
        print_snapshot(&sim.snapshot());
        reconstructs += 1;
        if reconstructs >= MAX_RECONSTRUCTS {
            bail!("no routable world after {reconstructs} reconstructions");
        }
        sim.reconstruct(None)?;
    }
    print_snapshot(&sim.snapshot());

    let mut renderer = AsciiRenderer { interval, frames: 0 };
    let t0 = Instant::now();
    let Some(path_length) = sim.run_until_settled(MAX_TICKS, &mut renderer) else {
        bail!("agent did not arrive within {MAX_TICKS} ticks");
    };

    // Hold the finished banner on screen for its display window.
    let mut banner = AsciiRenderer { interval, frames: 0 };
    sim.run_ticks(display_ticks.saturating_sub(1), &mut banner);

    println!(
        "Walked {path_length} cells in {} ticks ({:.1} s, {} reconstructions)",
        renderer.frames,
        t0.elapsed().as_secs_f64(),
        reconstructs
    );
    Ok(())
}
