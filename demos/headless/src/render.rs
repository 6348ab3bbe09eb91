//! ASCII renderer: the terminal stand-in for a windowed presentation layer.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use nav_agent::Agent;
use nav_core::{Coord, Tick};
use nav_grid::Grid;
use nav_sim::{SimObserver, SimulationSnapshot, TickOutcome};

const AGENT_GLYPH:  char = 'A';
const TARGET_GLYPH: char = 'T';
const ROUTE_GLYPH:  char = '*';

/// Draw the grid with the agent, the target, and the unwalked part of the
/// route overlaid.
pub fn draw(grid: &Grid, position: Coord, target: Coord, ahead: &[Coord]) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for (c, cell) in grid.cells() {
        let glyph = if c == position {
            AGENT_GLYPH
        } else if c == target {
            TARGET_GLYPH
        } else if ahead.contains(&c) {
            ROUTE_GLYPH
        } else {
            cell.glyph()
        };
        out.push(glyph);
        if c.col + 1 == grid.width() {
            out.push('\n');
        }
    }
    out
}

/// Print a snapshot: the header line, the picture, and the status message.
///
/// The whole route is overlaid, so this is meant for frames where the agent
/// has not started walking.
pub fn print_snapshot(snap: &SimulationSnapshot) {
    println!(
        "{}  target {}  hops {}  state {}",
        snap.tick,
        snap.target,
        snap.path.len(),
        snap.state
    );
    print!("{}", draw(&snap.grid, snap.agent_position, snap.target, &snap.path.steps));
    if let Some(msg) = snap.status_message() {
        println!("{msg}");
    }
    println!();
}

/// Renders every tick, pacing to the configured cadence unless `interval`
/// is zero.
pub struct AsciiRenderer {
    pub interval: Duration,
    pub frames:   usize,
}

impl SimObserver for AsciiRenderer {
    fn on_tick(&mut self, tick: Tick, outcome: TickOutcome, grid: &Grid, agent: &Agent) {
        self.frames += 1;
        if outcome != TickOutcome::NoOp {
            println!("{tick}  at {}  {}/{}", agent.position(), agent.traversed(), agent.path().len());
            let ahead = &agent.path().steps[agent.traversed()..];
            print!("{}", draw(grid, agent.position(), agent.target(), ahead));
            let _ = io::stdout().flush();
        }
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }

    fn on_finished(&mut self, _tick: Tick, path_length: usize) {
        println!("Finished! Path Length: {path_length}");
    }
}
