//! Earthquake simulator (default binary).
//!
//! Draw fault lines from a console menu, then watch stress build until a cell
//! ruptures. Reads line input from stdin and renders with ANSI color.

use std::io;

use anyhow::Result;

use quake_sim::core::Simulation;
use quake_sim::journal::SessionJournal;
use quake_sim::{Controller, SimConfig};

fn main() -> Result<()> {
    let config = SimConfig::from_env();
    let seed = config.resolve_seed();
    let journal = SessionJournal::open_or_disabled(config.log_path.as_deref());
    let sim = Simulation::with_threshold(seed, config.threshold);

    let stdin = io::stdin();
    let mut controller = Controller::new(
        stdin.lock(),
        io::stdout(),
        sim,
        journal,
        config.tick_interval(),
    );
    controller.run()?;
    Ok(())
}
