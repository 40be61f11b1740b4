//! Simulation module - the drawing/simulating/halted state machine
//!
//! Ties the grid, the rasterizers and the stress updater together behind a
//! step function. Nothing here sleeps or prints: the caller drives [`Simulation::tick`]
//! at whatever cadence it wants (a real-time loop, a benchmark, a test).

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::shapes;
use crate::stress::{earthquake_cells, peak_stress, update_stress_levels};
use crate::types::{Phase, Shape, EARTHQUAKE_THRESHOLD};

/// Result of one call to [`Simulation::tick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not simulating; nothing changed
    Idle,
    /// Stress advanced and stayed below the threshold
    Calm { step: u32, peak: u32 },
    /// Stress reached the threshold; the simulation is now halted
    Earthquake(Earthquake),
}

/// The tick on which the threshold was first reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Earthquake {
    /// Zero-based index of the halting tick
    pub step: u32,
    pub peak: u32,
    /// Cells at or above the threshold, (x, y) in row-major order
    pub epicentres: Vec<(usize, usize)>,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    rng: SimpleRng,
    seed: u32,
    phase: Phase,
    threshold: u32,
    /// Number of completed ticks
    steps: u32,
    shapes_drawn: u32,
}

impl Simulation {
    /// Create a simulation with the given RNG seed and the default threshold
    pub fn new(seed: u32) -> Self {
        Self::with_threshold(seed, EARTHQUAKE_THRESHOLD)
    }

    /// Create a simulation with a custom earthquake threshold (at least 1)
    pub fn with_threshold(seed: u32, threshold: u32) -> Self {
        Self {
            grid: Grid::new(),
            rng: SimpleRng::new(seed),
            seed,
            phase: Phase::Drawing,
            threshold: threshold.max(1),
            steps: 0,
            shapes_drawn: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Completed ticks; also the index of the next tick
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn shapes_drawn(&self) -> u32 {
        self.shapes_drawn
    }

    pub fn is_halted(&self) -> bool {
        self.phase == Phase::Halted
    }

    /// Draw a fault shape
    ///
    /// Returns the number of in-bounds cells marked, or `None` once drawing has
    /// closed (after [`Simulation::begin`]).
    pub fn draw(&mut self, shape: Shape) -> Option<usize> {
        if self.phase != Phase::Drawing {
            return None;
        }
        self.shapes_drawn += 1;
        Some(shapes::draw(&mut self.grid, shape))
    }

    /// Close drawing and start simulating
    ///
    /// Returns false if the simulation had already begun.
    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::Drawing {
            return false;
        }
        self.phase = Phase::Simulating;
        true
    }

    /// Run one tick: update stress, then check the threshold
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Simulating {
            return TickOutcome::Idle;
        }

        let step = self.steps;
        update_stress_levels(&mut self.grid, &mut self.rng);
        self.steps += 1;

        let peak = peak_stress(&self.grid);
        if peak < self.threshold {
            return TickOutcome::Calm { step, peak };
        }

        self.phase = Phase::Halted;
        TickOutcome::Earthquake(Earthquake {
            step,
            peak,
            epicentres: earthquake_cells(&self.grid, self.threshold),
        })
    }

    /// Tick until an earthquake, giving up after `max_ticks`
    pub fn run_until_earthquake(&mut self, max_ticks: u32) -> Option<Earthquake> {
        for _ in 0..max_ticks {
            match self.tick() {
                TickOutcome::Earthquake(quake) => return Some(quake),
                TickOutcome::Calm { .. } => {}
                TickOutcome::Idle => return None,
            }
        }
        None
    }

    /// Grid access for tests
    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
