//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the grid model, the fault rasterizers, the stress updater
//! and the simulation state machine. It has **zero dependencies** on terminal I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces an identical stress history
//! - **Testable**: Every operation is a plain function or method on owned state
//! - **Portable**: Can run in any environment (terminal, benchmark, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 20x20 fault and stress layers in flat arrays
//! - [`shapes`]: vertical, horizontal, circle and point-to-point rasterizers
//! - [`rng`]: seedable LCG and the [`DeltaSource`] seam
//! - [`stress`]: per-tick stress update and earthquake detection
//! - [`simulation`]: Drawing → Simulating → Halted state machine
//!
//! # Example
//!
//! ```
//! use quake_sim_core::{Simulation, TickOutcome};
//! use quake_sim_types::{Phase, Shape};
//!
//! let mut sim = Simulation::new(12345);
//! assert_eq!(sim.draw(Shape::Vertical { x: 5 }), Some(20));
//! assert!(sim.begin());
//!
//! // Drawing is closed once simulating
//! assert_eq!(sim.draw(Shape::Horizontal { y: 0 }), None);
//!
//! let quake = sim.run_until_earthquake(10_000).expect("faults eventually rupture");
//! assert!(quake.peak >= sim.threshold());
//! assert_eq!(sim.phase(), Phase::Halted);
//! assert_eq!(sim.tick(), TickOutcome::Idle);
//! ```

pub mod grid;
pub mod rng;
pub mod shapes;
pub mod simulation;
pub mod stress;

pub use quake_sim_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, GRID_SIZE};
pub use rng::{clock_seed, DeltaSource, SimpleRng};
pub use shapes::{circle_points, segment_points};
pub use simulation::{Earthquake, Simulation, TickOutcome};
pub use stress::{earthquake_cells, is_earthquake, peak_stress, update_stress_levels};
