//! Quake Sim (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the pieces that
//! tie them together: environment configuration and the interactive controller.

pub use quake_sim_core as core;
pub use quake_sim_input as input;
pub use quake_sim_journal as journal;
pub use quake_sim_term as term;
pub use quake_sim_types as types;

pub mod config;
pub mod controller;

pub use config::SimConfig;
pub use controller::Controller;
