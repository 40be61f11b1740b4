//! Session journal module.
//!
//! Writes a structured, line-delimited JSON record of a run: the seed, each
//! drawn shape, every tick's peak stress and the final earthquake. The seed and
//! shapes are enough to rerun a session with `QUAKE_SIM_SEED`.

pub mod event;
pub mod writer;

pub use quake_sim_types as types;

pub use event::{SessionEvent, ShapeRecord};
pub use writer::SessionJournal;
