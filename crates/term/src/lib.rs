//! Terminal rendering module.
//!
//! Renders the fault map, the stress map and the banners as plain scrolling
//! text with ANSI color. Every screen is encoded into an in-memory buffer with
//! crossterm commands first, then written to the output in a single flush.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Make rendered output inspectable in tests (encode into a `Vec<u8>`)
//! - Work on any `Write`, not just stdout

pub mod palette;
pub mod renderer;

pub use quake_sim_core as core;
pub use quake_sim_types as types;

pub use renderer::{
    encode_clear_into, encode_earthquake_into, encode_fault_map_into, encode_notice_into,
    encode_status_into, encode_step_into, encode_stress_map_into, encode_title_into,
    TerminalRenderer,
};
