//! Console input module.
//!
//! Reads the drawing menu and shape coordinates as whole lines. Parsing is
//! kept apart from I/O so the accepted formats can be tested directly; the
//! [`Prompter`] wraps any `BufRead`/`Write` pair and re-prompts on bad input.

pub mod parse;
pub mod prompt;

pub use quake_sim_term as term;
pub use quake_sim_types as types;

pub use parse::{parse_int, parse_menu_choice, parse_pair};
pub use prompt::Prompter;
