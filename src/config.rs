//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `QUAKE_SIM_SEED` | clock | RNG seed for a reproducible run |
//! | `QUAKE_SIM_TICK_MS` | 500 | Pause between simulation ticks |
//! | `QUAKE_SIM_THRESHOLD` | 200 | Stress that triggers the earthquake |
//! | `QUAKE_SIM_LOG_PATH` | unset | JSON-lines session journal |
//!
//! Unparseable values fall back to the default.

use std::time::Duration;

use crate::core::clock_seed;
use crate::types::{EARTHQUAKE_THRESHOLD, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: Option<u32>,
    pub tick_ms: u64,
    pub threshold: u32,
    pub log_path: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            threshold: EARTHQUAKE_THRESHOLD,
            log_path: None,
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("QUAKE_SIM_SEED").and_then(|s| s.trim().parse().ok());

        let tick_ms = lookup("QUAKE_SIM_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(TICK_MS);

        let threshold = lookup("QUAKE_SIM_THRESHOLD")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&t: &u32| t > 0)
            .unwrap_or(EARTHQUAKE_THRESHOLD);

        let log_path = lookup("QUAKE_SIM_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            threshold,
            log_path,
        }
    }

    /// Configured seed, or one drawn from the clock
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
