//! Stress updater and earthquake detection
//!
//! One call to [`update_stress_levels`] is one tick: every cell receives a
//! random delta (biased upward on faults) and is floored at zero. Detection
//! is kept separate so the caller decides when to look.

use std::ops::RangeInclusive;

use crate::grid::Grid;
use crate::rng::DeltaSource;
use crate::types::{CALM_DELTA_MAX, CALM_DELTA_MIN, FAULT_DELTA_MAX, FAULT_DELTA_MIN};

/// Inclusive delta range applied to a cell
pub fn delta_range(is_fault: bool) -> RangeInclusive<i32> {
    if is_fault {
        FAULT_DELTA_MIN..=FAULT_DELTA_MAX
    } else {
        CALM_DELTA_MIN..=CALM_DELTA_MAX
    }
}

/// Advance every cell's stress by one random delta
///
/// Cells are visited in row-major order, drawing exactly one delta each.
pub fn update_stress_levels<R: DeltaSource + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let (faults, stress) = grid.layers_mut();
    for (level, &is_fault) in stress.iter_mut().zip(faults) {
        let range = delta_range(is_fault);
        let delta = rng.next_in(*range.start(), *range.end());
        *level = level.saturating_add_signed(delta);
    }
}

/// Highest stress on the grid
pub fn peak_stress(grid: &Grid) -> u32 {
    grid.stress_levels().iter().copied().max().unwrap_or(0)
}

/// Whether any cell has reached `threshold`
pub fn is_earthquake(grid: &Grid, threshold: u32) -> bool {
    grid.stress_levels().iter().any(|&s| s >= threshold)
}

/// All (x, y) cells at or above `threshold`, row-major order
pub fn earthquake_cells(grid: &Grid, threshold: u32) -> Vec<(usize, usize)> {
    grid.stress_levels()
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s >= threshold)
        .map(|(idx, _)| Grid::coords(idx))
        .collect()
}
