//! Grid module - the fault map and the stress map
//!
//! The grid is 20x20 and holds two parallel layers: a fault flag and a stress level per cell.
//! Both layers use flat arrays in row-major order for cache locality and zero allocation.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row (top to bottom).

use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
pub const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// Fault and stress layers, 20 columns x 20 rows
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Fault flags, row-major order (y * WIDTH + x)
    faults: [bool; GRID_SIZE],
    /// Stress levels, row-major order (y * WIDTH + x)
    stress: [u32; GRID_SIZE],
}

impl Grid {
    /// Create a grid with no faults and zero stress
    pub fn new() -> Self {
        Self {
            faults: [false; GRID_SIZE],
            stress: [0; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i32 || y < 0 || y >= GRID_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * GRID_WIDTH + (x as usize))
    }

    /// (x, y) of a flat index
    #[inline(always)]
    pub fn coords(index: usize) -> (usize, usize) {
        (index % GRID_WIDTH, index / GRID_WIDTH)
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Whether (x, y) is a fault cell; None if out of bounds
    pub fn is_fault(&self, x: i32, y: i32) -> Option<bool> {
        Self::index(x, y).map(|idx| self.faults[idx])
    }

    /// Mark (x, y) as part of a fault
    /// Returns false if out of bounds
    pub fn mark_fault(&mut self, x: i32, y: i32) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.faults[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Stress at (x, y); None if out of bounds
    pub fn stress(&self, x: i32, y: i32) -> Option<u32> {
        Self::index(x, y).map(|idx| self.stress[idx])
    }

    /// Overwrite the stress at (x, y)
    /// Returns false if out of bounds
    pub fn set_stress(&mut self, x: i32, y: i32, value: u32) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.stress[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Number of fault cells
    pub fn fault_count(&self) -> usize {
        self.faults.iter().filter(|&&f| f).count()
    }

    /// Flat fault layer
    pub fn faults(&self) -> &[bool] {
        &self.faults
    }

    /// Flat stress layer
    pub fn stress_levels(&self) -> &[u32] {
        &self.stress
    }

    /// Both layers at once, for updates that read faults and write stress
    pub(crate) fn layers_mut(&mut self) -> (&[bool], &mut [u32]) {
        (&self.faults, &mut self.stress)
    }

    /// Fault layer, one slice per row
    pub fn fault_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.faults.chunks_exact(GRID_WIDTH)
    }

    /// Stress layer, one slice per row
    pub fn stress_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.stress.chunks_exact(GRID_WIDTH)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
