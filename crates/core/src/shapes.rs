//! Shape rasterizers - turn fault shapes into marked grid cells
//!
//! Every rasterizer clips silently: points outside the grid are skipped and
//! contribute nothing. Each returns how many in-bounds cells it marked
//! (counting a cell once per point, even if it was already a fault).

use std::ops::RangeInclusive;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Shape, CIRCLE_POINT_COUNT, GRID_HEIGHT, GRID_WIDTH};

/// Offsets of the circle approximation around its centre.
///
/// A hand-enumerated radius-5 ring: axis points at distance 5, then the
/// near-axis and diagonal points that close the octagon.
const CIRCLE_OFFSETS: [(i32, i32); CIRCLE_POINT_COUNT] = [
    // Axis points
    (-5, 0),
    (5, 0),
    (0, -5),
    (0, 5),
    // (4, 1) family
    (-4, -1),
    (-4, 1),
    (4, -1),
    (4, 1),
    (-1, -4),
    (1, -4),
    (-1, 4),
    (1, 4),
    // (4, 2) family
    (-4, -2),
    (-4, 2),
    (4, -2),
    (4, 2),
    (-2, -4),
    (2, -4),
    (-2, 4),
    (2, 4),
    // Diagonals
    (-3, -3),
    (-3, 3),
    (3, -3),
    (3, 3),
    // (5, 1) family
    (-5, -1),
    (-5, 1),
    (5, -1),
    (5, 1),
    (-1, -5),
    (1, -5),
    (-1, 5),
    (1, 5),
];

/// Draw any shape
pub fn draw(grid: &mut Grid, shape: Shape) -> usize {
    match shape {
        Shape::Vertical { x } => vertical_line(grid, x),
        Shape::Horizontal { y } => horizontal_line(grid, y),
        Shape::Circle { cx, cy } => circle(grid, cx, cy),
        Shape::Segment { x1, y1, x2, y2 } => segment(grid, x1, y1, x2, y2),
    }
}

/// Mark every row of column `x`
pub fn vertical_line(grid: &mut Grid, x: i32) -> usize {
    if x < 0 || x >= GRID_WIDTH as i32 {
        return 0;
    }
    (0..GRID_HEIGHT as i32)
        .filter(|&y| grid.mark_fault(x, y))
        .count()
}

/// Mark every column of row `y`
pub fn horizontal_line(grid: &mut Grid, y: i32) -> usize {
    if y < 0 || y >= GRID_HEIGHT as i32 {
        return 0;
    }
    (0..GRID_WIDTH as i32)
        .filter(|&x| grid.mark_fault(x, y))
        .count()
}

/// Unclipped circle points around `(cx, cy)`
///
/// Stack-only; the table has a fixed size. Points past the `i32` range are
/// dropped, they could never land on the grid.
pub fn circle_points(cx: i32, cy: i32) -> ArrayVec<(i32, i32), CIRCLE_POINT_COUNT> {
    CIRCLE_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| Some((cx.checked_add(dx)?, cy.checked_add(dy)?)))
        .collect()
}

/// Mark the circle approximation around `(cx, cy)`
pub fn circle(grid: &mut Grid, cx: i32, cy: i32) -> usize {
    circle_points(cx, cy)
        .into_iter()
        .filter(|&(x, y)| grid.mark_fault(x, y))
        .count()
}

/// A Bresenham line in closed form
///
/// The integer loop keeps `err = a(1 + j) - b(1 + i)` after `i` x-steps and `j`
/// y-steps (`a = |dx|`, `b = |dy|`). It moves along the major axis every
/// iteration, so the minor offset after `k` major steps is
/// `floor((2 * minor * k - major) / (2 * major)) + 1`. Any cell can be computed
/// directly, and only the steps that cross the grid need visiting.
#[derive(Debug, Clone, Copy)]
struct Line {
    start: (i64, i64),
    dir: (i64, i64),
    major: i64,
    minor: i64,
    x_major: bool,
}

impl Line {
    fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));
        let a = (x2 - x1).abs();
        let b = (y2 - y1).abs();
        let x_major = a >= b;

        Self {
            start: (x1, y1),
            dir: (if x1 < x2 { 1 } else { -1 }, if y1 < y2 { 1 } else { -1 }),
            major: a.max(b),
            minor: a.min(b),
            x_major,
        }
    }

    /// Traced from the lexicographically smaller endpoint, so that swapping the
    /// endpoints yields the same cells
    fn canonical(x1: i32, y1: i32, x2: i32, y2: i32) -> (Self, bool) {
        if (x2, y2) < (x1, y1) {
            (Self::new(x2, y2, x1, y1), true)
        } else {
            (Self::new(x1, y1, x2, y2), false)
        }
    }

    /// Cell after `k` major-axis steps, `0 <= k <= major`
    fn cell(&self, k: i64) -> (i64, i64) {
        let m = if self.major == 0 {
            0
        } else {
            let num = 2 * i128::from(self.minor) * i128::from(k) - i128::from(self.major);
            // bounded by `minor`
            (num.div_euclid(2 * i128::from(self.major)) + 1) as i64
        };
        let (dx, dy) = if self.x_major { (k, m) } else { (m, k) };
        (self.start.0 + self.dir.0 * dx, self.start.1 + self.dir.1 * dy)
    }

    /// Steps whose major-axis coordinate lies on the grid
    fn on_grid_steps(&self) -> RangeInclusive<i64> {
        let (origin, dir, extent) = if self.x_major {
            (self.start.0, self.dir.0, GRID_WIDTH as i64)
        } else {
            (self.start.1, self.dir.1, GRID_HEIGHT as i64)
        };
        let (lo, hi) = if dir > 0 {
            (-origin, extent - 1 - origin)
        } else {
            (origin - (extent - 1), origin)
        };
        lo.max(0)..=hi.min(self.major)
    }

    /// On-grid cells in traversal order
    fn grid_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.on_grid_steps().filter_map(|k| {
            let (x, y) = self.cell(k);
            let cell = (i32::try_from(x).ok()?, i32::try_from(y).ok()?);
            Grid::index(cell.0, cell.1).map(|_| cell)
        })
    }
}

/// On-grid cells of the Bresenham line from `(x1, y1)` to `(x2, y2)`
///
/// Cells come in order from `(x1, y1)`. Only the stretch crossing the grid is
/// walked, so endpoints anywhere in the `i32` range are cheap.
pub fn segment_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    let (line, reversed) = Line::canonical(x1, y1, x2, y2);
    let mut cells: Vec<_> = line.grid_cells().collect();
    if reversed {
        cells.reverse();
    }
    cells
}

/// Mark a Bresenham line from `(x1, y1)` to `(x2, y2)`
pub fn segment(grid: &mut Grid, x1: i32, y1: i32, x2: i32, y2: i32) -> usize {
    let (line, _) = Line::canonical(x1, y1, x2, y2);
    line.grid_cells()
        .filter(|&(x, y)| grid.mark_fault(x, y))
        .count()
}
