//! Rasterizer tests - which cells each shape marks

use std::collections::HashSet;

use quake_sim::core::shapes::{
    circle, circle_points, draw, horizontal_line, segment, segment_points, vertical_line,
};
use quake_sim::core::Grid;
use quake_sim::types::{Shape, CIRCLE_POINT_COUNT, GRID_HEIGHT, GRID_WIDTH};

/// All (x, y) fault cells
fn fault_cells(grid: &Grid) -> HashSet<(i32, i32)> {
    let mut cells = HashSet::new();
    for y in 0..GRID_HEIGHT as i32 {
        for x in 0..GRID_WIDTH as i32 {
            if grid.is_fault(x, y) == Some(true) {
                cells.insert((x, y));
            }
        }
    }
    cells
}

#[test]
fn test_vertical_line_marks_exactly_one_column() {
    for x in 0..GRID_WIDTH as i32 {
        let mut grid = Grid::new();
        assert_eq!(vertical_line(&mut grid, x), GRID_HEIGHT);

        let cells = fault_cells(&grid);
        assert_eq!(cells.len(), GRID_HEIGHT);
        assert!(cells.iter().all(|&(cx, _)| cx == x));
    }
}

#[test]
fn test_horizontal_line_marks_exactly_one_row() {
    for y in 0..GRID_HEIGHT as i32 {
        let mut grid = Grid::new();
        assert_eq!(horizontal_line(&mut grid, y), GRID_WIDTH);

        let cells = fault_cells(&grid);
        assert_eq!(cells.len(), GRID_WIDTH);
        assert!(cells.iter().all(|&(_, cy)| cy == y));
    }
}

#[test]
fn test_out_of_range_shapes_leave_grid_unchanged() {
    let far = [-100, -6, -1, 20, 26, 100];
    for &v in &far {
        let mut grid = Grid::new();
        assert_eq!(vertical_line(&mut grid, v), 0);
        assert_eq!(horizontal_line(&mut grid, v), 0);
        assert_eq!(segment(&mut grid, v, v, v, v), 0);
        assert_eq!(grid, Grid::new(), "value {}", v);
    }

    // Entire ring outside the grid.
    let mut grid = Grid::new();
    assert_eq!(circle(&mut grid, -6, -6), 0);
    assert_eq!(circle(&mut grid, 30, 10), 0);
    assert_eq!(segment(&mut grid, -5, -5, -1, -9), 0);
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_circle_fully_inside_marks_all_points() {
    let mut grid = Grid::new();
    assert_eq!(circle(&mut grid, 10, 10), CIRCLE_POINT_COUNT);
    assert_eq!(grid.fault_count(), CIRCLE_POINT_COUNT);

    // Centre and interior stay clear.
    assert_eq!(grid.is_fault(10, 10), Some(false));
    assert_eq!(grid.is_fault(12, 11), Some(false));

    // Axis points at radius 5.
    for (x, y) in [(5, 10), (15, 10), (10, 5), (10, 15)] {
        assert_eq!(grid.is_fault(x, y), Some(true), "({}, {})", x, y);
    }
}

#[test]
fn test_circle_clips_at_corner() {
    let mut grid = Grid::new();
    let expected = circle_points(0, 0)
        .into_iter()
        .filter(|&(x, y)| x >= 0 && y >= 0)
        .count();

    assert_eq!(circle(&mut grid, 0, 0), expected);
    assert_eq!(grid.fault_count(), expected);
    // Quarter ring: (5,0), (4,1), (4,2), (5,1), their transposes, and (3,3).
    assert_eq!(expected, 9);
}

#[test]
fn test_degenerate_segment_marks_one_cell() {
    let mut grid = Grid::new();
    assert_eq!(segment(&mut grid, 7, 3, 7, 3), 1);
    assert_eq!(fault_cells(&grid), HashSet::from([(7, 3)]));
}

#[test]
fn test_segment_symmetric_in_endpoints() {
    let endpoints = [
        (0, 0, 19, 19),
        (0, 0, 4, 2),
        (2, 17, 15, 3),
        (19, 0, 0, 7),
        (5, 5, 6, 18),
        (-4, 3, 25, 11),
        (10, 10, 10, 0),
    ];

    for &(x1, y1, x2, y2) in &endpoints {
        let mut forward = Grid::new();
        let mut backward = Grid::new();
        segment(&mut forward, x1, y1, x2, y2);
        segment(&mut backward, x2, y2, x1, y1);
        assert_eq!(
            fault_cells(&forward),
            fault_cells(&backward),
            "({}, {}) -> ({}, {})",
            x1,
            y1,
            x2,
            y2
        );
    }
}

#[test]
fn test_segment_is_connected_and_hits_both_ends() {
    let points = segment_points(2, 17, 15, 3);
    assert_eq!(points.first(), Some(&(2, 17)));
    assert_eq!(points.last(), Some(&(15, 3)));

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
        assert_ne!(a, b);
    }
    // Bresenham takes exactly max(|dx|, |dy|) steps.
    assert_eq!(points.len(), 15);
}

#[test]
fn test_segment_clips_partially_outside() {
    let mut grid = Grid::new();
    // Horizontal run from x=-5 to x=24 on row 4: only 20 cells land.
    assert_eq!(segment(&mut grid, -5, 4, 24, 4), GRID_WIDTH);
    assert_eq!(fault_cells(&grid).len(), GRID_WIDTH);
}

#[test]
fn test_faults_are_monotonic_union() {
    let mut grid = Grid::new();
    draw(&mut grid, Shape::Vertical { x: 5 });
    let before = fault_cells(&grid);

    draw(&mut grid, Shape::Horizontal { y: 0 });
    let after = fault_cells(&grid);

    assert!(before.is_subset(&after));
    assert_eq!(after.len(), GRID_HEIGHT + GRID_WIDTH - 1);
}

#[test]
fn test_draw_dispatches_each_shape() {
    let mut grid = Grid::new();
    assert_eq!(draw(&mut grid, Shape::Vertical { x: 0 }), GRID_HEIGHT);
    assert_eq!(draw(&mut grid, Shape::Horizontal { y: 19 }), GRID_WIDTH);
    assert_eq!(draw(&mut grid, Shape::Circle { cx: 10, cy: 10 }), CIRCLE_POINT_COUNT);
    assert_eq!(
        draw(
            &mut grid,
            Shape::Segment {
                x1: 1,
                y1: 1,
                x2: 3,
                y2: 3
            }
        ),
        3
    );
}

#[test]
fn test_extreme_circle_centres_leave_grid_unchanged() {
    for &(cx, cy) in &[
        (i32::MAX, 0),
        (i32::MIN, 0),
        (0, i32::MAX),
        (i32::MIN, i32::MIN),
        (i32::MAX, i32::MAX),
    ] {
        let mut grid = Grid::new();
        assert_eq!(circle(&mut grid, cx, cy), 0);
        assert_eq!(grid, Grid::new(), "centre ({}, {})", cx, cy);
    }
}

#[test]
fn test_extreme_segment_endpoints_clip_to_grid() {
    let mut grid = Grid::new();
    assert_eq!(segment(&mut grid, i32::MIN, 0, i32::MAX, 0), GRID_WIDTH);
    assert!(fault_cells(&grid).iter().all(|&(_, y)| y == 0));

    let mut grid = Grid::new();
    assert_eq!(segment(&mut grid, i32::MIN, i32::MIN, i32::MAX, i32::MAX), GRID_WIDTH);
    assert_eq!(grid.is_fault(5, 5), Some(true));

    // Steep line through the middle column.
    let mut grid = Grid::new();
    assert_eq!(segment(&mut grid, 0, i32::MIN, 19, i32::MAX), GRID_HEIGHT);
    let column: HashSet<_> = (0..GRID_HEIGHT as i32).map(|y| (10, y)).collect();
    assert_eq!(fault_cells(&grid), column);
}

#[test]
fn test_far_segments_that_miss_leave_grid_unchanged() {
    let mut grid = Grid::new();
    // Entirely above the grid.
    assert_eq!(segment(&mut grid, -1_000_000_000, -5, 1_000_000_000, -5), 0);
    // Anti-diagonal x + y = -1 passes just outside the corner.
    assert_eq!(segment(&mut grid, i32::MAX, i32::MIN, i32::MIN, i32::MAX), 0);
    // Both ends far past the right edge.
    assert_eq!(segment(&mut grid, 40, 3, i32::MAX, 19), 0);
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_segment_points_are_clipped_and_ordered() {
    let points = segment_points(24, 4, -5, 4);
    assert_eq!(points.len(), GRID_WIDTH);
    assert_eq!(points.first(), Some(&(19, 4)));
    assert_eq!(points.last(), Some(&(0, 4)));
}
