//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the simulator.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, session journal).
//!
//! # Grid Dimensions
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! Coordinates are `(x, y)` where `x` is the column and `y` is the row.
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `EARTHQUAKE_THRESHOLD` | 200 | Stress at which the simulation halts |
//! | `FAULT_DELTA_MIN..=FAULT_DELTA_MAX` | 0..=10 | Per-tick delta on fault cells |
//! | `CALM_DELTA_MIN..=CALM_DELTA_MAX` | -5..=5 | Per-tick delta elsewhere |
//! | `STRESS_MID_TIER` | 50 | First stress value rendered in the mid tier |
//! | `STRESS_HIGH_TIER` | 100 | First stress value rendered in the high tier |
//! | `TICK_MS` | 500 | Default pacing delay between ticks |
//!
//! # Examples
//!
//! ```
//! use quake_sim_types::{MenuChoice, StressTier, GRID_WIDTH, GRID_HEIGHT};
//!
//! assert_eq!(MenuChoice::from_code(3), Some(MenuChoice::Circle));
//! assert_eq!(MenuChoice::from_code(-1), Some(MenuChoice::BeginSimulation));
//! assert_eq!(MenuChoice::from_code(7), None);
//!
//! assert_eq!(StressTier::classify(49), StressTier::Low);
//! assert_eq!(StressTier::classify(100), StressTier::High);
//!
//! assert_eq!(GRID_WIDTH, 20);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: usize = 20;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Stress value at which an earthquake is declared
pub const EARTHQUAKE_THRESHOLD: u32 = 200;

/// Smallest per-tick delta applied to a fault cell
pub const FAULT_DELTA_MIN: i32 = 0;

/// Largest per-tick delta applied to a fault cell
pub const FAULT_DELTA_MAX: i32 = 10;

/// Smallest per-tick delta applied to a non-fault cell
pub const CALM_DELTA_MIN: i32 = -5;

/// Largest per-tick delta applied to a non-fault cell
pub const CALM_DELTA_MAX: i32 = 5;

/// Lowest stress value rendered in the mid (warning) tier
pub const STRESS_MID_TIER: u32 = 50;

/// Lowest stress value rendered in the high (alert) tier
pub const STRESS_HIGH_TIER: u32 = 100;

/// Default pacing delay between simulation ticks in milliseconds
pub const TICK_MS: u64 = 500;

/// Radius of the approximated circle fault
pub const CIRCLE_RADIUS: i32 = 5;

/// Number of points in the circle approximation table
pub const CIRCLE_POINT_COUNT: usize = 32;

/// Largest absolute coordinate accepted from the console
pub const COORD_LIMIT: i32 = 10_000;


/// A fault shape the user can draw
///
/// Coordinates are signed so that out-of-range input can be clipped
/// by the rasterizers instead of rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Every row of column `x`
    Vertical { x: i32 },
    /// Every column of row `y`
    Horizontal { y: i32 },
    /// 32-point ring of radius 5 around `(cx, cy)`
    Circle { cx: i32, cy: i32 },
    /// Bresenham line from `(x1, y1)` to `(x2, y2)`, both ends inclusive
    Segment { x1: i32, y1: i32, x2: i32, y2: i32 },
}

/// Entries of the shape-drawing menu
///
/// Each entry carries the integer code the user types to select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// `1`
    VerticalLine,
    /// `2`
    HorizontalLine,
    /// `3`
    Circle,
    /// `4`
    PointToPoint,
    /// `-1`
    BeginSimulation,
}

impl MenuChoice {
    /// All entries, in the order the menu lists them
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::VerticalLine,
        MenuChoice::HorizontalLine,
        MenuChoice::Circle,
        MenuChoice::PointToPoint,
        MenuChoice::BeginSimulation,
    ];

    /// Map a typed menu code to an entry
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(MenuChoice::VerticalLine),
            2 => Some(MenuChoice::HorizontalLine),
            3 => Some(MenuChoice::Circle),
            4 => Some(MenuChoice::PointToPoint),
            -1 => Some(MenuChoice::BeginSimulation),
            _ => None,
        }
    }

    /// The code the user types for this entry
    pub fn code(&self) -> i32 {
        match self {
            MenuChoice::VerticalLine => 1,
            MenuChoice::HorizontalLine => 2,
            MenuChoice::Circle => 3,
            MenuChoice::PointToPoint => 4,
            MenuChoice::BeginSimulation => -1,
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::VerticalLine => "Vertical Line",
            MenuChoice::HorizontalLine => "Horizontal Line",
            MenuChoice::Circle => "Circle",
            MenuChoice::PointToPoint => "Point to Point Line",
            MenuChoice::BeginSimulation => "Begin Simulation",
        }
    }
}

/// Display tier of a stress value
///
/// - **Low**: below 50
/// - **Mid**: 50 up to (not including) 100
/// - **High**: 100 and above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StressTier {
    Low,
    Mid,
    High,
}

impl StressTier {
    pub fn classify(stress: u32) -> Self {
        if stress < STRESS_MID_TIER {
            StressTier::Low
        } else if stress < STRESS_HIGH_TIER {
            StressTier::Mid
        } else {
            StressTier::High
        }
    }
}

/// Lifecycle phase of a simulation run
///
/// The cycle is one-way: Drawing → Simulating → Halted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Shapes may be drawn; no stress updates yet
    Drawing,
    /// Stress updates run once per tick
    Simulating,
    /// An earthquake was detected; nothing changes anymore
    Halted,
}
