//! Journal record types.
//!
//! One JSON object per line, tagged by `type`.

use serde::{Deserialize, Serialize};

use crate::types::Shape;

/// Shape parameters as recorded in the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeRecord {
    Vertical { x: i32 },
    Horizontal { y: i32 },
    Circle { cx: i32, cy: i32 },
    Segment { x1: i32, y1: i32, x2: i32, y2: i32 },
}

impl From<Shape> for ShapeRecord {
    fn from(value: Shape) -> Self {
        match value {
            Shape::Vertical { x } => Self::Vertical { x },
            Shape::Horizontal { y } => Self::Horizontal { y },
            Shape::Circle { cx, cy } => Self::Circle { cx, cy },
            Shape::Segment { x1, y1, x2, y2 } => Self::Segment { x1, y1, x2, y2 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    SessionStarted {
        seed: u32,
        threshold: u32,
        width: usize,
        height: usize,
    },
    ShapeDrawn {
        shape: ShapeRecord,
        cells_marked: usize,
    },
    SimulationStarted {
        fault_cells: usize,
    },
    Tick {
        step: u32,
        peak: u32,
    },
    Earthquake {
        step: u32,
        peak: u32,
        epicentres: Vec<(usize, usize)>,
    },
}
