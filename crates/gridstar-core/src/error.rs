use std::fmt;

use crate::geom::Point;

/// Precondition violations detected while building or querying a [`Grid`].
///
/// [`Grid`]: crate::Grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The node collection does not hold exactly `width * height` nodes.
    SizeMismatch { expected: usize, actual: usize },
    /// Width or height is negative.
    NegativeSize(Point),
    /// The far corner `origin + size` does not fit in `i32`.
    Overflow { origin: Point, size: Point },
    /// A node carries a negative or non-finite penalty.
    InvalidPenalty { pos: Point, penalty: f32 },
    /// The coordinate does not map into the grid.
    OutOfBounds(Point),
    /// A flat index past the end of the node collection.
    IndexOutOfRange { index: usize, len: usize },
    /// A node is not where row-major order puts it, or a coordinate
    /// resolved to a node placed elsewhere.
    Misplaced { requested: Point, found: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "grid: expected {expected} nodes, got {actual}")
            }
            Self::NegativeSize(size) => write!(f, "grid: negative size {size}"),
            Self::Overflow { origin, size } => {
                write!(f, "grid: origin {origin} + size {size} overflows")
            }
            Self::InvalidPenalty { pos, penalty } => {
                write!(f, "grid: node at {pos} has invalid penalty {penalty}")
            }
            Self::OutOfBounds(p) => write!(f, "grid: coordinate {p} is out of bounds"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "grid: index {index} out of range for {len} nodes")
            }
            Self::Misplaced { requested, found } => {
                write!(f, "grid: coordinate {requested} resolves to node at {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
