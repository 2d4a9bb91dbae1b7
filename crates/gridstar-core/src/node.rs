//! A single grid cell: its coordinate and terrain penalty.
//!
//! Walkability is derived from the penalty: a node is walkable iff its
//! penalty is exactly [`OPEN`]. Every other value, [`BLOCKED`] included,
//! makes the node impassable.

use crate::geom::Point;

/// Penalty of an open, walkable cell.
pub const OPEN: f32 = 1.0;

/// Penalty conventionally used for a blocked cell.
pub const BLOCKED: f32 = 0.0;

/// One grid cell. The coordinate is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Point,
    penalty: f32,
}

impl Node {
    /// Create a node at `(x, y)` with the given terrain penalty.
    #[inline]
    pub const fn new(x: i32, y: i32, penalty: f32) -> Self {
        Self {
            pos: Point::new(x, y),
            penalty,
        }
    }

    /// An open node at `p`.
    #[inline]
    pub const fn open(p: Point) -> Self {
        Self::new(p.x, p.y, OPEN)
    }

    /// A blocked node at `p`.
    #[inline]
    pub const fn blocked(p: Point) -> Self {
        Self::new(p.x, p.y, BLOCKED)
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Terrain penalty multiplier.
    #[inline]
    pub const fn penalty(&self) -> f32 {
        self.penalty
    }

    /// Replace the terrain penalty. Walkability follows the new value.
    #[inline]
    pub fn set_penalty(&mut self, penalty: f32) {
        self.penalty = penalty;
    }

    /// Whether the cell may be traversed.
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn is_walkable(&self) -> bool {
        self.penalty == OPEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkable_only_when_open() {
        assert!(Node::new(0, 0, OPEN).is_walkable());
        assert!(!Node::new(0, 0, BLOCKED).is_walkable());
        assert!(!Node::new(0, 0, 0.5).is_walkable());
        assert!(!Node::new(0, 0, 2.0).is_walkable());
    }

    #[test]
    fn set_penalty_rederives_walkability() {
        let mut n = Node::open(Point::new(3, -1));
        assert!(n.is_walkable());
        n.set_penalty(BLOCKED);
        assert!(!n.is_walkable());
        n.set_penalty(OPEN);
        assert!(n.is_walkable());
        assert_eq!(n.pos(), Point::new(3, -1));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_round_trip() {
        let n = Node::new(4, -2, BLOCKED);
        let json = serde_json::to_string(&n).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
        assert!(!back.is_walkable());
    }
}
