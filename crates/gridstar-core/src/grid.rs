//! The [`Grid`] type — a flat, row-major collection of [`Node`]s addressed
//! by world coordinates.
//!
//! A grid covers the rectangle `[origin, origin + size)`. Node `i` is
//! expected to sit at `origin + (i % width, i / width)`; [`Grid::from_fn`]
//! builds nodes in that order.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::node::Node;

/// How a coordinate is turned into a flat node index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexMode {
    /// `(x - origin.x) + (y - origin.y) * width`. Coordinates outside the
    /// grid rectangle do not resolve.
    #[default]
    Offset,
    /// `|origin.x - x| + |origin.y - y| * width`, accepted whenever the
    /// result falls inside the node collection. Coordinates on the far side
    /// of the origin alias onto other nodes; kept for bit-exact parity with
    /// grids built around that formula.
    Legacy,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid that exclusively owns its nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    origin: Point,
    width: i32,
    height: i32,
    nodes: Vec<Node>,
    mode: IndexMode,
}

impl Grid {
    /// Create a grid from a pre-built node collection.
    ///
    /// Fails if `size` is negative, if `origin + size` does not fit in
    /// `i32`, if `nodes.len() != width * height`, if any node carries a
    /// negative or non-finite penalty, or if node `i` does not sit at
    /// `origin + (i % width, i / width)`.
    pub fn new(origin: Point, size: Point, nodes: Vec<Node>) -> Result<Self, GridError> {
        let extent = check_extent(origin, size)?;
        let expected = size.x as usize * size.y as usize;
        if nodes.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: nodes.len(),
            });
        }
        if let Some(n) = nodes.iter().find(|n| !valid_penalty(n.penalty())) {
            return Err(GridError::InvalidPenalty {
                pos: n.pos(),
                penalty: n.penalty(),
            });
        }
        if let Some((want, n)) = extent.iter().zip(&nodes).find(|(want, n)| n.pos() != *want) {
            return Err(GridError::Misplaced {
                requested: want,
                found: n.pos(),
            });
        }
        Ok(Self {
            origin,
            width: size.x,
            height: size.y,
            nodes,
            mode: IndexMode::default(),
        })
    }

    /// Build a grid by asking `penalty` for the terrain of every cell, in
    /// row-major order starting at `origin`.
    pub fn from_fn(
        origin: Point,
        size: Point,
        mut penalty: impl FnMut(Point) -> f32,
    ) -> Result<Self, GridError> {
        let nodes = check_extent(origin, size)?
            .iter()
            .map(|p| Node::new(p.x, p.y, penalty(p)))
            .collect();
        Self::new(origin, size, nodes)
    }

    /// Switch the coordinate → index mapping.
    pub fn with_index_mode(mut self, mode: IndexMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn index_mode(&self) -> IndexMode {
        self.mode
    }

    /// The bottom-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The rectangle of coordinates covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::from_origin_size(self.origin, self.size())
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The backing node collection, row-major.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node at a flat index.
    #[inline]
    pub fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Node at a flat index, failing loudly when out of range.
    pub fn try_node(&self, idx: usize) -> Result<&Node, GridError> {
        self.nodes.get(idx).ok_or(GridError::IndexOutOfRange {
            index: idx,
            len: self.nodes.len(),
        })
    }

    /// Map a coordinate to a flat index using the grid's [`IndexMode`].
    /// Returns `None` if it does not resolve to a node.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        match self.mode {
            IndexMode::Offset => {
                if !self.bounds().contains(p) {
                    return None;
                }
                let x = (p.x - self.origin.x) as usize;
                let y = (p.y - self.origin.y) as usize;
                Some(y * self.width as usize + x)
            }
            IndexMode::Legacy => {
                let dx = (i64::from(self.origin.x) - i64::from(p.x)).abs();
                let dy = (i64::from(self.origin.y) - i64::from(p.y)).abs();
                let idx = dx + dy * i64::from(self.width);
                usize::try_from(idx).ok().filter(|&i| i < self.nodes.len())
            }
        }
    }

    /// The node at `(x, y)`.
    ///
    /// Fails with [`GridError::OutOfBounds`] if the coordinate does not map
    /// into the grid, and with [`GridError::Misplaced`] if it maps onto a
    /// node that carries a different coordinate.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<&Node, GridError> {
        let idx = self.resolve(Point::new(x, y))?;
        Ok(&self.nodes[idx])
    }

    /// Flat index of the node that sits at `p`.
    pub fn resolve(&self, p: Point) -> Result<usize, GridError> {
        let idx = self.index_of(p).ok_or(GridError::OutOfBounds(p))?;
        let found = self.nodes[idx].pos();
        if found != p {
            return Err(GridError::Misplaced { requested: p, found });
        }
        Ok(idx)
    }

    /// Change the terrain penalty of the node at `p`.
    pub fn set_penalty(&mut self, p: Point, penalty: f32) -> Result<(), GridError> {
        if !valid_penalty(penalty) {
            return Err(GridError::InvalidPenalty { pos: p, penalty });
        }
        let idx = self.resolve(p)?;
        self.nodes[idx].set_penalty(penalty);
        Ok(())
    }

    /// Iterate over `(index, node)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Node)> + '_ {
        self.nodes.iter().enumerate()
    }

    /// Number of walkable nodes.
    pub fn count_walkable(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_walkable()).count()
    }
}

/// The rectangle `[origin, origin + size)`, if `size` is non-negative and
/// the far corner is representable.
fn check_extent(origin: Point, size: Point) -> Result<Range, GridError> {
    if size.x < 0 || size.y < 0 {
        return Err(GridError::NegativeSize(size));
    }
    Range::checked_from_origin_size(origin, size).ok_or(GridError::Overflow { origin, size })
}

#[inline]
fn valid_penalty(penalty: f32) -> bool {
    penalty.is_finite() && penalty >= 0.0
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    origin: Point,
    width: i32,
    height: i32,
    nodes: Vec<Node>,
    #[serde(default)]
    mode: IndexMode,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        Ok(Grid::new(raw.origin, Point::new(raw.width, raw.height), raw.nodes)?
            .with_index_mode(raw.mode))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::node::{BLOCKED, OPEN};

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_fn(Point::new(-1, -1), Point::new(3, 2), |p| {
            if p.x == 0 { BLOCKED } else { OPEN }
        })
        .unwrap()
        .with_index_mode(IndexMode::Legacy);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.index_mode(), IndexMode::Legacy);
    }

    #[test]
    fn grid_deserialize_validates() {
        let json = r#"{"origin":{"x":0,"y":0},"width":2,"height":2,"nodes":[]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
