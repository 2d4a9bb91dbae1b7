use gridstar_core::{Grid, Point};

/// Cached neighbor computation helper.
///
/// Resolves the 4-directional (cardinal) neighbors of a node through the
/// grid's coordinate → index mapping and keeps only the walkable ones.
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Probe order: left, right, down, up.
    const DIRS: [Point; 4] = [
        Point::new(-1, 0),
        Point::new(1, 0),
        Point::new(0, -1),
        Point::new(0, 1),
    ];

    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the flat indices of the walkable cardinal neighbors of the
    /// node at `idx`. Neighbors that do not resolve to a node are skipped.
    pub fn cardinal(&mut self, grid: &Grid, idx: usize) -> &[usize] {
        self.buf.clear();
        let Some(node) = grid.node(idx) else {
            return &self.buf;
        };
        let p = node.pos();
        for d in Self::DIRS {
            let Some(ni) = grid.index_of(p + d) else {
                continue;
            };
            if grid.nodes()[ni].is_walkable() {
                self.buf.push(ni);
            }
        }
        &self.buf
    }
}
