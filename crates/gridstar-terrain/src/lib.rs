//! Random terrain generation for gridstar grids.
//!
//! [`TerrainGen`] lays out a grid centred on the world origin and blocks a
//! random share of its cells, leaving chosen cells (typically the start and
//! goal of a search) open.

use gridstar_core::{BLOCKED, Grid, GridError, OPEN, Point};
use rand::Rng;

/// Default chance, in percent, that a cell is blocked.
pub const DEFAULT_BLOCKED_PCT: f64 = 20.0;

/// Bottom-left corner that centres a grid of `size` on the world origin.
#[inline]
pub fn centered_origin(size: Point) -> Point {
    Point::new(-size.x / 2, -size.y / 2)
}

/// Random walkability generator.
pub struct TerrainGen<R: Rng> {
    pub rng: R,
    blocked_pct: f64,
}

impl<R: Rng> TerrainGen<R> {
    /// Create a generator blocking [`DEFAULT_BLOCKED_PCT`] percent of cells.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            blocked_pct: DEFAULT_BLOCKED_PCT,
        }
    }

    /// Set the chance, in percent, that a cell is blocked. Clamped to
    /// `0.0..=100.0`; NaN counts as zero.
    pub fn with_blocked_pct(mut self, pct: f64) -> Self {
        self.blocked_pct = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) };
        self
    }

    pub fn blocked_pct(&self) -> f64 {
        self.blocked_pct
    }

    /// Generate a centred grid of `size`. Nodes whose flat index appears in
    /// `keep` are always open.
    pub fn generate(&mut self, size: Point, keep: &[usize]) -> Result<Grid, GridError> {
        let origin = centered_origin(size);
        let p = self.blocked_pct / 100.0;
        let mut idx = 0usize;
        let grid = Grid::from_fn(origin, size, |_| {
            let kept = keep.contains(&idx);
            idx += 1;
            if !kept && self.rng.random_bool(p) {
                BLOCKED
            } else {
                OPEN
            }
        })?;
        log::debug!(
            "generated {}x{} terrain at {}: {} of {} cells open",
            size.x,
            size.y,
            origin,
            grid.count_walkable(),
            grid.len()
        );
        Ok(grid)
    }
}
