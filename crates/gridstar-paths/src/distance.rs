use gridstar_core::Point;

/// Cost of one axis-aligned step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of one diagonal step.
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two points, scaled so a straight step costs
/// [`STRAIGHT_COST`] and a diagonal step [`DIAGONAL_COST`].
///
/// Used both as the heuristic estimate and as the geometric part of a step.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * lo + STRAIGHT_COST * (hi - lo)
}

/// Integer multiplier for a terrain penalty: `round(10 * penalty)`.
#[inline]
pub fn terrain_weight(penalty: f32) -> i32 {
    (STRAIGHT_COST as f32 * penalty).round() as i32
}

/// Cost of moving from `from` onto a cell at `to` with the given penalty.
#[inline]
pub fn step_cost(from: Point, to: Point, penalty: f32) -> i32 {
    octile(from, to) * terrain_weight(penalty)
}
