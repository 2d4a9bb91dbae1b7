use gridstar_core::Point;

use crate::distance::octile;

/// A route from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: i32) -> Self {
        Self { points, cost }
    }

    /// The points of the route, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Accumulated search cost of the goal (its final `g`), terrain
    /// weights included.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Geometric length of the route in octile units, terrain ignored.
    /// Four straight steps measure 40.
    pub fn distance(&self) -> i32 {
        self.points.windows(2).map(|w| octile(w[0], w[1])).sum()
    }

    /// Number of points, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of moves along the route.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Path::new(
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)],
            200,
        );
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.cost(), 200);
        assert_eq!(p.distance(), 20);
        assert_eq!(p.start(), Some(Point::new(0, 0)));
        assert_eq!(p.goal(), Some(Point::new(1, 1)));
        assert!(p.contains(Point::new(1, 0)));
        assert_eq!((&p).into_iter().count(), 3);
        assert_eq!(p.into_points().len(), 3);
    }

    #[test]
    fn single_point() {
        let p = Path::new(vec![Point::new(2, 2)], 0);
        assert_eq!(p.steps(), 0);
        assert_eq!(p.distance(), 0);
        assert_eq!(p.start(), p.goal());
    }
}
