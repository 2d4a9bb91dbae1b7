use std::time::Instant;

use gridstar_core::{Grid, Point};

use crate::distance::{octile, step_cost};
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::table::SearchTable;

/// Tuning knobs for [`Pathfinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound on the number of nodes whose neighbors get expanded.
    /// `None` lets the search run until it finds the goal or exhausts the
    /// open set.
    pub max_expansions: Option<usize>,
}

/// A* search over a [`Grid`].
///
/// Moves are 4-directional. Stepping onto a node costs
/// `octile(current, neighbor) * round(10 * neighbor.penalty)` and the
/// estimate to the goal is `octile(node, goal)`. Among open nodes the one
/// with the lowest `f` is expanded first, ties going to the lowest `h` and
/// then to the node that was opened earliest, so results are reproducible.
#[derive(Debug, Clone, Default)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a route between the nodes sitting at `start` and `goal`.
    ///
    /// Returns `Ok(None)` when no walkable route exists. Coordinates that do
    /// not resolve to their own node are reported as errors.
    pub fn find_path(
        &self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<Option<Path>, SearchError> {
        let start_idx = grid.resolve(start)?;
        let goal_idx = grid.resolve(goal)?;
        self.search(grid, start_idx, goal_idx)
    }

    /// Find a route between the nodes at flat indices `start` and `goal` of
    /// the grid's node collection.
    pub fn find_path_by_index(
        &self,
        grid: &Grid,
        start: usize,
        goal: usize,
    ) -> Result<Option<Path>, SearchError> {
        grid.try_node(start)?;
        grid.try_node(goal)?;
        self.search(grid, start, goal)
    }

    fn search(
        &self,
        grid: &Grid,
        start_idx: usize,
        goal_idx: usize,
    ) -> Result<Option<Path>, SearchError> {
        let started = Instant::now();
        let nodes = grid.nodes();
        let goal = nodes[goal_idx].pos();

        let mut table = SearchTable::new(nodes.len());
        table.relax(start_idx, 0, octile(nodes[start_idx].pos(), goal), None);

        let mut nb = Neighbors::new();
        let mut expanded = 0usize;

        while let Some(ci) = table.pop_best() {
            let current = nodes[ci].pos();
            let current_g = table.node(ci).g;

            if current == goal {
                let path = retrace(grid, &table, ci);
                log::debug!(
                    "path {} -> {} found: {} points, cost {}, {} expanded in {:?}",
                    nodes[start_idx].pos(),
                    goal,
                    path.len(),
                    path.cost(),
                    expanded,
                    started.elapsed()
                );
                return Ok(Some(path));
            }

            if self.config.max_expansions.is_some_and(|max| expanded >= max) {
                log::debug!("search interrupted after {expanded} expansions");
                return Err(SearchError::Interrupted { expanded });
            }
            expanded += 1;
            log::trace!("expand {current} g={current_g} h={}", table.node(ci).h);

            for &ni in nb.cardinal(grid, ci) {
                if table.is_closed(ni) {
                    continue;
                }
                let neighbor = &nodes[ni];
                let tentative_g =
                    current_g + step_cost(current, neighbor.pos(), neighbor.penalty());
                if table.is_open(ni) && tentative_g >= table.node(ni).g {
                    continue;
                }
                table.relax(ni, tentative_g, octile(neighbor.pos(), goal), Some(ci));
            }
        }

        log::debug!(
            "no path {} -> {} ({} expanded in {:?}, {} left open)",
            nodes[start_idx].pos(),
            goal,
            expanded,
            started.elapsed(),
            table.open_len()
        );
        Ok(None)
    }
}

/// Rebuild the route ending at `goal_idx`, start first.
fn retrace(grid: &Grid, table: &SearchTable, goal_idx: usize) -> Path {
    let mut points: Vec<Point> = table
        .ancestry(goal_idx)
        .map(|i| grid.nodes()[i].pos())
        .collect();
    points.reverse();
    Path::new(points, table.node(goal_idx).g)
}
