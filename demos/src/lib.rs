//! Shared demo model: generate random terrain, search it, and draw the
//! result as text.
//!
//! Legend: `S` start, `G` goal, `*` path, `.` open, `#` blocked. The top
//! row of the drawing is the grid's highest `y`.

use clap::Parser;
use gridstar_core::{Grid, IndexMode, Point};
use gridstar_paths::{Path, Pathfinder, SearchConfig, SearchError};
use gridstar_terrain::TerrainGen;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Find a path across random terrain", long_about = None)]
pub struct Config {
    /// Grid width in cells.
    #[arg(long, default_value_t = 20)]
    pub width: i32,

    /// Grid height in cells.
    #[arg(long, default_value_t = 12)]
    pub height: i32,

    /// Index of the start node in the grid's node list.
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Index of the goal node; defaults to the last node.
    #[arg(long)]
    pub end: Option<usize>,

    /// Chance, in percent, that a cell is blocked.
    #[arg(long, default_value_t = 20.0)]
    pub blocked_pct: f64,

    /// Seed for the terrain generator; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Map coordinates with the absolute-difference index formula.
    #[arg(long, default_value_t = false)]
    pub legacy_index: bool,

    /// Give up after expanding this many nodes.
    #[arg(long)]
    pub max_expansions: Option<usize>,
}

impl Config {
    /// Goal index, falling back to the last node of the grid.
    pub fn end_index(&self) -> usize {
        let len = self.width.max(0) as usize * self.height.max(0) as usize;
        self.end.unwrap_or(len.saturating_sub(1))
    }
}

/// Outcome of one demo run.
pub struct Scenario {
    pub grid: Grid,
    pub start: usize,
    pub end: usize,
    pub path: Option<Path>,
}

impl Scenario {
    /// Generate terrain per `config` and search it.
    pub fn run(config: &Config) -> Result<Self, SearchError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (start, end) = (config.start, config.end_index());
        let mode = if config.legacy_index {
            IndexMode::Legacy
        } else {
            IndexMode::Offset
        };
        let grid = TerrainGen::new(rng)
            .with_blocked_pct(config.blocked_pct)
            .generate(Point::new(config.width, config.height), &[start, end])?
            .with_index_mode(mode);
        let finder = Pathfinder::with_config(SearchConfig {
            max_expansions: config.max_expansions,
        });
        let path = finder.find_path_by_index(&grid, start, end)?;
        Ok(Self {
            grid,
            start,
            end,
            path,
        })
    }

    /// Draw the grid and the path, top row first.
    pub fn render(&self) -> String {
        let width = self.grid.width().max(0) as usize;
        if width == 0 {
            return String::new();
        }
        let mut out = String::with_capacity(self.grid.len() + self.grid.height() as usize);
        for (row, nodes) in self.grid.nodes().chunks(width).enumerate().rev() {
            for (col, node) in nodes.iter().enumerate() {
                let idx = row * width + col;
                let on_path = self
                    .path
                    .as_ref()
                    .is_some_and(|path| path.contains(node.pos()));
                out.push(if idx == self.start {
                    'S'
                } else if idx == self.end {
                    'G'
                } else if on_path {
                    '*'
                } else if node.is_walkable() {
                    '.'
                } else {
                    '#'
                });
            }
            out.push('\n');
        }
        out
    }

    /// One-line summary of the search result.
    pub fn summary(&self) -> String {
        match &self.path {
            Some(path) => format!(
                "Path found: {} points, {} steps, cost {}",
                path.len(),
                path.steps(),
                path.cost()
            ),
            None => "No path found!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        let mut argv = vec!["pathfind"];
        argv.extend_from_slice(args);
        Config::parse_from(argv)
    }

    #[test]
    fn defaults() {
        let c = config(&[]);
        assert_eq!((c.width, c.height), (20, 12));
        assert_eq!(c.end_index(), 239);
        assert!(!c.legacy_index);
    }

    #[test]
    fn open_run_renders_straight_path() {
        let c = config(&[
            "--width", "5", "--height", "1", "--blocked-pct", "0", "--seed", "1",
        ]);
        let s = Scenario::run(&c).unwrap();
        assert_eq!(s.render(), "S***G\n");
        assert!(s.summary().starts_with("Path found: 5 points"));
    }

    #[test]
    fn fully_blocked_run_has_no_path() {
        let c = config(&[
            "--width", "4", "--height", "4", "--blocked-pct", "100", "--seed", "1",
        ]);
        let s = Scenario::run(&c).unwrap();
        assert!(s.path.is_none());
        assert_eq!(s.summary(), "No path found!");
        // Start is the bottom-left cell, goal the top-right.
        assert_eq!(s.render(), "###G\n####\n####\nS###\n");
    }

    #[test]
    fn bad_index_is_an_error() {
        let c = config(&["--width", "3", "--height", "3", "--end", "9", "--seed", "1"]);
        assert!(Scenario::run(&c).is_err());
    }
}
