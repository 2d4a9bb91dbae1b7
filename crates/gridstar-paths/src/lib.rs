//! A* pathfinding over weighted-terrain grids.
//!
//! [`Pathfinder`] searches a [`Grid`](gridstar_core::Grid) between two cells
//! using 4-directional moves and an octile distance estimate, and returns the
//! route as an ordered [`Path`] of points.
//!
//! Search bookkeeping (costs, parent links, open/closed state) lives in a
//! table allocated for each call, so a grid is only ever borrowed immutably
//! and may be searched from several threads at once.
//!
//! ```
//! use gridstar_core::{Grid, Point, OPEN};
//! use gridstar_paths::Pathfinder;
//!
//! let grid = Grid::from_fn(Point::ZERO, Point::new(5, 5), |_| OPEN).unwrap();
//! let path = Pathfinder::new()
//!     .find_path(&grid, Point::new(0, 0), Point::new(4, 0))
//!     .unwrap()
//!     .expect("open grid");
//! assert_eq!(path.len(), 5);
//! ```

mod distance;
mod error;
mod neighbors;
mod path;
mod pathfinder;
mod table;

pub use distance::{DIAGONAL_COST, STRAIGHT_COST, octile, step_cost, terrain_weight};
pub use error::SearchError;
pub use gridstar_core::manhattan;
pub use neighbors::Neighbors;
pub use path::Path;
pub use pathfinder::{Pathfinder, SearchConfig};
