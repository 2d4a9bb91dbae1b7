use std::fmt;

use gridstar_core::GridError;

/// Errors returned by [`Pathfinder`](crate::Pathfinder).
///
/// Not finding a route is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The grid or the start/goal references violate a precondition.
    Grid(GridError),
    /// The expansion budget ran out before the search finished.
    Interrupted { expanded: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "search precondition violated: {e}"),
            Self::Interrupted { expanded } => {
                write!(f, "search interrupted after {expanded} expansions")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Interrupted { .. } => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
