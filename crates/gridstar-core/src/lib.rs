//! **gridstar-core** — Weighted-terrain grid for A* pathfinding (core types).
//!
//! This crate provides the foundational types used across the *gridstar*
//! workspace: geometry primitives, terrain-tagged nodes, and the indexed
//! grid that owns them.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::GridError;
pub use geom::{Point, Range, manhattan};
pub use grid::{Grid, IndexMode};
pub use node::{BLOCKED, Node, OPEN};
