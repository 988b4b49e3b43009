use crate::error::PathError;
use crate::grid::Cell;
use crate::math::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered route to walk: the cells strictly after the start cell up to
/// and including the goal cell, with their world-space waypoints.
///
/// Empty when start and goal share a cell. The sequence is read-only; a
/// fresh path is produced by every query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavPath {
    cells: Vec<Cell>,
    points: Vec<Vec2>,
}

impl NavPath {
    pub fn new(cells: Vec<Cell>, points: Vec<Vec2>) -> Self {
        debug_assert_eq!(cells.len(), points.len());
        Self { cells, points }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// The destination cell, when the path has one.
    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

/// Path queries over some navigable space.
pub trait Navigator {
    /// Compute the route from `start` to `goal`.
    ///
    /// The returned path excludes the start cell and includes the goal cell;
    /// it is empty when both resolve to the same cell. Repeated calls with
    /// the same grid and endpoints return identical paths.
    fn find_path(&self, start: Vec2, goal: Vec2) -> Result<NavPath, PathError>;

    /// Resolve a world position to the cell that contains it.
    fn cell_at(&self, point: Vec2) -> Option<Cell>;
}
