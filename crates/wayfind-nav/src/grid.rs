use tracing::debug;

use crate::astar::astar_path;
use crate::error::PathError;
use crate::math::Vec2;
use crate::navigator::{NavPath, Navigator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinates of one grid square.
///
/// A cell is a pure coordinate pair: per-search state (costs, predecessor
/// links) never lives here, so cells stay valid across any number of
/// searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Contract between the pathfinder and the grid that backs it.
///
/// The search touches the grid only through this trait, so any map
/// representation that can resolve cells and enumerate neighbors can be
/// searched.
pub trait GridSource {
    /// Resolve a world position to the cell containing it.
    fn world_to_cell(&self, world: Vec2) -> Option<Cell>;

    /// World position at the center of `cell`.
    fn cell_center(&self, cell: Cell) -> Vec2;

    /// Whether `cell` is impassable. Positions outside the grid read as
    /// blocked.
    fn blocked(&self, cell: Cell) -> bool;

    /// Append the cells adjacent to `cell` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling. Blocked and out-of-bounds
    /// cells may be included; the search filters them via [`Self::blocked`].
    fn neighbors(&self, cell: Cell, buf: &mut Vec<Cell>);
}

/// Uniform 2D grid of walkable/blocked square cells.
///
/// `blocked == true` means impassable.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavGrid {
    width: i32,
    height: i32,
    cell_size: f32,
    blocked: Vec<bool>,
}

impl NavGrid {
    pub fn new(width: u32, height: u32, cell_size: f32) -> Self {
        assert!(width > 0 && height > 0, "grid must be non-empty");
        assert!(cell_size > 0.0, "cell_size must be > 0");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            cell_size,
            blocked: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn set_blocked(&mut self, x: i32, y: i32, blocked: bool) {
        if let Some(idx) = self.idx(Cell::new(x, y)) {
            self.blocked[idx] = blocked;
        }
    }

    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        GridSource::blocked(self, Cell::new(x, y))
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.width + cell.x) as usize)
    }
}

impl GridSource for NavGrid {
    fn world_to_cell(&self, world: Vec2) -> Option<Cell> {
        let x = (world.x / self.cell_size).floor() as i32;
        let y = (world.y / self.cell_size).floor() as i32;
        let cell = Cell::new(x, y);
        if self.in_bounds(cell) {
            Some(cell)
        } else {
            None
        }
    }

    fn cell_center(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            (cell.x as f32 + 0.5) * self.cell_size,
            (cell.y as f32 + 0.5) * self.cell_size,
        )
    }

    fn blocked(&self, cell: Cell) -> bool {
        self.idx(cell).map(|idx| self.blocked[idx]).unwrap_or(true)
    }

    fn neighbors(&self, cell: Cell, buf: &mut Vec<Cell>) {
        // Fixed order for determinism: N, E, S, W.
        buf.extend_from_slice(&[
            Cell::new(cell.x, cell.y - 1),
            Cell::new(cell.x + 1, cell.y),
            Cell::new(cell.x, cell.y + 1),
            Cell::new(cell.x - 1, cell.y),
        ]);
    }
}

impl Navigator for NavGrid {
    fn find_path(&self, start: Vec2, goal: Vec2) -> Result<NavPath, PathError> {
        let start_cell = self.world_to_cell(start).ok_or(PathError::OutOfBounds)?;
        let goal_cell = self.world_to_cell(goal).ok_or(PathError::OutOfBounds)?;

        let Some(cells) = astar_path(self, start_cell, goal_cell) else {
            debug!(start = ?start_cell, goal = ?goal_cell, "no walkable route");
            return Err(PathError::NoPathExists);
        };

        let points = cells.iter().map(|&c| self.cell_center(c)).collect();
        Ok(NavPath::new(cells, points))
    }

    fn cell_at(&self, point: Vec2) -> Option<Cell> {
        self.world_to_cell(point)
    }
}
