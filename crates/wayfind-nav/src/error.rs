use thiserror::Error;

/// Failure modes of a path query.
///
/// Both are ordinary, recoverable outcomes a caller is expected to handle
/// (ignore a click outside the map, signal "can't get there"); nothing in
/// this crate panics on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The start or goal position does not resolve to a grid cell.
    #[error("position outside the navigable grid")]
    OutOfBounds,
    /// Start and goal are on the grid, but no walkable route connects them.
    #[error("no walkable route between start and goal")]
    NoPathExists,
}
