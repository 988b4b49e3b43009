//! Grid navigation: A* pathfinding and tick-driven path following.
//!
//! Two collaborating pieces form the core:
//!
//! - a grid ([`NavGrid`], or anything implementing [`GridSource`]) that maps
//!   world positions to cells and enumerates their neighbors, and
//! - a pathfinder ([`astar_path`], surfaced through [`Navigator::find_path`])
//!   that computes the lowest-cost walkable route between two cells.
//!
//! On top of them, [`Mover`] walks a computed [`NavPath`] one cell per fixed
//! interval, ignores requests that match the walk in progress, and cleanly
//! cancels and restarts when a genuinely new destination arrives.
//!
//! Searches leave the grid untouched: all per-search state lives in scratch
//! buffers scoped to the call, so a grid can be shared freely between
//! queries.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod astar;
pub mod error;
pub mod grid;
pub mod math;
pub mod mover;
pub mod navigator;
pub mod world;

pub use astar::{astar_path, manhattan};
pub use error::PathError;
pub use grid::{Cell, GridSource, NavGrid};
pub use math::Vec2;
pub use mover::{MoveDecision, Mover, MoverConfig, MoverState};
pub use navigator::{NavPath, Navigator};
pub use world::{NavWorldMut, NavWorldView};
