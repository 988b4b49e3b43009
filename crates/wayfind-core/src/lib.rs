//! Deterministic, engine-agnostic agent primitives.
//!
//! This crate defines the small vocabulary shared by navigation subsystems
//! and the loops that drive them: a [`TickContext`] describing one frame of
//! simulated time, stable [`AgentId`]s, the [`WorldView`]/[`WorldMut`] access
//! split, and the [`Action`] behavior seam.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod agent;
pub mod tick;
pub mod world;

pub use action::{Action, ActionOutcome, ActionStatus};
pub use agent::AgentId;
pub use tick::TickContext;
pub use world::{WorldMut, WorldView};
