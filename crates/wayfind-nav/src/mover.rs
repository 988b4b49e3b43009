use tracing::debug;
use wayfind_core::{Action, ActionStatus, TickContext};

use crate::error::PathError;
use crate::grid::Cell;
use crate::math::Vec2;
use crate::navigator::NavPath;
use crate::world::{NavWorldMut, NavWorldView};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pacing for path consumption.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoverConfig {
    /// Seconds between cell steps.
    pub step_interval: f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            step_interval: 0.25,
        }
    }
}

/// Walk lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverState {
    Idle,
    Moving,
}

/// What a move request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDecision {
    /// A new walk started; any walk in progress was cancelled first.
    Started,
    /// The request matched the walk in progress (or the walk that just
    /// finished at that destination); nothing changed.
    KeptCurrent,
    /// Start and goal share a cell; there is nothing to walk.
    AlreadyThere,
}

/// Tick-driven path consumer.
///
/// Walks a computed [`NavPath`] one cell per fixed interval, writing each
/// waypoint through [`NavWorldMut::set_position`]. New requests are
/// reconciled against the walk in progress: an identical route is ignored, a
/// different one cancels the pending steps and restarts from the agent's
/// actual position.
#[derive(Debug, Clone)]
pub struct Mover {
    config: MoverConfig,
    state: MoverState,
    path: Option<NavPath>,
    next_index: usize,
    elapsed: f32,
    finished_goal: Option<Cell>,
}

impl Default for Mover {
    fn default() -> Self {
        Self::new(MoverConfig::default())
    }
}

impl Mover {
    pub fn new(config: MoverConfig) -> Self {
        Self {
            config,
            state: MoverState::Idle,
            path: None,
            next_index: 0,
            elapsed: 0.0,
            finished_goal: None,
        }
    }

    pub fn state(&self) -> MoverState {
        self.state
    }

    pub fn config(&self) -> MoverConfig {
        self.config
    }

    /// The path currently being walked.
    pub fn path(&self) -> Option<&NavPath> {
        self.path.as_ref()
    }

    /// Ask the mover to walk `agent` to `goal`.
    ///
    /// Errors leave the mover untouched: an in-progress walk keeps walking
    /// and an idle mover stays idle. A request that matches the unconsumed
    /// remainder of the current walk (or the destination a finished walk
    /// already reached) is ignored rather than recomputed.
    pub fn request_move<W>(
        &mut self,
        world: &W,
        agent: W::Agent,
        goal: Vec2,
    ) -> Result<MoveDecision, PathError>
    where
        W: NavWorldView,
    {
        let goal_cell = world
            .navigator()
            .cell_at(goal)
            .ok_or(PathError::OutOfBounds)?;

        if self.state == MoverState::Idle && self.finished_goal == Some(goal_cell) {
            return Ok(MoveDecision::KeptCurrent);
        }

        let from = world.position(agent).ok_or(PathError::OutOfBounds)?;
        let path = world.navigator().find_path(from, goal)?;

        if path.is_empty() {
            self.reset_walk();
            self.finished_goal = Some(goal_cell);
            return Ok(MoveDecision::AlreadyThere);
        }

        if self.state == MoverState::Moving {
            if let Some(current) = &self.path {
                if &current.cells()[self.next_index..] == path.cells() {
                    return Ok(MoveDecision::KeptCurrent);
                }
            }
        }

        debug!(goal = ?goal_cell, steps = path.len(), "walk started");
        self.path = Some(path);
        self.next_index = 0;
        self.elapsed = 0.0;
        self.state = MoverState::Moving;
        self.finished_goal = None;
        Ok(MoveDecision::Started)
    }

    /// Advance the walk by one frame.
    ///
    /// Accumulates `dt_seconds` and consumes one cell per full
    /// `step_interval`, so a large frame can cover several steps. Returns
    /// [`ActionStatus::Running`] while cells remain and
    /// [`ActionStatus::Success`] once the walk is finished (or when idle).
    pub fn tick<W>(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> ActionStatus
    where
        W: NavWorldMut,
    {
        if self.state != MoverState::Moving {
            return ActionStatus::Success;
        }

        self.elapsed += ctx.dt_seconds.max(0.0);
        while self.elapsed >= self.config.step_interval {
            self.elapsed -= self.config.step_interval;
            match self.step(agent, world) {
                ActionStatus::Running => {}
                done => return done,
            }
        }
        ActionStatus::Running
    }

    /// Abandon the walk in progress. Pending steps never run afterwards.
    pub fn cancel(&mut self) {
        if self.state == MoverState::Moving {
            debug!("walk cancelled");
        }
        self.reset_walk();
    }

    fn step<W>(&mut self, agent: W::Agent, world: &mut W) -> ActionStatus
    where
        W: NavWorldMut,
    {
        let Some(path) = &self.path else {
            self.state = MoverState::Idle;
            return ActionStatus::Failure;
        };

        let point = path.points()[self.next_index];
        let last = self.next_index + 1 == path.len();
        let goal = path.goal();

        world.set_position(agent, point);
        self.next_index += 1;

        if last {
            self.finished_goal = goal;
            self.reset_walk();
            return ActionStatus::Success;
        }
        ActionStatus::Running
    }

    fn reset_walk(&mut self) {
        self.path = None;
        self.next_index = 0;
        self.elapsed = 0.0;
        self.state = MoverState::Idle;
    }
}

impl<W> Action<W> for Mover
where
    W: NavWorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> ActionStatus {
        Mover::tick(self, ctx, agent, world)
    }

    fn cancel(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &mut W) {
        Mover::cancel(self);
    }
}
