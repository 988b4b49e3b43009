use crate::{TickContext, WorldMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of ticking an [`Action`] once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionStatus {
    Running,
    Success,
    Failure,
}

/// Terminal result of a finished [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionOutcome {
    Success,
    Failure,
}

impl From<ActionOutcome> for ActionStatus {
    fn from(value: ActionOutcome) -> Self {
        match value {
            ActionOutcome::Success => ActionStatus::Success,
            ActionOutcome::Failure => ActionStatus::Failure,
        }
    }
}

impl ActionStatus {
    pub fn outcome(self) -> Option<ActionOutcome> {
        match self {
            ActionStatus::Running => None,
            ActionStatus::Success => Some(ActionOutcome::Success),
            ActionStatus::Failure => Some(ActionOutcome::Failure),
        }
    }
}

/// A long-running agent behavior driven one tick at a time.
///
/// Returning [`ActionStatus::Running`] keeps the behavior alive for the next
/// tick. After a terminal status, the driver must not tick it again.
pub trait Action<W>: 'static
where
    W: WorldMut + 'static,
{
    fn tick(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> ActionStatus;

    /// Called when the behavior is superseded before finishing.
    ///
    /// No `tick` call follows a cancel; implementations must leave the world
    /// in a consistent state.
    fn cancel(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &mut W) {}
}
