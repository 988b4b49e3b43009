use wayfind_core::{WorldMut, WorldView};

use crate::{Navigator, Vec2};

/// Navigation queries an agent world must answer.
pub trait NavWorldView: WorldView {
    /// Current world-space position of `agent`, if it has one.
    fn position(&self, agent: Self::Agent) -> Option<Vec2>;

    /// The navigator that resolves cells and computes paths for this world.
    fn navigator(&self) -> &dyn Navigator;
}

/// Navigation effects. Writing an agent's position is the only externally
/// observable effect of walking a path.
pub trait NavWorldMut: WorldMut + NavWorldView {
    fn set_position(&mut self, agent: Self::Agent, position: Vec2);
}
