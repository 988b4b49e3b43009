#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One frame of simulated time.
///
/// `tick` increases monotonically; `dt_seconds` is the real-time span covered
/// by this frame. Everything downstream is driven by these two values, so a
/// recorded sequence of contexts replays a simulation exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self { tick, dt_seconds }
    }
}
