use crate::AgentId;

/// Read-only world access.
///
/// This crate does not prescribe which queries a world must expose; each
/// subsystem (navigation, perception, ...) defines an extension trait with
/// the queries it needs.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
