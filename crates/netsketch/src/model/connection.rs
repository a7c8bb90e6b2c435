use netsketch_core::identifier::{ConnectionId, NodeId};

/// Label given to connections that are created without one.
pub const DEFAULT_CONNECTION_LABEL: &str = "Connection";

/// A directed, labeled link between two nodes.
///
/// Endpoints are stored by id and are not guaranteed to resolve; consumers
/// skip connections whose endpoints are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    id: ConnectionId,
    from: NodeId,
    to: NodeId,
    label: String,
}

impl Connection {
    pub(crate) fn new(id: ConnectionId, from: NodeId, to: NodeId, label: String) -> Self {
        Self {
            id,
            from,
            to,
            label,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Source node.
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// Target node.
    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }
}
