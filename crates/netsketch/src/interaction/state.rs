use serde::{Deserialize, Serialize};

use netsketch_core::{
    identifier::{ConnectionId, NodeId, SegmentId},
    resize::ResizeHandle,
};

/// The spatial interaction in progress. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum InteractionState {
    #[default]
    Idle,
    /// A node follows the pointer.
    DraggingNode { node: NodeId },
    /// The first endpoint of a new connection has been picked.
    ConnectingFrom { node: NodeId },
    /// A segment corner follows the pointer.
    ResizingSegment {
        segment: SegmentId,
        handle: ResizeHandle,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Node picked as connection source, if a connection is being drawn.
    pub fn connecting_from(&self) -> Option<NodeId> {
        match self {
            Self::ConnectingFrom { node } => Some(*node),
            _ => None,
        }
    }
}

/// The currently selected entity. At most one entity is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    #[default]
    None,
    Node(NodeId),
    Connection(ConnectionId),
    Segment(SegmentId),
}

impl Selection {
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(*id),
            _ => None,
        }
    }

    pub fn connection(&self) -> Option<ConnectionId> {
        match self {
            Self::Connection(id) => Some(*id),
            _ => None,
        }
    }

    pub fn segment(&self) -> Option<SegmentId> {
        match self {
            Self::Segment(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
