use serde::{Deserialize, Serialize};

use netsketch_core::{
    geometry::Point,
    identifier::{ConnectionId, NodeId, SegmentId},
    resize::ResizeHandle,
};

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true };
}

/// A raw input event forwarded by the host.
///
/// Pointer positions are absolute screen coordinates; the controller
/// translates them into canvas coordinates. Each targeted event is delivered
/// once for the entity under the pointer; background clicks are only sent
/// for the empty canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InputEvent {
    /// A palette entry started being dragged. `kind` is a node kind token.
    PaletteDragStart { kind: String },
    /// A palette drag was released over the canvas.
    Drop { screen: Point },
    NodePointerDown {
        node: NodeId,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove { screen: Point },
    PointerUp,
    BackgroundClick,
    ConnectionClick { connection: ConnectionId },
    SegmentClick { segment: SegmentId },
    HandlePointerDown {
        segment: SegmentId,
        handle: ResizeHandle,
    },
}

/// Whether the host should keep delivering an event to enclosing targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Propagation {
    Continue,
    Stop,
}

/// A property edit from the host's properties panel.
///
/// Edits apply to the current selection. Multi-line values for networks and
/// services hold one entry per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "kebab-case")]
pub enum PropertyEdit {
    NodeLabel(String),
    NodeIp(String),
    NodeNetworks(String),
    NodeServices(String),
    ConnectionLabel(String),
    SegmentLabel(String),
}
