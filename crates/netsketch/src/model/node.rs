use netsketch_core::{geometry::Point, identifier::NodeId, node_kind::NodeKind};

/// Descriptive data attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMetadata {
    pub ip: String,
    pub networks: Vec<String>,
    pub services: Vec<String>,
    /// Reserved for interface descriptors; nothing populates it yet.
    pub interfaces: Vec<String>,
}

/// A placed network element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    position: Point,
    label: String,
    metadata: NodeMetadata,
}

impl Node {
    pub(crate) fn new(id: NodeId, kind: NodeKind, position: Point, label: String) -> Self {
        Self {
            id,
            kind,
            position,
            label,
            metadata: NodeMetadata::default(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Center of the node in canvas coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn metadata(&self) -> &NodeMetadata {
        &self.metadata
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub(crate) fn apply(&mut self, field: NodeField) {
        match field {
            NodeField::Label(label) => self.label = label,
            NodeField::Ip(ip) => self.metadata.ip = ip,
            NodeField::Networks(networks) => self.metadata.networks = networks,
            NodeField::Services(services) => self.metadata.services = services,
        }
    }
}

/// An editable property of a node together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeField {
    Label(String),
    Ip(String),
    Networks(Vec<String>),
    Services(Vec<String>),
}
