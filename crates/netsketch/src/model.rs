//! The diagram model: nodes, connections and segments.
//!
//! [`DiagramModel`] exclusively owns all entities in insertion order. Outside
//! code refers to entities by id only. Entities are never deleted one by one;
//! [`DiagramModel::clear_all`] empties the whole model.
//!
//! Update operations are total: an unknown id leaves the model untouched and
//! the operation returns `false`.

mod connection;
mod node;
mod segment;

pub use connection::{Connection, DEFAULT_CONNECTION_LABEL};
pub use node::{Node, NodeField, NodeMetadata};
pub use segment::{DEFAULT_SEGMENT_ORIGIN, DEFAULT_SEGMENT_SIZE, Segment};

use indexmap::IndexMap;
use log::{debug, trace};

use netsketch_core::{
    geometry::{Bounds, Point},
    identifier::{ConnectionId, Id, IdGenerator, NodeId, SegmentId, SequentialIds},
    node_kind::NodeKind,
};

use crate::error::ModelError;

/// Owner of every entity in a diagram.
///
/// # Examples
///
/// ```
/// use netsketch::model::DiagramModel;
/// use netsketch::geometry::Point;
/// use netsketch::node_kind::NodeKind;
///
/// let mut model = DiagramModel::default();
/// let web = model.add_node(NodeKind::Server, Point::new(100.0, 100.0), None).id();
/// let edge = model.add_node(NodeKind::Router, Point::new(300.0, 100.0), None).id();
///
/// assert_eq!(model.node(web).unwrap().label(), "server-1");
/// assert_eq!(model.node(edge).unwrap().label(), "router-2");
///
/// model.add_connection(edge, web, "uplink").unwrap();
/// assert!(model.add_connection(web, web, "loop").is_err());
/// assert_eq!(model.connections().count(), 1);
/// ```
#[derive(Debug)]
pub struct DiagramModel {
    nodes: IndexMap<NodeId, Node>,
    connections: IndexMap<ConnectionId, Connection>,
    segments: IndexMap<SegmentId, Segment>,
    ids: Box<dyn IdGenerator>,
}

impl Default for DiagramModel {
    fn default() -> Self {
        Self::with_id_generator(SequentialIds::default())
    }
}

impl DiagramModel {
    /// Creates an empty model that draws ids from `ids`.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            nodes: IndexMap::new(),
            connections: IndexMap::new(),
            segments: IndexMap::new(),
            ids: Box::new(ids),
        }
    }

    fn next_id<T>(&mut self) -> Id<T> {
        Id::from_raw(self.ids.next_raw())
    }

    /// Creates a node and returns it.
    ///
    /// Without an explicit label the node is named `"{kind}-{n}"`, where `n`
    /// is the node count after insertion.
    pub fn add_node(&mut self, kind: NodeKind, position: Point, label: Option<String>) -> &Node {
        let id: NodeId = self.next_id();
        let label = label.unwrap_or_else(|| format!("{}-{}", kind.token(), self.nodes.len() + 1));
        debug!(id:% = id, kind:% = kind, label = label.as_str(); "Node added");

        self.nodes
            .entry(id)
            .or_insert(Node::new(id, kind, position, label))
    }

    /// Creates a connection from `from` to `to`.
    ///
    /// Endpoints are not checked against existing nodes.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SelfLoop`] without touching the model when
    /// `from == to`.
    pub fn add_connection(
        &mut self,
        from: NodeId,
        to: NodeId,
        label: impl Into<String>,
    ) -> Result<&Connection, ModelError> {
        if from == to {
            return Err(ModelError::SelfLoop { node: from });
        }

        let id: ConnectionId = self.next_id();
        debug!(id:% = id, from:% = from, to:% = to; "Connection added");

        let connection: &Connection = self
            .connections
            .entry(id)
            .or_insert(Connection::new(id, from, to, label.into()));
        Ok(connection)
    }

    /// Creates a segment with default geometry and returns it.
    pub fn add_segment(&mut self) -> &Segment {
        let id: SegmentId = self.next_id();
        let label = format!("Segment {}", self.segments.len() + 1);
        debug!(id:% = id, label = label.as_str(); "Segment added");

        self.segments.entry(id).or_insert(Segment::new(id, label))
    }

    /// Moves a node so that its center is at `position`.
    pub fn update_node_position(&mut self, id: NodeId, position: Point) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                trace!(id:% = id, position:? = position; "Node moved");
                node.set_position(position);
                true
            }
            None => {
                debug!(id:% = id; "Ignoring move of unknown node");
                false
            }
        }
    }

    /// Replaces one editable property of a node.
    pub fn update_node_field(&mut self, id: NodeId, field: NodeField) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                trace!(id:% = id, field:? = field; "Node field updated");
                node.apply(field);
                true
            }
            None => {
                debug!(id:% = id; "Ignoring edit of unknown node");
                false
            }
        }
    }

    pub fn update_connection_label(&mut self, id: ConnectionId, label: impl Into<String>) -> bool {
        match self.connections.get_mut(&id) {
            Some(connection) => {
                connection.set_label(label.into());
                true
            }
            None => {
                debug!(id:% = id; "Ignoring edit of unknown connection");
                false
            }
        }
    }

    /// Replaces the geometry of a segment.
    ///
    /// The top-left corner is taken as given; width and height are raised to
    /// the minimum extent when smaller.
    pub fn update_segment_geometry(&mut self, id: SegmentId, bounds: Bounds) -> bool {
        match self.segments.get_mut(&id) {
            Some(segment) => {
                trace!(id:% = id, bounds:? = bounds; "Segment geometry updated");
                segment.set_bounds(bounds);
                true
            }
            None => {
                debug!(id:% = id; "Ignoring resize of unknown segment");
                false
            }
        }
    }

    pub fn update_segment_label(&mut self, id: SegmentId, label: impl Into<String>) -> bool {
        match self.segments.get_mut(&id) {
            Some(segment) => {
                segment.set_label(label.into());
                true
            }
            None => {
                debug!(id:% = id; "Ignoring edit of unknown segment");
                false
            }
        }
    }

    /// Removes every entity. The id generator keeps counting.
    pub fn clear_all(&mut self) {
        debug!(
            nodes = self.nodes.len(),
            connections = self.connections.len(),
            segments = self.segments.len();
            "Clearing diagram"
        );
        self.nodes.clear();
        self.connections.clear();
        self.segments.clear();
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Connections in insertion order, including dangling ones.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Segments in insertion order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(&id)
    }

    /// Returns the source and target nodes of a connection, or `None` when
    /// the connection or either endpoint does not exist.
    pub fn resolve_connection(&self, id: ConnectionId) -> Option<(&Node, &Node)> {
        let connection = self.connections.get(&id)?;
        self.endpoints(connection)
    }

    /// Connections whose endpoints both resolve, with their nodes.
    pub fn resolved_connections(&self) -> impl Iterator<Item = (&Connection, &Node, &Node)> {
        self.connections.values().filter_map(|connection| {
            self.endpoints(connection)
                .map(|(from, to)| (connection, from, to))
        })
    }

    fn endpoints(&self, connection: &Connection) -> Option<(&Node, &Node)> {
        Some((
            self.nodes.get(&connection.from())?,
            self.nodes.get(&connection.to())?,
        ))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` when the model holds no entities.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty() && self.segments.is_empty()
    }
}
