//! Applying relation scripts to a diagram model.
//!
//! Each relation creates its missing endpoint nodes and one connection.
//! New nodes are laid out in two columns: sources at x = 100, targets at
//! x = 300, one row further down for every node created by the import.

use std::collections::HashMap;

use log::{debug, info};

use netsketch_core::{geometry::Point, identifier::NodeId, node_kind::NodeKind};
use netsketch_parser::{Relation, error::ParseError, relations};

use crate::{
    error::NetsketchError,
    model::{DEFAULT_CONNECTION_LABEL, DiagramModel},
};

const SOURCE_COLUMN_X: f32 = 100.0;
const TARGET_COLUMN_X: f32 = 300.0;
const FIRST_ROW_Y: f32 = 100.0;
const ROW_STEP: f32 = 100.0;

/// What an import did to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Relation lines that were applied.
    pub relations: usize,
    pub nodes_created: usize,
    pub connections_created: usize,
    /// Relations dropped because both labels named the same node.
    pub self_loops_skipped: usize,
}

/// Per-invocation state of one import.
struct Import<'m, 's> {
    model: &'m mut DiagramModel,
    nodes: HashMap<&'s str, NodeId>,
    next_y: f32,
    summary: ImportSummary,
}

impl<'m, 's> Import<'m, 's> {
    fn new(model: &'m mut DiagramModel) -> Self {
        Self {
            model,
            nodes: HashMap::new(),
            next_y: FIRST_ROW_Y,
            summary: ImportSummary::default(),
        }
    }

    /// Returns the node for `label`, creating it in `column_x` when new.
    fn node_for(&mut self, label: &'s str, column_x: f32) -> NodeId {
        if let Some(id) = self.nodes.get(label) {
            return *id;
        }

        let position = Point::new(column_x, self.next_y);
        let id = self
            .model
            .add_node(NodeKind::Server, position, Some(label.to_string()))
            .id();
        self.next_y += ROW_STEP;
        self.summary.nodes_created += 1;
        self.nodes.insert(label, id);
        id
    }

    fn apply(&mut self, relation: &Relation<'s>) {
        let from = self.node_for(relation.from, SOURCE_COLUMN_X);
        let to = self.node_for(relation.to, TARGET_COLUMN_X);

        match self.model.add_connection(from, to, DEFAULT_CONNECTION_LABEL) {
            Ok(_) => self.summary.connections_created += 1,
            Err(err) => {
                debug!(line = relation.line, err:err; "Relation skipped");
                self.summary.self_loops_skipped += 1;
            }
        }
        if let Some(warning) = relation.ignored_text_warning() {
            debug!(line = relation.line, warning:% = warning; "Trailing text ignored");
        }
        self.summary.relations += 1;
    }
}

/// Applies every relation of `source` to `model`.
///
/// Relations are applied in order. The import stops at the first malformed
/// line; mutations made by earlier lines stay in the model.
///
/// # Errors
///
/// Returns [`NetsketchError::Import`] carrying the diagnostic, the script,
/// and a summary of what was applied before the failure.
///
/// # Examples
///
/// ```
/// use netsketch::{import::import_script, model::DiagramModel};
///
/// let mut model = DiagramModel::default();
/// let summary = import_script(&mut model, "A -> B\nB -> C\nA -> A").unwrap();
///
/// assert_eq!(summary.nodes_created, 3);
/// assert_eq!(summary.connections_created, 2);
/// assert_eq!(model.node_count(), 3);
/// ```
pub fn import_script(
    model: &mut DiagramModel,
    source: &str,
) -> Result<ImportSummary, NetsketchError> {
    info!(bytes = source.len(); "Importing relations");
    let mut import = Import::new(model);

    for item in relations(source) {
        match item {
            Ok(relation) => import.apply(&relation),
            Err(diag) => {
                let applied = import.summary;
                info!(
                    relations = applied.relations,
                    nodes = applied.nodes_created;
                    "Import stopped at malformed line"
                );
                return Err(NetsketchError::new_import_error(
                    ParseError::from(diag),
                    source,
                    applied,
                ));
            }
        }
    }

    let summary = import.summary;
    info!(
        relations = summary.relations,
        nodes = summary.nodes_created,
        connections = summary.connections_created;
        "Import finished"
    );
    Ok(summary)
}
