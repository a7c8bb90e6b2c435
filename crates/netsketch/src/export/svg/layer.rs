//! Z-ordered collection of SVG elements.
//!
//! Elements are added in any order and tagged with a [`RenderLayer`]. When
//! rendered, each non-empty layer becomes one `<g data-layer="...">` group,
//! groups ordered bottom to top.

use svg::node::element::Group;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers of an exported diagram.
///
/// The `Ord` derive uses declaration order: the first variant renders first
/// (bottom), the last renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Optional document background fill
    Background,
    /// Segment outlines
    Segment,
    /// Connection lines with arrowheads
    Connection,
    /// Node boxes and kind glyphs
    Node,
    /// Labels and IP addresses
    Text,
}

impl RenderLayer {
    /// Returns the value of the group's `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Segment => "segment",
            Self::Connection => "connection",
            Self::Node => "node",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to `layer`. Nodes keep insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: impl Into<SvgNode>) {
        self.items.push((layer, node.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Empty layers produce no group.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: insertion order survives within a layer.
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);
                current_layer = layer;
                current_group = Group::new().set("data-layer", layer.name());
            }
            current_group = current_group.add(node);
        }
        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
