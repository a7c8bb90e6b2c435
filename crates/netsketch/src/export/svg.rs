//! Standalone SVG snapshots of a diagram.

mod layer;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Definitions, Line, Marker, Polygon, Rectangle, Style, Text},
};

use netsketch_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    resize::connection_label_anchor,
};

use crate::{
    config::AppConfig,
    export,
    model::{Connection, DiagramModel, Node, Segment},
};

/// File name offered for exported diagrams.
pub const DEFAULT_FILE_NAME: &str = "network-diagram.svg";

/// Media type of exported diagrams.
pub const MIME_TYPE: &str = "image/svg+xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const ARROWHEAD_ID: &str = "arrowhead";

/// Edge length of the box drawn around a node.
const NODE_BOX_SIZE: f32 = 70.0;
const NODE_LABEL_OFFSET: f32 = 50.0;
const NODE_IP_OFFSET: f32 = 65.0;
const SEGMENT_LABEL_INSET: Point = Point::new(10.0, 25.0);
const CORNER_RADIUS: f32 = 10.0;

const NODE_STROKE_OPACITY: f32 = 0.5;
const CONNECTION_OPACITY: f32 = 0.6;
const SEGMENT_STROKE_OPACITY: f32 = 0.3;
const SEGMENT_LABEL_OPACITY: f32 = 0.8;

/// Resolved visual settings for one export.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    size: Size,
    accent: Color,
    background: Option<Color>,
}

impl SvgStyle {
    /// Reads the export viewport and colors from `config`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the invalid color setting.
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        Ok(Self {
            size: Size::new(
                config.export().width() as f32,
                config.export().height() as f32,
            ),
            accent: config.style().accent_color()?,
            background: config.style().background_color()?,
        })
    }

    /// Returns the viewport size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Builds the embedded stylesheet from the accent color.
    ///
    /// Colors are written opaque; transparency goes into `*-opacity`
    /// properties scaled by the accent's own alpha.
    fn stylesheet(&self) -> String {
        let accent = self.accent.to_hex();
        let alpha = self.accent.alpha();
        let opacity = |factor: f32| alpha * factor;

        format!(
            "
    .node-rect {{ fill: #141414; fill-opacity: 0.8; stroke: {accent}; stroke-opacity: {node}; stroke-width: 2; }}
    .node-icon {{ fill: {accent}; fill-opacity: {alpha}; font-size: 28px; text-anchor: middle; dominant-baseline: central; }}
    .connection-line {{ stroke: {accent}; stroke-opacity: {line}; stroke-width: 2; fill: none; }}
    .connection-label {{ fill: {accent}; fill-opacity: {alpha}; font-size: 12px; text-anchor: middle; }}
    .segment-rect {{ fill: none; stroke-width: 2; stroke-dasharray: 5,5; }}
    .segment-label {{ fill: {accent}; fill-opacity: {label}; font-size: 14px; font-weight: 600; }}
    .node-label {{ fill: #ffffff; font-size: 14px; text-anchor: middle; }}
    .node-ip {{ fill: #999999; font-size: 11px; text-anchor: middle; }}
  ",
            node = opacity(NODE_STROKE_OPACITY),
            line = opacity(CONNECTION_OPACITY),
            label = opacity(SEGMENT_LABEL_OPACITY),
        )
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            size: Size::new(1920.0, 1080.0),
            accent: Color::accent(),
            background: None,
        }
    }
}

/// SVG exporter writing to `file_name`.
#[derive(Debug, Clone)]
pub struct Svg {
    file_name: String,
    style: SvgStyle,
}

impl Svg {
    pub fn new(file_name: &str, style: SvgStyle) -> Self {
        Self {
            file_name: file_name.to_string(),
            style,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Renders `model` into an SVG document.
    ///
    /// Selection and interaction state never affect the output. Connections
    /// with a missing endpoint are skipped.
    pub fn render_document(&self, model: &DiagramModel) -> Document {
        let size = self.style.size;
        let mut output = LayeredOutput::new();

        if let Some(background) = &self.style.background {
            output.add_to_layer(
                RenderLayer::Background,
                Rectangle::new()
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", background)
                    .set("fill-opacity", background.alpha()),
            );
        }

        for segment in model.segments() {
            self.render_segment(&mut output, segment);
        }

        let mut skipped = 0;
        for connection in model.connections() {
            match model.resolve_connection(connection.id()) {
                Some((from, to)) => self.render_connection(&mut output, connection, from, to),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!(skipped = skipped; "Dangling connections left out of export");
        }

        for node in model.nodes() {
            self.render_node(&mut output, node);
        }

        self.check_viewport(model);

        let mut doc = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0.0, 0.0, size.width(), size.height()))
            .add(Style::new(self.style.stylesheet()))
            .add(self.marker_definitions());

        for node in output.render() {
            doc = doc.add(node);
        }
        doc
    }

    /// Renders `model` to the text of a standalone SVG file.
    pub fn render_string(&self, model: &DiagramModel) -> String {
        let doc = self.render_document(model);
        format!("{XML_DECLARATION}\n{doc}\n")
    }

    fn marker_definitions(&self) -> Definitions {
        let arrowhead = Marker::new()
            .set("id", ARROWHEAD_ID)
            .set("markerWidth", 10)
            .set("markerHeight", 7)
            .set("refX", 9)
            .set("refY", 3.5)
            .set("orient", "auto")
            .add(
                Polygon::new()
                    .set("points", "0 0, 10 3.5, 0 7")
                    .set("fill", &self.style.accent)
                    .set("fill-opacity", self.style.accent.alpha()),
            );
        Definitions::new().add(arrowhead)
    }

    /// Draws a segment outline in the segment's own color.
    fn render_segment(&self, output: &mut LayeredOutput, segment: &Segment) {
        let bounds = segment.bounds();
        let color = segment.color();
        output.add_to_layer(
            RenderLayer::Segment,
            Rectangle::new()
                .set("data-id", segment.id().to_string())
                .set("class", "segment-rect")
                .set("stroke", &color)
                .set("stroke-opacity", color.alpha() * SEGMENT_STROKE_OPACITY)
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("rx", CORNER_RADIUS),
        );

        let anchor = bounds.min_point().add_point(SEGMENT_LABEL_INSET);
        output.add_to_layer(
            RenderLayer::Text,
            Text::new(segment.label())
                .set("class", "segment-label")
                .set("x", anchor.x())
                .set("y", anchor.y()),
        );
    }

    fn render_connection(
        &self,
        output: &mut LayeredOutput,
        connection: &Connection,
        from: &Node,
        to: &Node,
    ) {
        let start = from.position();
        let end = to.position();
        output.add_to_layer(
            RenderLayer::Connection,
            Line::new()
                .set("data-id", connection.id().to_string())
                .set("class", "connection-line")
                .set("x1", start.x())
                .set("y1", start.y())
                .set("x2", end.x())
                .set("y2", end.y())
                .set("marker-end", format!("url(#{ARROWHEAD_ID})")),
        );

        let anchor = connection_label_anchor(start, end);
        output.add_to_layer(
            RenderLayer::Text,
            Text::new(connection.label())
                .set("class", "connection-label")
                .set("x", anchor.x())
                .set("y", anchor.y()),
        );
    }

    fn render_node(&self, output: &mut LayeredOutput, node: &Node) {
        let center = node.position();
        let frame = Bounds::new_from_center(center, Size::new(NODE_BOX_SIZE, NODE_BOX_SIZE));

        output.add_to_layer(
            RenderLayer::Node,
            Rectangle::new()
                .set("data-id", node.id().to_string())
                .set("class", "node-rect")
                .set("x", frame.min_x())
                .set("y", frame.min_y())
                .set("width", frame.width())
                .set("height", frame.height())
                .set("rx", CORNER_RADIUS),
        );
        output.add_to_layer(
            RenderLayer::Node,
            Text::new(node.kind().descriptor().glyph)
                .set("class", "node-icon")
                .set("x", center.x())
                .set("y", center.y()),
        );

        output.add_to_layer(
            RenderLayer::Text,
            Text::new(node.label())
                .set("class", "node-label")
                .set("x", center.x())
                .set("y", center.y() + NODE_LABEL_OFFSET),
        );

        let ip = &node.metadata().ip;
        if !ip.is_empty() {
            output.add_to_layer(
                RenderLayer::Text,
                Text::new(ip.as_str())
                    .set("class", "node-ip")
                    .set("x", center.x())
                    .set("y", center.y() + NODE_IP_OFFSET),
            );
        }
    }

    /// Logs when drawn content reaches outside the fixed viewport.
    fn check_viewport(&self, model: &DiagramModel) {
        let node_size = Size::new(NODE_BOX_SIZE, NODE_BOX_SIZE);
        let content = model
            .nodes()
            .map(|node| Bounds::new_from_center(node.position(), node_size))
            .chain(model.segments().map(Segment::bounds))
            .reduce(|acc, bounds| acc.merge(&bounds));

        let Some(content) = content else {
            return;
        };
        let size = self.style.size;
        if content.min_x() < 0.0
            || content.min_y() < 0.0
            || content.max_x() > size.width()
            || content.max_y() > size.height()
        {
            debug!(content:? = content, viewport:? = size; "Content extends past the viewport");
        }
    }

    /// Writes an SVG document to the configured file.
    pub fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let mut f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{XML_DECLARATION}\n{doc}\n") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export(&self, model: &DiagramModel) -> Result<(), export::Error> {
        let doc = self.render_document(model);
        debug!("SVG document rendered");

        self.write_document(doc)
    }
}
