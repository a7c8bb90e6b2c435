//! Netsketch - an editing engine for network topology diagrams.
//!
//! A diagram is made of typed nodes, directed labeled connections between
//! them, and free-standing rectangular segments used to group parts of the
//! network visually. This crate owns the diagram model, the pointer-driven
//! interaction state machine, bulk import of `from -> to` scripts, and
//! export to standalone SVG. Rendering the live canvas is left to the host.

pub mod config;
pub mod export;
pub mod import;
pub mod interaction;
pub mod model;

mod error;

pub use netsketch_core::{color, geometry, identifier, node_kind, resize};

pub use error::{ModelError, NetsketchError};

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use export::{
    Exporter,
    svg::{DEFAULT_FILE_NAME, Svg, SvgStyle},
};
use import::ImportSummary;
use interaction::{InputEvent, InteractionController, Propagation, PropertyEdit};
use model::{DiagramModel, Segment};

/// An editing session: one diagram model and the controller editing it.
///
/// # Examples
///
/// ```
/// use netsketch::{Editor, config::AppConfig, interaction::InputEvent};
/// use netsketch::geometry::Point;
///
/// let mut editor = Editor::new(AppConfig::default());
/// editor.handle_event(InputEvent::PaletteDragStart { kind: "router".into() });
/// editor.handle_event(InputEvent::Drop { screen: Point::new(120.0, 80.0) });
///
/// editor.import("edge -> core\ncore -> db").unwrap();
/// assert_eq!(editor.model().node_count(), 4);
///
/// let svg = editor.export_svg().unwrap();
/// assert!(svg.contains("router-1"));
/// ```
#[derive(Debug, Default)]
pub struct Editor {
    config: AppConfig,
    model: DiagramModel,
    controller: InteractionController,
}

impl Editor {
    /// Creates an empty editor whose canvas origin comes from `config`.
    pub fn new(config: AppConfig) -> Self {
        let controller = InteractionController::new(config.canvas().transform());
        Self {
            config,
            model: DiagramModel::default(),
            controller,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn model(&self) -> &DiagramModel {
        &self.model
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Feeds one host input event to the interaction controller.
    pub fn handle_event(&mut self, event: InputEvent) -> Propagation {
        self.controller.handle(&mut self.model, event)
    }

    /// Applies a properties-panel edit to the current selection.
    ///
    /// Returns `false` when the edit does not match the selection.
    pub fn apply_edit(&mut self, edit: PropertyEdit) -> bool {
        self.controller.apply_edit(&mut self.model, edit)
    }

    /// Adds a segment at the default position and size.
    pub fn add_segment(&mut self) -> &Segment {
        self.model.add_segment()
    }

    /// Applies a relation script to the model.
    ///
    /// # Errors
    ///
    /// Returns [`NetsketchError::Import`] for the first malformed line.
    /// Relations before it stay applied.
    pub fn import(&mut self, source: &str) -> Result<ImportSummary, NetsketchError> {
        import::import_script(&mut self.model, source)
    }

    fn svg(&self, file_name: &str) -> Result<Svg, NetsketchError> {
        let style = SvgStyle::from_config(&self.config).map_err(NetsketchError::Config)?;
        Ok(Svg::new(file_name, style))
    }

    /// Renders the model to the text of a standalone SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`NetsketchError::Config`] when a configured color is invalid.
    pub fn export_svg(&self) -> Result<String, NetsketchError> {
        info!(
            nodes = self.model.node_count(),
            connections = self.model.connection_count(),
            segments = self.model.segment_count();
            "Exporting diagram"
        );
        let svg = self.svg(DEFAULT_FILE_NAME)?.render_string(&self.model);
        debug!(bytes = svg.len(); "SVG rendered");
        Ok(svg)
    }

    /// Exports the model as an SVG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NetsketchError::Config`] for invalid colors and
    /// [`NetsketchError::Export`] when the file cannot be written.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<(), NetsketchError> {
        let path = path.as_ref().to_string_lossy();
        let svg = self.svg(&path)?;
        svg.export(&self.model)?;
        Ok(())
    }

    /// Empties the model and returns the controller to `Idle` with nothing
    /// selected. Ids keep counting up.
    pub fn clear_all(&mut self) {
        info!("Clearing diagram");
        self.model.clear_all();
        self.controller.reset();
    }
}
