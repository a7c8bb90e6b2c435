//! Configuration types for the Netsketch editor.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! an empty document is a valid configuration.
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`StyleConfig`] - Accent and background colors of exports.
//! - [`ExportConfig`] - Viewport of exported documents.
//! - [`CanvasConfig`] - Screen position of the canvas origin.
//!
//! # Example
//!
//! ```
//! # use netsketch::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().accent_color().is_ok());
//! assert_eq!(config.export().width(), 1920);
//! ```

use serde::Deserialize;

use netsketch_core::{
    color::{ACCENT_COLOR, Color},
    geometry::{CanvasTransform, Point},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    export: ExportConfig,

    #[serde(default)]
    canvas: CanvasConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, export: ExportConfig, canvas: CanvasConfig) -> Self {
        Self {
            style,
            export,
            canvas,
        }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }
}

/// Visual styling configuration for exported diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Accent color as a CSS color string. Defaults to [`ACCENT_COLOR`].
    #[serde(default)]
    accent_color: Option<String>,

    /// Background fill of the exported document, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style configuration from optional color strings.
    pub fn new(accent_color: Option<String>, background_color: Option<String>) -> Self {
        Self {
            accent_color,
            background_color,
        }
    }

    /// Returns the parsed accent [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn accent_color(&self) -> Result<Color, String> {
        Color::new(self.accent_color.as_deref().unwrap_or(ACCENT_COLOR))
            .map_err(|err| format!("Invalid accent color in config: {err}"))
    }

    /// Returns the parsed background [`Color`], or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// Size of the exported document's viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "ExportConfig::default_width")]
    width: u32,

    #[serde(default = "ExportConfig::default_height")]
    height: u32,
}

impl ExportConfig {
    /// Creates an export configuration with the given viewport size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn default_width() -> u32 {
        1920
    }

    fn default_height() -> u32 {
        1080
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(Self::default_width(), Self::default_height())
    }
}

/// Screen coordinates of the canvas origin.
///
/// Hosts that embed the canvas at an offset set this so that pointer
/// positions are translated into canvas-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct CanvasConfig {
    #[serde(default)]
    origin_x: f32,

    #[serde(default)]
    origin_y: f32,
}

impl CanvasConfig {
    /// Creates a canvas configuration with the given origin.
    pub fn new(origin_x: f32, origin_y: f32) -> Self {
        Self { origin_x, origin_y }
    }

    /// Returns the transform from screen to canvas coordinates.
    pub fn transform(&self) -> CanvasTransform {
        CanvasTransform::new(Point::new(self.origin_x, self.origin_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accent_is_brand_color() {
        let style = StyleConfig::default();
        assert_eq!(style.accent_color().unwrap(), Color::accent());
        assert_eq!(style.background_color().unwrap(), None);
    }

    #[test]
    fn test_invalid_colors_are_reported() {
        let style = StyleConfig::new(Some("nope".to_string()), Some("also-nope".to_string()));
        assert!(style.accent_color().unwrap_err().contains("accent"));
        assert!(style.background_color().unwrap_err().contains("background"));
    }

    #[test]
    fn test_canvas_transform() {
        let canvas = CanvasConfig::new(250.0, 40.0);
        let local = canvas.transform().to_canvas(Point::new(300.0, 140.0));
        assert_eq!(local, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_export_defaults() {
        assert_eq!(ExportConfig::default(), ExportConfig::new(1920, 1080));
    }
}
