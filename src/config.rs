//! Configuration for rainbow generation
//!
//! All geometry is derived from a single immutable [`RainbowConfig`]. The
//! defaults reproduce the classic six-band rainbow on a 1000x500 canvas;
//! a TOML file can override any subset of the values.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Default palette, outermost band first
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#ff0000", "#ff7f00", "#ffff00", "#00ff00", "#0000ff", "#800080",
];

/// Relative href of the external stylesheet referenced by the document
pub const DEFAULT_STYLESHEET_HREF: &str = "./svg.css";

/// Declared length of every band path, so stylesheets can animate dashes in percent
pub const PATH_LENGTH: f64 = 100.0;

/// Configuration for a rainbow document
#[derive(Debug, Clone, PartialEq)]
pub struct RainbowConfig {
    /// Canvas width; the height is always half of it
    pub canvas_width: f64,
    /// Stroke width of every band, also the spacing between bands
    pub stroke_width: f64,
    /// Band colors, outermost first
    pub palette: Vec<String>,
    /// Href written into the `xml-stylesheet` processing instruction
    pub stylesheet_href: String,
    /// Value of the `pathLength` attribute on each band
    pub path_length: f64,
}

/// TOML structure for deserializing configuration files
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    canvas: Option<TomlCanvas>,
    palette: Option<TomlPalette>,
    output: Option<TomlOutput>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCanvas {
    width: Option<f64>,
    stroke_width: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlPalette {
    colors: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOutput {
    stylesheet: Option<String>,
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1000.0,
            stroke_width: 20.0,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            stylesheet_href: DEFAULT_STYLESHEET_HREF.to_string(),
            path_length: PATH_LENGTH,
        }
    }
}

impl RainbowConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Missing tables and keys keep their default values.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(canvas) = parsed.canvas {
            if let Some(width) = canvas.width {
                config.canvas_width = width;
            }
            if let Some(stroke_width) = canvas.stroke_width {
                config.stroke_width = stroke_width;
            }
        }

        if let Some(palette) = parsed.palette {
            if palette.colors.is_empty() {
                return Err(ConfigError::EmptyPalette);
            }
            config.palette = palette.colors;
        }

        if let Some(href) = parsed.output.and_then(|o| o.stylesheet) {
            config.stylesheet_href = href;
        }

        Ok(config)
    }

    /// Canvas height, always half the width
    pub fn canvas_height(&self) -> f64 {
        self.canvas_width / 2.0
    }

    /// Number of bands, one per palette color
    pub fn band_count(&self) -> usize {
        self.palette.len()
    }

    /// Set the canvas width
    pub fn with_canvas_width(mut self, width: f64) -> Self {
        self.canvas_width = width;
        self
    }

    /// Set the stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Replace the palette
    pub fn with_palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the stylesheet href
    pub fn with_stylesheet_href(mut self, href: impl Into<String>) -> Self {
        self.stylesheet_href = href.into();
        self
    }
}
