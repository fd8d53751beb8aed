//! SVG document assembly from computed bands

use crate::config::RainbowConfig;
use crate::geometry::Arc;

use super::path::ArcPath;

/// Prefix of the per-band class name (`path-0`, `path-1`, ...)
const BAND_CLASS_PREFIX: &str = "path-";

/// Build the rainbow SVG document incrementally
pub struct SvgBuilder {
    width: f64,
    height: f64,
    stroke_width: f64,
    path_length: f64,
    stylesheet_href: String,
    bands: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder for the canvas described by `config`
    pub fn new(config: &RainbowConfig) -> Self {
        Self {
            width: config.canvas_width,
            height: config.canvas_height(),
            stroke_width: config.stroke_width,
            path_length: config.path_length,
            stylesheet_href: config.stylesheet_href.clone(),
            bands: vec![],
        }
    }

    /// Add one band as a `<path>` element
    ///
    /// Bands are emitted in the order they are added, so the outermost band
    /// must come first.
    pub fn add_band(&mut self, color: &str, path: &ArcPath) {
        let index = self.bands.len();
        let d = path
            .to_svg_d()
            .lines()
            .map(|line| format!("      {}", line))
            .collect::<Vec<_>>()
            .join("\n");

        self.bands.push(format!(
            r#"  <path
    class="{}{}"
    stroke="{}"
    stroke-width="{}"
    pathLength="{}"
    d="
{}
    "
  />"#,
            BAND_CLASS_PREFIX,
            index,
            escape_xml(color),
            self.stroke_width,
            self.path_length,
            d
        ));
    }

    /// Build the final document string, prolog included
    pub fn build(self) -> String {
        let mut svg = String::new();

        svg.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        svg.push('\n');
        svg.push_str(&format!(
            r#"<?xml-stylesheet type="text/css" href="{}" ?>"#,
            escape_xml(&self.stylesheet_href)
        ));
        svg.push('\n');

        svg.push_str(&format!(
            r#"<svg
  xmlns="http://www.w3.org/2000/svg"
  width="{w}"
  height="{h}"
  viewBox="0 0 {w} {h}"
  fill="none"
  stroke="none"
  stroke-width="{sw}"
  stroke-linecap="square"
  xml:space="preserve"
>"#,
            w = self.width,
            h = self.height,
            sw = self.stroke_width
        ));
        svg.push('\n');

        for band in &self.bands {
            svg.push_str(band);
            svg.push('\n');
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render computed bands into a complete SVG document
///
/// Bands are paired with palette colors positionally; surplus entries on
/// either side are ignored.
pub fn render_document(config: &RainbowConfig, arcs: &[Arc]) -> String {
    let mut builder = SvgBuilder::new(config);
    for (arc, color) in arcs.iter().zip(&config.palette) {
        builder.add_band(color, &ArcPath::from(arc));
    }
    builder.build()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
