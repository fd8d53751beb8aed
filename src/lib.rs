//! Rainbow Arcs - concentric Bezier rainbows as static SVG
//!
//! This library computes one open Bezier band per palette color, nested
//! from the outside in, and assembles them into a standalone SVG document
//! that references an external stylesheet for animation.
//!
//! # Example
//!
//! ```rust
//! use rainbow_arcs::generate;
//!
//! let svg = generate();
//! assert!(svg.contains("<svg"));
//! assert_eq!(svg.matches("<path").count(), 6);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod lint;
pub mod renderer;

use std::path::{Path, PathBuf};

pub use config::{ConfigError, RainbowConfig};
pub use error::RainbowError;
pub use geometry::{compute_arcs, Arc, Point};
pub use lint::{LintCategory, LintWarning};
pub use renderer::{render_document, SvgBuilder};

/// Generate the document for the default six-band rainbow
pub fn generate() -> String {
    generate_with_config(&RainbowConfig::default())
}

/// Generate the document for a custom configuration
///
/// Degenerate configurations still produce a document; use
/// [`generate_with_lint`] to find out whether the geometry is sound.
///
/// # Example
///
/// ```rust
/// use rainbow_arcs::{generate_with_config, RainbowConfig};
///
/// let config = RainbowConfig::new()
///     .with_canvas_width(400.0)
///     .with_stroke_width(10.0)
///     .with_palette(["#e40303", "#ff8c00", "#ffed00"]);
///
/// let svg = generate_with_config(&config);
/// assert!(svg.contains(r#"viewBox="0 0 400 200""#));
/// assert_eq!(svg.matches("<path").count(), 3);
/// ```
pub fn generate_with_config(config: &RainbowConfig) -> String {
    let arcs = compute_arcs(config);
    render_document(config, &arcs)
}

/// Generate the document and run the geometry lint over its bands
pub fn generate_with_lint(config: &RainbowConfig) -> (String, Vec<LintWarning>) {
    let arcs = compute_arcs(config);
    let warnings = lint::check(config, &arcs);
    (render_document(config, &arcs), warnings)
}

/// File name for a configuration's output: `rainbow-{width}x{height}.svg`
pub fn output_file_name(config: &RainbowConfig) -> String {
    format!(
        "rainbow-{}x{}.svg",
        config.canvas_width,
        config.canvas_height()
    )
}

/// Render `config` and write it into `dir`, replacing any existing file
///
/// Returns the path written. The document is written in a single call; on
/// failure nothing is retried or cleaned up.
pub fn write_rainbow(config: &RainbowConfig, dir: &Path) -> Result<PathBuf, RainbowError> {
    let svg = generate_with_config(config);
    write_document(&svg, config, dir)
}

/// Write an already rendered document under the configuration's file name
pub fn write_document(
    svg: &str,
    config: &RainbowConfig,
    dir: &Path,
) -> Result<PathBuf, RainbowError> {
    let path = dir.join(output_file_name(config));
    std::fs::write(&path, svg).map_err(|source| RainbowError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
