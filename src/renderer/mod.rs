//! SVG renderer for generating output from computed bands
//!
//! This module turns a sequence of [`crate::geometry::Arc`]s into path data
//! and wraps them in a standalone SVG document.

pub mod path;
pub mod svg;

pub use path::{arc_to_d, ArcPath, PathSegment};
pub use svg::{render_document, SvgBuilder};
