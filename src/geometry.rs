//! Bezier geometry for the concentric rainbow bands
//!
//! Each band is drawn as two cubic segments meeting at the apex: a `C`
//! segment from the start point and an `S` segment to the end point whose
//! first control point is the reflection of `control2` about the apex.
//!
//! Only the outermost band is computed from the canvas. Every inner band is
//! derived from the band just outside it by a fixed per-step offset, so the
//! sequence is a fold over the band index.

use std::iter;

use crate::config::RainbowConfig;

/// A 2D point in SVG user space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The points describing one band of the rainbow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Left end of the band, on the baseline
    pub start: Point,
    /// Right end of the band, on the baseline
    pub end: Point,
    /// Topmost point, where the two segments meet
    pub apex: Point,
    /// First control point of the `C` segment
    pub control1: Point,
    /// Second control point of the `C` segment
    pub control2: Point,
    /// Explicit control point of the `S` segment
    pub control3: Point,
}

impl Arc {
    /// Compute the outermost band from the canvas parameters
    ///
    /// The band is inset by half a stroke on every side so the stroke does
    /// not overflow the canvas.
    pub fn outer(config: &RainbowConfig) -> Self {
        let canvas_width = config.canvas_width;
        let canvas_height = config.canvas_height();
        let half_stroke = config.stroke_width / 2.0;

        let width = canvas_width - config.stroke_width;
        let height = width / 2.0;

        let start = Point::new(half_stroke, canvas_height);
        let end = Point::new(canvas_width - half_stroke, canvas_height);
        let apex = Point::new(canvas_width / 2.0, half_stroke);
        let control1 = Point::new(start.x, canvas_height - height / 2.0);
        let control2 = Point::new(start.x + (end.x - start.x) / 4.0, apex.y);
        let control3 = Point::new(end.x, control1.y);

        Self {
            start,
            end,
            apex,
            control1,
            control2,
            control3,
        }
    }

    /// Derive the band directly inside this one
    ///
    /// The baseline ends move inward by one stroke, the apex moves down by
    /// one stroke, and the control points follow at half or full stroke.
    pub fn next_inner(&self, stroke_width: f64) -> Self {
        let half_stroke = stroke_width / 2.0;

        let start = Point::new(self.start.x + stroke_width, self.start.y);
        let end = Point::new(self.end.x - stroke_width, self.end.y);
        let apex = Point::new(self.apex.x, self.apex.y + stroke_width);
        let control1 = Point::new(start.x, self.control1.y + half_stroke);
        let control2 = Point::new(
            self.control2.x + half_stroke,
            self.control2.y + stroke_width,
        );
        let control3 = Point::new(end.x, control1.y);

        Self {
            start,
            end,
            apex,
            control1,
            control2,
            control3,
        }
    }

    /// Horizontal distance between the two baseline ends
    ///
    /// Zero or negative once bands have crossed over.
    pub fn span(&self) -> f64 {
        self.end.x - self.start.x
    }
}

/// Compute one band per palette color, outermost first
///
/// No bounds are enforced: oversized stroke widths or band counts yield
/// inverted geometry rather than an error. See [`crate::lint`].
pub fn compute_arcs(config: &RainbowConfig) -> Vec<Arc> {
    let stroke_width = config.stroke_width;
    iter::successors(Some(Arc::outer(config)), |arc| {
        Some(arc.next_inner(stroke_width))
    })
    .take(config.band_count())
    .collect()
}
