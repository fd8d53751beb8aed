//! Path data serialization for rainbow bands
//!
//! Converts an [`Arc`] into the SVG path `d` attribute string.

use std::fmt;

use crate::geometry::{Arc, Point};

/// A segment in a band path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point (pen up)
    MoveTo(Point),
    /// Cubic Bezier curve with two explicit control points
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Smooth cubic continuation (SVG `S` command)
    ///
    /// The first control point is the reflection of the previous segment's
    /// second control point about the current point.
    SmoothCubicTo { control2: Point, end: Point },
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathSegment::CubicTo {
                control1,
                control2,
                end,
            } => write!(
                f,
                "C {} {}, {} {}, {} {}",
                control1.x, control1.y, control2.x, control2.y, end.x, end.y
            ),
            PathSegment::SmoothCubicTo { control2, end } => {
                write!(f, "S {} {}, {} {}", control2.x, control2.y, end.x, end.y)
            }
        }
    }
}

/// An open, unfilled band path ready for SVG rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    pub segments: Vec<PathSegment>,
}

impl From<&Arc> for ArcPath {
    fn from(arc: &Arc) -> Self {
        Self {
            segments: vec![
                PathSegment::MoveTo(arc.start),
                PathSegment::CubicTo {
                    control1: arc.control1,
                    control2: arc.control2,
                    end: arc.apex,
                },
                PathSegment::SmoothCubicTo {
                    control2: arc.control3,
                    end: arc.end,
                },
            ],
        }
    }
}

impl ArcPath {
    /// Convert to SVG path `d` attribute string, one command per line
    ///
    /// No closing `Z` command is emitted.
    pub fn to_svg_d(&self) -> String {
        self.segments
            .iter()
            .map(|seg| seg.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Serialize a band's points directly to path data
pub fn arc_to_d(arc: &Arc) -> String {
    ArcPath::from(arc).to_svg_d()
}
