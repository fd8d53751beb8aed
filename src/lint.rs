//! Lint checks for degenerate rainbow geometry.
//!
//! Generation never rejects a configuration. These checks run over the
//! computed bands and report configurations that produce inverted or
//! self-overlapping output, so callers can decide whether to proceed.

use std::fmt;

use crate::config::RainbowConfig;
use crate::geometry::Arc;

/// A lint warning about degenerate geometry
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    /// Canvas or stroke width is NaN or infinite
    NonFinite,
    /// Stroke width is non-positive or not smaller than the canvas
    Stroke,
    /// A band's start and end points have met or crossed
    Crossing,
    /// A band's apex is on or below its baseline
    Apex,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::NonFinite => write!(f, "non-finite"),
            LintCategory::Stroke => write!(f, "stroke"),
            LintCategory::Crossing => write!(f, "crossing"),
            LintCategory::Apex => write!(f, "apex"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}]: {}", self.category, self.message)
    }
}

/// Run all lint checks on a configuration and its computed bands.
pub fn check(config: &RainbowConfig, arcs: &[Arc]) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    if !check_finite(config, &mut warnings) {
        return warnings;
    }
    check_stroke(config, &mut warnings);
    check_crossing(arcs, &mut warnings);
    check_apex(arcs, &mut warnings);
    warnings
}

// The remaining checks compare floats and assume finite input.
fn check_finite(config: &RainbowConfig, warnings: &mut Vec<LintWarning>) -> bool {
    let mut finite = true;
    for (name, value) in [
        ("canvas width", config.canvas_width),
        ("stroke width", config.stroke_width),
    ] {
        if !value.is_finite() {
            finite = false;
            warnings.push(LintWarning {
                category: LintCategory::NonFinite,
                message: format!("{} {} is not a finite number", name, value),
            });
        }
    }
    finite
}

fn check_stroke(config: &RainbowConfig, warnings: &mut Vec<LintWarning>) {
    if config.stroke_width <= 0.0 {
        warnings.push(LintWarning {
            category: LintCategory::Stroke,
            message: format!(
                "stroke width {} must be positive; all bands collapse onto one line",
                config.stroke_width
            ),
        });
    } else if config.stroke_width >= config.canvas_width {
        warnings.push(LintWarning {
            category: LintCategory::Stroke,
            message: format!(
                "stroke width {} is not smaller than canvas width {}",
                config.stroke_width, config.canvas_width
            ),
        });
    }
}

// Only the first offending band is reported; every band inside it is worse.
fn check_crossing(arcs: &[Arc], warnings: &mut Vec<LintWarning>) {
    if let Some((index, arc)) = arcs.iter().enumerate().find(|(_, a)| a.span() <= 0.0) {
        warnings.push(LintWarning {
            category: LintCategory::Crossing,
            message: format!(
                "band {} starts at x={} but ends at x={}; {} of {} bands are inverted",
                index,
                arc.start.x,
                arc.end.x,
                arcs.len() - index,
                arcs.len()
            ),
        });
    }
}

fn check_apex(arcs: &[Arc], warnings: &mut Vec<LintWarning>) {
    if let Some((index, arc)) = arcs
        .iter()
        .enumerate()
        .find(|(_, a)| a.apex.y >= a.start.y)
    {
        warnings.push(LintWarning {
            category: LintCategory::Apex,
            message: format!(
                "band {} apex y={} is not above its baseline y={}",
                index, arc.apex.y, arc.start.y
            ),
        });
    }
}
