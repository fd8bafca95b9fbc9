//! Guide line geometry
//!
//! All y-coordinates grow downward from the top of the canvas, so metrics
//! above the baseline are subtracted from it and the (negative) descender
//! moves its line below.

use crate::LineHeightMode;
use metrics_engine::RenderMetrics;
use serde::{Deserialize, Serialize};

/// The horizontal guide lines drawn for a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideLine {
    Baseline,
    Ascender,
    Descender,
    CapHeight,
    XHeight,
}

impl GuideLine {
    /// Drawing order
    pub const ALL: [GuideLine; 5] = [
        GuideLine::Baseline,
        GuideLine::Ascender,
        GuideLine::Descender,
        GuideLine::CapHeight,
        GuideLine::XHeight,
    ];

    /// Whether the label for this line sits below it instead of above
    pub fn label_below(&self) -> bool {
        matches!(self, GuideLine::Descender)
    }
}

/// A half-leading band above the ascender line or below the descender line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfLeadingBand {
    /// Top edge of the band
    pub y: f64,
    /// Signed band height, equal to the half-leading
    pub height: f64,
}

impl HalfLeadingBand {
    /// Band height for drawing, never negative
    pub fn drawn_height(&self) -> f64 {
        self.height.max(0.0)
    }

    pub fn is_visible(&self) -> bool {
        self.drawn_height() > 0.0
    }
}

/// Absolute positions of the guide lines on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub canvas_height: f64,
    pub baseline_y: f64,
    pub ascender_y: f64,
    pub descender_y: f64,
    pub cap_height_y: f64,
    pub x_height_y: f64,
    /// Resolved line height in pixels
    pub line_height_px: f64,
    /// ascender - descender
    pub font_height: f64,
    /// (line height - font height) / 2, negative when the line is tighter
    /// than the font box
    pub half_leading_px: f64,
    pub top_band: HalfLeadingBand,
    pub bottom_band: HalfLeadingBand,
}

impl LayoutGeometry {
    /// y-coordinate of a guide line
    pub fn line_y(&self, line: GuideLine) -> f64 {
        match line {
            GuideLine::Baseline => self.baseline_y,
            GuideLine::Ascender => self.ascender_y,
            GuideLine::Descender => self.descender_y,
            GuideLine::CapHeight => self.cap_height_y,
            GuideLine::XHeight => self.x_height_y,
        }
    }

    /// All guide lines with their y-coordinates, in drawing order
    pub fn guide_lines(&self) -> impl Iterator<Item = (GuideLine, f64)> + '_ {
        GuideLine::ALL.into_iter().map(move |line| (line, self.line_y(line)))
    }
}

/// Position the guide lines for `metrics` on a canvas of `canvas_height`
///
/// The ascender-descender box is centered vertically on the canvas and the
/// baseline placed inside it.
pub fn compute_layout(
    metrics: &RenderMetrics,
    mode: LineHeightMode,
    canvas_height: f64,
) -> LayoutGeometry {
    let line_height_px = mode.resolve(metrics);
    let font_height = metrics.font_height();

    let baseline_y = canvas_height / 2.0
        + (metrics.ascender - metrics.descender) / 2.0
        + metrics.descender;

    let ascender_y = baseline_y - metrics.ascender;
    let descender_y = baseline_y - metrics.descender;
    let half_leading_px = (line_height_px - font_height) / 2.0;

    LayoutGeometry {
        canvas_height,
        baseline_y,
        ascender_y,
        descender_y,
        cap_height_y: baseline_y - metrics.cap_height,
        x_height_y: baseline_y - metrics.x_height,
        line_height_px,
        font_height,
        half_leading_px,
        top_band: HalfLeadingBand {
            y: ascender_y - half_leading_px,
            height: half_leading_px,
        },
        bottom_band: HalfLeadingBand {
            y: descender_y,
            height: half_leading_px,
        },
    }
}
