//! Canvas sizing

use crate::{compute_layout, LayoutGeometry, LineHeightMode};
use metrics_engine::RenderMetrics;
use serde::{Deserialize, Serialize};

/// Space above and below the line box
pub const DEFAULT_PADDING: f64 = 60.0;

/// Canvas height that fits one line box plus padding on both sides
pub fn canvas_height_for(line_height_px: f64, padding: f64) -> f64 {
    line_height_px + padding * 2.0
}

/// Size the canvas for the resolved line height and lay out the guides on it
pub fn layout_on_canvas(metrics: &RenderMetrics, mode: LineHeightMode, padding: f64) -> LayoutGeometry {
    let height = canvas_height_for(mode.resolve(metrics), padding);
    compute_layout(metrics, mode, height)
}

/// Canvas dimensions in CSS pixels with the device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl CanvasSize {
    /// A pixel ratio that is not a positive finite number is treated as 1,
    /// and a width that is not a finite non-negative number as 0
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Canvas for a laid-out geometry
    pub fn for_geometry(width: f64, geometry: &LayoutGeometry, pixel_ratio: f64) -> Self {
        Self::new(width, geometry.canvas_height, pixel_ratio)
    }

    /// Width of the backing store in device pixels
    pub fn backing_width(&self) -> u32 {
        (self.width * self.pixel_ratio).round().max(0.0) as u32
    }

    /// Height of the backing store in device pixels
    pub fn backing_height(&self) -> u32 {
        (self.height * self.pixel_ratio).round().max(0.0) as u32
    }
}
