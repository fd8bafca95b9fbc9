//! Guide line styling
//!
//! A style captures everything that differs between front ends drawing the
//! same guides: colors, stroke, label text and placement, and whether the
//! half-leading bands are shown. Styles are stored as JSON; missing fields
//! take their defaults.

use crate::{Color, Result, TextAlign};
use layout_engine::GuideLine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One color per guide line, plus the line-gap color used for bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricColors {
    pub baseline: Color,
    pub ascender: Color,
    pub descender: Color,
    pub cap_height: Color,
    pub x_height: Color,
    pub line_gap: Color,
}

impl Default for MetricColors {
    fn default() -> Self {
        Self {
            baseline: Color::rgb(0xff, 0x00, 0x00),
            ascender: Color::rgb(0x00, 0xff, 0x00),
            descender: Color::rgb(0x00, 0x00, 0xff),
            cap_height: Color::rgb(0xff, 0x00, 0xff),
            x_height: Color::rgb(0xff, 0xaa, 0x00),
            line_gap: Color::rgb(0x00, 0xff, 0xff),
        }
    }
}

impl MetricColors {
    pub fn for_line(&self, line: GuideLine) -> Color {
        match line {
            GuideLine::Baseline => self.baseline,
            GuideLine::Ascender => self.ascender,
            GuideLine::Descender => self.descender,
            GuideLine::CapHeight => self.cap_height,
            GuideLine::XHeight => self.x_height,
        }
    }
}

/// Label text per guide line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideLabels {
    pub baseline: String,
    pub ascender: String,
    pub descender: String,
    pub cap_height: String,
    pub x_height: String,
}

impl Default for GuideLabels {
    fn default() -> Self {
        Self {
            baseline: "baseline".to_string(),
            ascender: "ascender".to_string(),
            descender: "descender".to_string(),
            cap_height: "cap height".to_string(),
            x_height: "x-height".to_string(),
        }
    }
}

impl GuideLabels {
    pub fn for_line(&self, line: GuideLine) -> &str {
        match line {
            GuideLine::Baseline => &self.baseline,
            GuideLine::Ascender => &self.ascender,
            GuideLine::Descender => &self.descender,
            GuideLine::CapHeight => &self.cap_height,
            GuideLine::XHeight => &self.x_height,
        }
    }
}

/// Complete guide style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideStyle {
    pub colors: MetricColors,
    pub labels: GuideLabels,
    /// Stroke width of guide lines
    pub line_width: f64,
    /// Dash and gap lengths, solid when empty
    pub dash: Vec<f64>,
    /// Label font size in pixels
    pub label_font_size: f64,
    /// Which canvas edge the labels are anchored to
    pub label_align: TextAlign,
    /// Distance of the labels from their anchoring edge
    pub label_inset: f64,
    /// Gap between a line and a label drawn above it
    pub label_gap_above: f64,
    /// Gap between a line and a label drawn below it
    pub label_gap_below: f64,
    /// Whether to draw the half-leading bands
    pub show_half_leading: bool,
    /// Alpha of the band fill
    pub band_alpha: u8,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            colors: MetricColors::default(),
            labels: GuideLabels::default(),
            line_width: 2.0,
            dash: vec![5.0, 5.0],
            label_font_size: 12.0,
            label_align: TextAlign::Right,
            label_inset: 10.0,
            label_gap_above: 5.0,
            label_gap_below: 15.0,
            show_half_leading: false,
            band_alpha: 64,
        }
    }
}

impl GuideStyle {
    /// Default style with the half-leading bands shown
    pub fn with_half_leading() -> Self {
        Self {
            show_half_leading: true,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load a style from a JSON file
pub fn load_style(path: &Path) -> Result<GuideStyle> {
    let content = std::fs::read_to_string(path)?;
    GuideStyle::from_json(&content)
}

/// Load a style from a JSON file, falling back to the default style if the
/// file is missing or invalid
pub fn load_style_or_default(path: &Path) -> GuideStyle {
    if !path.exists() {
        tracing::debug!("No style file at {:?}, using default style", path);
        return GuideStyle::default();
    }

    match load_style(path) {
        Ok(style) => style,
        Err(e) => {
            tracing::warn!("Failed to load style file, using defaults: {}", e);
            GuideStyle::default()
        }
    }
}
