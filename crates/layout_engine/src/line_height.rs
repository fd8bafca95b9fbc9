//! Line height modes

use crate::{LayoutError, Result};
use metrics_engine::RenderMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the line height is chosen
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineHeightMode {
    /// Derived from the font: ascender - descender + line gap
    #[default]
    Auto,
    /// A multiple of the nominal font size
    Fixed(f64),
}

impl LineHeightMode {
    /// Line height in pixels for the given metrics
    ///
    /// `Fixed` multiplies the nominal font size, not the scaled metrics.
    pub fn resolve(&self, metrics: &RenderMetrics) -> f64 {
        match *self {
            LineHeightMode::Auto => metrics.ascender - metrics.descender + metrics.line_gap,
            LineHeightMode::Fixed(multiplier) => metrics.font_size * multiplier,
        }
    }
}

impl fmt::Display for LineHeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeightMode::Auto => write!(f, "auto"),
            LineHeightMode::Fixed(multiplier) => write!(f, "{}", multiplier),
        }
    }
}

impl FromStr for LineHeightMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") || s.eq_ignore_ascii_case("normal") {
            return Ok(LineHeightMode::Auto);
        }

        let multiplier: f64 = s
            .parse()
            .map_err(|_| LayoutError::InvalidLineHeight(s.to_string()))?;
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(LayoutError::InvalidLineHeight(s.to_string()));
        }
        Ok(LineHeightMode::Fixed(multiplier))
    }
}
