//! User-settable visualizer parameters

use crate::{LayoutError, LineHeightMode, Result, DEFAULT_PADDING};
use serde::{Deserialize, Serialize};

pub const MIN_FONT_SIZE: f64 = 10.0;
pub const MAX_FONT_SIZE: f64 = 500.0;
pub const MIN_LINE_HEIGHT_MULTIPLIER: f64 = 0.5;
pub const MAX_LINE_HEIGHT_MULTIPLIER: f64 = 3.0;

/// Inputs chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerParams {
    /// Font size in pixels
    pub font_size: f64,
    /// Line height mode
    pub line_height: LineHeightMode,
    /// Canvas padding above and below the line box
    pub padding: f64,
}

impl Default for VisualizerParams {
    fn default() -> Self {
        Self {
            font_size: 100.0,
            line_height: LineHeightMode::Auto,
            padding: DEFAULT_PADDING,
        }
    }
}

impl VisualizerParams {
    pub fn new(font_size: f64, line_height: LineHeightMode) -> Self {
        Self {
            font_size,
            line_height,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Reject non-finite values and clamp the rest into their supported ranges
    pub fn validated(self) -> Result<Self> {
        if !self.font_size.is_finite() {
            return Err(LayoutError::InvalidParameter(format!(
                "font size must be finite, got {}",
                self.font_size
            )));
        }
        if !self.padding.is_finite() {
            return Err(LayoutError::InvalidParameter(format!(
                "padding must be finite, got {}",
                self.padding
            )));
        }

        let font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if font_size != self.font_size {
            tracing::debug!("Clamped font size {} to {}", self.font_size, font_size);
        }

        let line_height = match self.line_height {
            LineHeightMode::Auto => LineHeightMode::Auto,
            LineHeightMode::Fixed(multiplier) => {
                if !multiplier.is_finite() {
                    return Err(LayoutError::InvalidLineHeight(multiplier.to_string()));
                }
                let clamped =
                    multiplier.clamp(MIN_LINE_HEIGHT_MULTIPLIER, MAX_LINE_HEIGHT_MULTIPLIER);
                if clamped != multiplier {
                    tracing::debug!("Clamped line height {} to {}", multiplier, clamped);
                }
                LineHeightMode::Fixed(clamped)
            }
        };

        Ok(Self {
            font_size,
            line_height,
            padding: self.padding.max(0.0),
        })
    }
}
