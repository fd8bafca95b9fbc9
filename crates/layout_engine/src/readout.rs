//! Numeric read-out shown next to the canvas

use crate::LineHeightMode;
use metrics_engine::{compute_metrics, FontMetricsSource};
use serde::{Deserialize, Serialize};
use std::fmt;

const EMPTY: &str = "-";

/// Read-out values for a loaded font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontReadout {
    pub units_per_em: u16,
    /// Raw ascent in font units
    pub ascent: f64,
    /// Raw descent in font units
    pub descent: f64,
    /// Raw line gap in font units, zero when absent
    pub line_gap: f64,
    /// e.g. `800 / 1000 × 200`
    pub top_to_baseline_formula: String,
    pub top_to_baseline_px: f64,
    /// e.g. `(200 × 1.2 - 200.0) / 2`
    pub half_leading_formula: String,
    /// Signed half-leading in pixels
    pub half_leading_px: f64,
}

/// Metric read-out panel, empty when no font is loaded
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsReadout {
    pub font: Option<FontReadout>,
}

impl MetricsReadout {
    pub fn new(source: Option<&FontMetricsSource>, font_size: f64, mode: LineHeightMode) -> Self {
        let Some(source) = source else {
            return Self::default();
        };

        let upem = f64::from(source.units_per_em);
        let top_to_baseline_px = source.ascent / upem * font_size;

        let metrics = compute_metrics(Some(source), font_size);
        let line_height_px = mode.resolve(&metrics);
        let font_height = metrics.font_height();
        let half_leading_px = (line_height_px - font_height) / 2.0;

        let line_height_str = match mode {
            LineHeightMode::Auto => "auto".to_string(),
            LineHeightMode::Fixed(multiplier) => format!("{} × {}", font_size, multiplier),
        };

        Self {
            font: Some(FontReadout {
                units_per_em: source.units_per_em,
                ascent: source.ascent,
                descent: source.descent,
                line_gap: source.line_gap.unwrap_or(0.0),
                top_to_baseline_formula: format!(
                    "{} / {} × {}",
                    source.ascent, source.units_per_em, font_size
                ),
                top_to_baseline_px,
                half_leading_formula: format!("({} - {:.1}) / 2", line_height_str, font_height),
                half_leading_px,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.font.is_none()
    }

    /// Label and display text of every panel row
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let Some(font) = &self.font else {
            return [
                "units per em",
                "ascent",
                "descent",
                "line gap",
                "top to baseline",
                "",
                "half-leading",
                "",
            ]
            .into_iter()
            .map(|label| (label, EMPTY.to_string()))
            .collect();
        };

        vec![
            ("units per em", font.units_per_em.to_string()),
            ("ascent", font.ascent.to_string()),
            ("descent", font.descent.to_string()),
            ("line gap", font.line_gap.to_string()),
            ("top to baseline", font.top_to_baseline_formula.clone()),
            ("", format_px(font.top_to_baseline_px)),
            ("half-leading", font.half_leading_formula.clone()),
            ("", format_px(font.half_leading_px)),
        ]
    }
}

fn format_px(value: f64) -> String {
    format!("{:.2} px", value)
}

impl fmt::Display for MetricsReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            if label.is_empty() {
                writeln!(f, "{:>16}  = {}", "", value)?;
            } else {
                writeln!(f, "{:>16}: {}", label, value)?;
            }
        }
        Ok(())
    }
}
