//! Scaling font-unit metrics into pixel metrics

use crate::FontMetricsSource;
use serde::{Deserialize, Serialize};

/// Ascender used when no font is available, as a fraction of the font size
pub const FALLBACK_ASCENDER_RATIO: f64 = 0.8;
/// Descender used when no font is available, as a fraction of the font size
pub const FALLBACK_DESCENDER_RATIO: f64 = -0.2;
/// Cap height used when no font is available, as a fraction of the font size
pub const FALLBACK_CAP_HEIGHT_RATIO: f64 = 0.7;
/// x-height used when no font is available, as a fraction of the font size
pub const FALLBACK_X_HEIGHT_RATIO: f64 = 0.5;

/// Cap height derived from the ascent when the font does not provide one
pub const CAP_HEIGHT_FROM_ASCENT: f64 = 0.8;
/// x-height derived from the ascent when the font does not provide one
pub const X_HEIGHT_FROM_ASCENT: f64 = 0.5;

/// Font metrics scaled to pixels at a specific font size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderMetrics {
    /// Ascender above the baseline
    pub ascender: f64,
    /// Descender relative to the baseline (negative below it)
    pub descender: f64,
    /// Line gap
    pub line_gap: f64,
    /// Cap height above the baseline
    pub cap_height: f64,
    /// x-height above the baseline
    pub x_height: f64,
    /// Units per em of the source font, `None` for fallback metrics
    pub units_per_em: Option<u16>,
    /// `font_size / units_per_em`, `None` for fallback metrics
    pub scale: Option<f64>,
    /// Nominal font size in pixels these metrics were computed for
    pub font_size: f64,
}

impl RenderMetrics {
    /// Generic metrics used when no font is loaded
    pub fn fallback(font_size: f64) -> Self {
        Self {
            ascender: font_size * FALLBACK_ASCENDER_RATIO,
            descender: font_size * FALLBACK_DESCENDER_RATIO,
            line_gap: 0.0,
            cap_height: font_size * FALLBACK_CAP_HEIGHT_RATIO,
            x_height: font_size * FALLBACK_X_HEIGHT_RATIO,
            units_per_em: None,
            scale: None,
            font_size,
        }
    }

    /// Height of the ascender-to-descender box
    pub fn font_height(&self) -> f64 {
        self.ascender - self.descender
    }

    /// Whether these are the generic metrics rather than a real font's
    pub fn is_fallback(&self) -> bool {
        self.units_per_em.is_none()
    }
}

/// Compute pixel metrics for `source` at `font_size` pixels
///
/// A missing source yields [`RenderMetrics::fallback`]. Missing optional
/// fields in the source are substituted individually. The caller is
/// responsible for passing a finite, positive font size.
pub fn compute_metrics(source: Option<&FontMetricsSource>, font_size: f64) -> RenderMetrics {
    let Some(source) = source else {
        return RenderMetrics::fallback(font_size);
    };

    let scale = font_size / f64::from(source.units_per_em);
    let cap_height = source
        .cap_height
        .unwrap_or(source.ascent * CAP_HEIGHT_FROM_ASCENT);
    let x_height = source
        .x_height
        .unwrap_or(source.ascent * X_HEIGHT_FROM_ASCENT);

    RenderMetrics {
        ascender: source.ascent * scale,
        descender: source.descent * scale,
        line_gap: source.line_gap.unwrap_or(0.0) * scale,
        cap_height: cap_height * scale,
        x_height: x_height * scale,
        units_per_em: Some(source.units_per_em),
        scale: Some(scale),
        font_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn example_source() -> FontMetricsSource {
        FontMetricsSource::new(1000, 800.0, -200.0).with_line_gap(0.0)
    }

    #[test]
    fn test_fallback_metrics() {
        let metrics = compute_metrics(None, 100.0);
        assert!(approx_eq(metrics.ascender, 80.0));
        assert!(approx_eq(metrics.descender, -20.0));
        assert_eq!(metrics.line_gap, 0.0);
        assert!(approx_eq(metrics.cap_height, 70.0));
        assert!(approx_eq(metrics.x_height, 50.0));
        assert!(metrics.is_fallback());
        assert!(metrics.scale.is_none());
    }

    #[test]
    fn test_example_font_at_200px() {
        let metrics = compute_metrics(Some(&example_source()), 200.0);
        assert!(approx_eq(metrics.ascender, 160.0));
        assert!(approx_eq(metrics.descender, -40.0));
        assert!(approx_eq(metrics.cap_height, 128.0));
        assert!(approx_eq(metrics.x_height, 80.0));
        assert_eq!(metrics.line_gap, 0.0);
        assert_eq!(metrics.units_per_em, Some(1000));
        assert!(approx_eq(metrics.scale.unwrap(), 0.2));
        assert_eq!(metrics.font_size, 200.0);
        assert!(approx_eq(metrics.font_height(), 200.0));
    }

    #[test]
    fn test_present_cap_height_is_used_as_is() {
        let source = example_source().with_cap_height(700.0);
        let metrics = compute_metrics(Some(&source), 200.0);
        assert!(approx_eq(metrics.cap_height, 140.0));
        // x-height still derived from the ascent
        assert!(approx_eq(metrics.x_height, 80.0));
    }

    #[test]
    fn test_present_x_height_is_used_as_is() {
        let source = example_source().with_x_height(450.0);
        let metrics = compute_metrics(Some(&source), 200.0);
        assert!(approx_eq(metrics.x_height, 90.0));
        assert!(approx_eq(metrics.cap_height, 128.0));
    }

    #[test]
    fn test_missing_line_gap_is_zero() {
        let source = FontMetricsSource::new(2048, 1900.0, -500.0);
        let metrics = compute_metrics(Some(&source), 20.48);
        assert_eq!(metrics.line_gap, 0.0);
    }

    #[test]
    fn test_line_gap_is_scaled() {
        let source = FontMetricsSource::new(2048, 1854.0, -434.0).with_line_gap(67.0);
        let metrics = compute_metrics(Some(&source), 2048.0);
        assert!(approx_eq(metrics.line_gap, 67.0));
        assert!(approx_eq(metrics.descender, -434.0));
    }

    #[test]
    fn test_descender_sign_preserved() {
        let source = FontMetricsSource::new(1000, 900.0, 0.0);
        let metrics = compute_metrics(Some(&source), 50.0);
        assert_eq!(metrics.descender, 0.0);

        let source = FontMetricsSource::new(1000, 900.0, -300.0);
        let metrics = compute_metrics(Some(&source), 50.0);
        assert!(metrics.descender < 0.0);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let source = example_source().with_cap_height(712.0);
        let a = compute_metrics(Some(&source), 37.5);
        let b = compute_metrics(Some(&source), 37.5);
        assert_eq!(a, b);
        assert_eq!(a.ascender.to_bits(), b.ascender.to_bits());
    }

    fn arb_source() -> impl Strategy<Value = FontMetricsSource> {
        (
            1u16..=4096,
            0.0f64..4000.0,
            -2000.0f64..=0.0,
            proptest::option::of(0.0f64..500.0),
            proptest::option::of(0.0f64..3000.0),
            proptest::option::of(0.0f64..2000.0),
        )
            .prop_map(|(upem, ascent, descent, line_gap, cap, x)| FontMetricsSource {
                units_per_em: upem,
                ascent,
                descent,
                line_gap,
                cap_height: cap,
                x_height: x,
            })
    }

    proptest! {
        #[test]
        fn prop_fallback_is_proportional(size in 1.0f64..1000.0) {
            let metrics = compute_metrics(None, size);
            prop_assert!(approx_eq(metrics.ascender, 0.8 * size));
            prop_assert!(approx_eq(metrics.descender, -0.2 * size));
            prop_assert!(approx_eq(metrics.cap_height, 0.7 * size));
            prop_assert!(approx_eq(metrics.x_height, 0.5 * size));
            prop_assert_eq!(metrics.line_gap, 0.0);
        }

        #[test]
        fn prop_doubling_size_doubles_metrics(source in arb_source(), size in 1.0f64..500.0) {
            let single = compute_metrics(Some(&source), size);
            let double = compute_metrics(Some(&source), size * 2.0);
            prop_assert!(approx_eq(double.ascender, single.ascender * 2.0));
            prop_assert!(approx_eq(double.descender, single.descender * 2.0));
            prop_assert!(approx_eq(double.line_gap, single.line_gap * 2.0));
            prop_assert!(approx_eq(double.cap_height, single.cap_height * 2.0));
            prop_assert!(approx_eq(double.x_height, single.x_height * 2.0));
        }

        #[test]
        fn prop_cap_height_substitution(source in arb_source(), size in 1.0f64..500.0) {
            let metrics = compute_metrics(Some(&source), size);
            let upem = f64::from(source.units_per_em);
            let expected = match source.cap_height {
                Some(cap) => cap * size / upem,
                None => source.ascent * 0.8 * size / upem,
            };
            prop_assert!(approx_eq(metrics.cap_height, expected));
        }
    }
}
