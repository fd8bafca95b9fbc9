//! Visualizer session state

use layout_engine::{layout_on_canvas, CanvasSize, LayoutGeometry, MetricsReadout, VisualizerParams};
use metrics_engine::{compute_metrics, FileFontProvider, FontCache, FontKey, RenderMetrics};
use render_model::{build_scene, GuideScene, GuideStyle};
use serde::Serialize;

/// Everything computed for one draw
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The requested font, if any
    pub font: Option<String>,
    /// Whether the font's own metrics were used
    pub loaded: bool,
    pub params: VisualizerParams,
    pub metrics: RenderMetrics,
    pub geometry: LayoutGeometry,
    pub readout: MetricsReadout,
    pub scene: GuideScene,
}

/// Font cache, provider and style shared across draws
pub struct Session {
    cache: FontCache,
    provider: FileFontProvider,
    style: GuideStyle,
}

impl Session {
    pub fn new(provider: FileFontProvider, style: GuideStyle) -> Self {
        Self {
            cache: FontCache::new(),
            provider,
            style,
        }
    }

    pub fn cache(&self) -> &FontCache {
        &self.cache
    }

    /// Load the font if needed and compute metrics, layout, read-out and scene
    pub fn draw(
        &mut self,
        key: Option<&FontKey>,
        params: VisualizerParams,
        width: f64,
        pixel_ratio: f64,
    ) -> Report {
        let source = key.and_then(|key| {
            tracing::info!("Loading font: {}", key);
            self.cache.load_with(key, &self.provider).source().cloned()
        });
        if source.is_none() {
            tracing::info!("Drawing with fallback metrics");
        }

        let metrics = compute_metrics(source.as_ref(), params.font_size);
        let geometry = layout_on_canvas(&metrics, params.line_height, params.padding);
        let canvas = CanvasSize::for_geometry(width, &geometry, pixel_ratio);
        let readout = MetricsReadout::new(source.as_ref(), params.font_size, params.line_height);
        let scene = build_scene(&geometry, &self.style, &canvas);

        Report {
            font: key.map(ToString::to_string),
            loaded: source.is_some(),
            params,
            metrics,
            geometry,
            readout,
            scene,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_engine::LineHeightMode;
    use metrics_engine::test_fonts::FontBuilder;
    use tempfile::TempDir;

    #[test]
    fn test_draw_without_font_uses_fallback() {
        let mut session = Session::new(FileFontProvider::new(), GuideStyle::default());
        let params = VisualizerParams::new(100.0, LineHeightMode::Auto);

        let report = session.draw(None, params, 800.0, 1.0);
        assert!(!report.loaded);
        assert!(report.metrics.is_fallback());
        assert!(report.readout.is_empty());
        assert_eq!(report.scene.height, 220.0);
        assert!(session.cache().is_empty());
    }

    #[test]
    fn test_draw_with_missing_font_records_failure() {
        let mut session = Session::new(FileFontProvider::new(), GuideStyle::default());
        let key = FontKey::file("/nonexistent/font.ttf");
        let params = VisualizerParams::new(100.0, LineHeightMode::Fixed(1.5));

        let report = session.draw(Some(&key), params, 640.0, 2.0);
        assert!(!report.loaded);
        assert_eq!(report.font.as_deref(), Some("/nonexistent/font.ttf"));
        assert!(report.metrics.is_fallback());
        assert!((report.geometry.half_leading_px - 25.0).abs() < 1e-9);
        assert_eq!(report.scene.pixel_ratio, 2.0);
        assert!(session.cache().state(&key).is_some());
    }

    #[test]
    fn test_draw_with_font_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Test.ttf");
        std::fs::write(&path, FontBuilder::new(1000, 800, -200, 0).with_os2(700, 500).build()).unwrap();

        let mut session = Session::new(FileFontProvider::new(), GuideStyle::default());
        let key = FontKey::file(path.clone());
        let params = VisualizerParams::new(200.0, LineHeightMode::Auto);

        let report = session.draw(Some(&key), params, 800.0, 1.0);
        assert!(report.loaded);
        assert!(!report.metrics.is_fallback());
        assert!((report.metrics.ascender - 160.0).abs() < 1e-9);
        assert!((report.metrics.descender + 40.0).abs() < 1e-9);
        assert!((report.metrics.cap_height - 140.0).abs() < 1e-9);
        assert!((report.metrics.x_height - 100.0).abs() < 1e-9);
        assert!((report.geometry.baseline_y - 220.0).abs() < 1e-9);
        assert_eq!(report.scene.height, 320.0);

        let font = report.readout.font.as_ref().unwrap();
        assert_eq!(font.units_per_em, 1000);
        assert_eq!(font.top_to_baseline_formula, "800 / 1000 × 200");

        // a second draw reuses the cached face
        let again = session.draw(Some(&key), params, 800.0, 1.0);
        assert!(again.loaded);
        assert_eq!(session.cache().len(), 1);
    }
}
