//! Layout-to-render conversion

use crate::{GuideStyle, Rect, RenderItem, TextAlign};
use layout_engine::{CanvasSize, HalfLeadingBand, LayoutGeometry};
use serde::{Deserialize, Serialize};

/// Everything needed to draw the guides for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideScene {
    /// Canvas size in CSS pixels
    pub width: f64,
    pub height: f64,
    /// Device pixels per CSS pixel
    pub pixel_ratio: f64,
    /// Items in painting order
    pub items: Vec<RenderItem>,
}

impl GuideScene {
    pub fn lines(&self) -> impl Iterator<Item = &RenderItem> {
        self.items
            .iter()
            .filter(|item| matches!(item, RenderItem::Line { .. }))
    }

    pub fn labels(&self) -> impl Iterator<Item = &RenderItem> {
        self.items
            .iter()
            .filter(|item| matches!(item, RenderItem::Label { .. }))
    }
}

/// Build the render items for a laid-out geometry
///
/// Bands are painted first so the guide lines stay visible on top of them,
/// and labels last.
pub fn build_scene(geometry: &LayoutGeometry, style: &GuideStyle, canvas: &CanvasSize) -> GuideScene {
    let mut items = Vec::new();

    if style.show_half_leading {
        let color = style.colors.line_gap.with_alpha(style.band_alpha);
        for band in [&geometry.top_band, &geometry.bottom_band] {
            if let Some(bounds) = band_bounds(band, canvas.width) {
                items.push(RenderItem::Fill { bounds, color });
            }
        }
    }

    for (line, y) in geometry.guide_lines() {
        items.push(RenderItem::Line {
            y,
            x_start: 0.0,
            x_end: canvas.width,
            color: style.colors.for_line(line),
            width: style.line_width,
            dash: style.dash.clone(),
        });
    }

    let label_x = match style.label_align {
        TextAlign::Left => style.label_inset,
        TextAlign::Center => canvas.width / 2.0,
        TextAlign::Right => canvas.width - style.label_inset,
    };
    for (line, y) in geometry.guide_lines() {
        let label_y = if line.label_below() {
            y + style.label_gap_below
        } else {
            y - style.label_gap_above
        };
        items.push(RenderItem::Label {
            text: style.labels.for_line(line).to_string(),
            x: label_x,
            y: label_y,
            color: style.colors.for_line(line),
            font_size: style.label_font_size,
            align: style.label_align,
        });
    }

    GuideScene {
        width: canvas.width,
        height: canvas.height,
        pixel_ratio: canvas.pixel_ratio,
        items,
    }
}

fn band_bounds(band: &HalfLeadingBand, width: f64) -> Option<Rect> {
    band.is_visible()
        .then(|| Rect::new(0.0, band.y, width, band.drawn_height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use layout_engine::{layout_on_canvas, LineHeightMode, DEFAULT_PADDING};
    use metrics_engine::{compute_metrics, FontMetricsSource};

    fn example_geometry(mode: LineHeightMode) -> LayoutGeometry {
        let source = FontMetricsSource::new(1000, 800.0, -200.0).with_line_gap(0.0);
        let metrics = compute_metrics(Some(&source), 200.0);
        layout_on_canvas(&metrics, mode, DEFAULT_PADDING)
    }

    fn scene(mode: LineHeightMode, style: &GuideStyle) -> GuideScene {
        let geometry = example_geometry(mode);
        let canvas = CanvasSize::for_geometry(800.0, &geometry, 1.0);
        build_scene(&geometry, style, &canvas)
    }

    #[test]
    fn test_lines_span_canvas() {
        let scene = scene(LineHeightMode::Auto, &GuideStyle::default());
        assert_eq!(scene.lines().count(), 5);
        assert_eq!(scene.labels().count(), 5);
        assert_eq!(scene.height, 320.0);

        match &scene.items[0] {
            RenderItem::Line { y, x_start, x_end, color, width, dash } => {
                assert!((y - 220.0).abs() < 1e-9);
                assert_eq!(*x_start, 0.0);
                assert_eq!(*x_end, 800.0);
                assert_eq!(*color, Color::rgb(255, 0, 0));
                assert_eq!(*width, 2.0);
                assert_eq!(dash, &vec![5.0, 5.0]);
            }
            other => panic!("expected baseline, got {:?}", other),
        }
    }

    #[test]
    fn test_label_positions() {
        let scene = scene(LineHeightMode::Auto, &GuideStyle::default());
        let labels: Vec<_> = scene
            .labels()
            .map(|item| match item {
                RenderItem::Label { text, x, y, align, .. } => (text.clone(), *x, *y, *align),
                _ => unreachable!(),
            })
            .collect();

        assert_eq!(labels[0].0, "baseline");
        assert_eq!(labels[0].1, 790.0);
        assert!((labels[0].2 - 215.0).abs() < 1e-9);
        assert_eq!(labels[0].3, TextAlign::Right);

        assert_eq!(labels[1].0, "ascender");
        assert!((labels[1].2 - 55.0).abs() < 1e-9);

        // descender label goes below its line
        assert_eq!(labels[2].0, "descender");
        assert!((labels[2].2 - 275.0).abs() < 1e-9);

        assert_eq!(labels[3].0, "cap height");
        assert!((labels[3].2 - 87.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_alignment_follows_style() {
        let left = GuideStyle {
            label_align: TextAlign::Left,
            ..GuideStyle::default()
        };
        let center = GuideStyle {
            label_align: TextAlign::Center,
            ..GuideStyle::default()
        };

        for (style, expected_x) in [(left, 10.0), (center, 400.0)] {
            let scene = scene(LineHeightMode::Auto, &style);
            for item in scene.labels() {
                match item {
                    RenderItem::Label { x, align, .. } => {
                        assert_eq!(*x, expected_x);
                        assert_eq!(*align, style.label_align);
                    }
                    _ => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn test_bands_hidden_by_default() {
        let scene = scene(LineHeightMode::Fixed(1.2), &GuideStyle::default());
        assert!(!scene
            .items
            .iter()
            .any(|item| matches!(item, RenderItem::Fill { .. })));
    }

    #[test]
    fn test_bands_drawn_first() {
        let scene = scene(LineHeightMode::Fixed(1.2), &GuideStyle::with_half_leading());

        match (&scene.items[0], &scene.items[1]) {
            (RenderItem::Fill { bounds: top, color }, RenderItem::Fill { bounds: bottom, .. }) => {
                assert_eq!(color.a, 64);
                assert!((top.height - 20.0).abs() < 1e-9);
                assert!((top.y + top.height - (scene_ascender_y(&scene))).abs() < 1e-9);
                assert!((bottom.height - 20.0).abs() < 1e-9);
                assert_eq!(top.width, 800.0);
            }
            other => panic!("expected two bands, got {:?}", other),
        }
        assert!(matches!(scene.items[2], RenderItem::Line { .. }));
    }

    #[test]
    fn test_negative_half_leading_draws_no_bands() {
        let scene = scene(LineHeightMode::Fixed(0.8), &GuideStyle::with_half_leading());
        assert!(matches!(scene.items[0], RenderItem::Line { .. }));
        assert_eq!(scene.items.len(), 10);
    }

    #[test]
    fn test_scene_serializes() {
        let scene = scene(LineHeightMode::Auto, &GuideStyle::default());
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["items"][0]["type"], "line");
        assert_eq!(json["items"][0]["color"], "#ff0000");
        assert_eq!(json["items"][5]["type"], "label");
    }

    fn scene_ascender_y(scene: &GuideScene) -> f64 {
        scene
            .lines()
            .nth(1)
            .map(|item| match item {
                RenderItem::Line { y, .. } => *y,
                _ => unreachable!(),
            })
            .unwrap()
    }
}
