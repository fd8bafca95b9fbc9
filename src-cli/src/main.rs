//! metrics-viz - Font metrics visualizer
//!
//! Loads a font file (or uses generic metrics when none is given), lays out
//! the baseline, ascender, descender, cap-height and x-height guides, and
//! prints the metric read-out and the guide scene.

mod session;

use anyhow::{Context, Result};
use clap::Parser;
use layout_engine::{LineHeightMode, VisualizerParams, DEFAULT_PADDING};
use metrics_engine::{FileFontProvider, FontKey};
use render_model::{load_style_or_default, GuideStyle, RenderItem};
use session::{Report, Session};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(clap::ValueEnum, Copy, Clone, Default, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human readable read-out and guide positions
    #[default]
    Text,
    /// The full report as JSON
    Json,
}

#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Font file to read metrics from
    #[arg(long, conflicts_with = "family")]
    font: Option<PathBuf>,
    /// Font family to look up in the --family-file mappings
    #[arg(long)]
    family: Option<String>,
    /// Map a family name to a font file, as NAME=PATH
    #[arg(long = "family-file", value_parser = parse_family_file)]
    family_files: Vec<(String, PathBuf)>,
    /// Face index inside font collections
    #[arg(long, default_value_t = 0)]
    face_index: u32,
    /// Font size in pixels
    #[arg(long, default_value_t = 100.0)]
    size: f64,
    /// Line height: "auto" or a multiple of the font size
    #[arg(long, default_value = "auto")]
    line_height: LineHeightMode,
    /// Canvas padding above and below the line box
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    padding: f64,
    /// Canvas width in CSS pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Device pixel ratio
    #[arg(long, default_value_t = 1.0)]
    pixel_ratio: f64,
    /// JSON guide style file
    #[arg(long)]
    style: Option<PathBuf>,
    /// Draw the half-leading bands
    #[arg(long)]
    show_half_leading: bool,
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl Args {
    fn font_key(&self) -> Option<FontKey> {
        match (&self.font, &self.family) {
            (Some(path), _) => Some(FontKey::File(path.clone())),
            (None, Some(family)) => Some(FontKey::Family(family.clone())),
            (None, None) => None,
        }
    }

    fn provider(&self) -> FileFontProvider {
        self.family_files
            .iter()
            .fold(FileFontProvider::new().with_face_index(self.face_index), |provider, (family, path)| {
                provider.with_family(family.clone(), path.clone())
            })
    }

    /// A missing or unreadable style file falls back to the default style
    fn style(&self) -> GuideStyle {
        let mut style = self
            .style
            .as_deref()
            .map(load_style_or_default)
            .unwrap_or_default();
        if self.show_half_leading {
            style.show_half_leading = true;
        }
        style
    }
}

fn parse_family_file(s: &str) -> std::result::Result<(String, PathBuf), String> {
    let (family, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATH, got {:?}", s))?;
    if family.is_empty() || path.is_empty() {
        return Err(format!("expected NAME=PATH, got {:?}", s));
    }
    Ok((family.to_string(), PathBuf::from(path)))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let params = VisualizerParams::new(args.size, args.line_height)
        .with_padding(args.padding)
        .validated()
        .context("Invalid visualizer parameters")?;
    anyhow::ensure!(
        args.width.is_finite() && args.width > 0.0,
        "Canvas width must be a positive number, got {}",
        args.width
    );
    tracing::debug!("Parameters: {:?}", params);

    let mut session = Session::new(args.provider(), args.style());
    let report = session.draw(args.font_key().as_ref(), params, args.width, args.pixel_ratio);
    tracing::debug!("{} font(s) in cache", session.cache().len());

    if report.font.is_some() && !report.loaded {
        tracing::warn!("Could not load font, using fallback metrics");
    }

    match args.format {
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Text => print!("{}", render_text(&report)),
    }
    Ok(())
}

fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let font = report.font.as_deref().unwrap_or("(none)");
    let status = if report.loaded { "loaded" } else { "fallback metrics" };
    out.push_str(&format!("font: {} [{}]\n", font, status));
    out.push_str(&format!(
        "size: {} px, line height: {}, canvas: {} x {}\n\n",
        report.params.font_size, report.params.line_height, report.scene.width, report.scene.height
    ));
    out.push_str(&report.readout.to_string());
    out.push('\n');

    // Lines and labels are emitted in the same guide order.
    for (line, label) in report.scene.lines().zip(report.scene.labels()) {
        if let (RenderItem::Line { y, .. }, RenderItem::Label { text, .. }) = (line, label) {
            out.push_str(&format!("{:>16}: y = {:.2}\n", text, y));
        }
    }
    out.push_str(&format!(
        "{:>16}: {:.2} px\n",
        "line height", report.geometry.line_height_px
    ));
    out.push_str(&format!(
        "{:>16}: {:.2} px\n",
        "half-leading", report.geometry.half_leading_px
    ));
    out
}
