//! Font metric sources and font keys

use crate::{MetricsError, Result};
use rustybuzz::ttf_parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identifies a font to load, either by family name or by a local file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FontKey {
    /// A font family name, e.g. "Roboto"
    Family(String),
    /// A font file dropped or uploaded by the user
    File(PathBuf),
}

impl FontKey {
    pub fn family(name: impl Into<String>) -> Self {
        Self::Family(name.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }
}

impl fmt::Display for FontKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontKey::Family(name) => write!(f, "{}", name),
            FontKey::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Metrics read from a font program, in font design units
///
/// Optional fields are substituted when the metrics are scaled:
/// a missing line gap counts as zero, a missing cap height as
/// `ascent * 0.8` and a missing x-height as `ascent * 0.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontMetricsSource {
    /// Units per em (always positive)
    pub units_per_em: u16,
    /// Ascent above the baseline (typically positive)
    pub ascent: f64,
    /// Descent below the baseline (typically negative)
    pub descent: f64,
    /// Recommended extra spacing between lines
    #[serde(default)]
    pub line_gap: Option<f64>,
    /// Height of capital letters
    #[serde(default)]
    pub cap_height: Option<f64>,
    /// Height of lowercase letters
    #[serde(default)]
    pub x_height: Option<f64>,
}

impl FontMetricsSource {
    pub fn new(units_per_em: u16, ascent: f64, descent: f64) -> Self {
        Self {
            units_per_em,
            ascent,
            descent,
            line_gap: None,
            cap_height: None,
            x_height: None,
        }
    }

    pub fn with_line_gap(mut self, line_gap: f64) -> Self {
        self.line_gap = Some(line_gap);
        self
    }

    pub fn with_cap_height(mut self, cap_height: f64) -> Self {
        self.cap_height = Some(cap_height);
        self
    }

    pub fn with_x_height(mut self, x_height: f64) -> Self {
        self.x_height = Some(x_height);
        self
    }

    /// Parse the metrics of face `face_index` from raw font bytes
    ///
    /// Accepts anything `rustybuzz` can open: TrueType, OpenType and
    /// collections. WOFF/WOFF2 containers must be decompressed first.
    pub fn from_font_data(data: &[u8], face_index: u32) -> Result<Self> {
        let face = rustybuzz::Face::from_slice(data, face_index).ok_or_else(|| {
            MetricsError::InvalidFontData(format!(
                "Failed to parse font face {} ({} bytes)",
                face_index,
                data.len()
            ))
        })?;

        Ok(Self::from_face(&face))
    }

    /// Read the metrics from an already parsed face
    ///
    /// Ascent, descent and line gap always come from `hhea`, even when the
    /// OS/2 table asks for its typographic metrics to be used instead.
    pub fn from_face(face: &ttf_parser::Face<'_>) -> Self {
        // A zero cap height or x-height means the OS/2 table left it unset.
        let nonzero = |value: Option<i16>| value.filter(|v| *v != 0).map(f64::from);
        let hhea = &face.tables().hhea;

        Self {
            units_per_em: face.units_per_em(),
            ascent: f64::from(hhea.ascender),
            descent: f64::from(hhea.descender),
            line_gap: Some(f64::from(hhea.line_gap)),
            cap_height: nonzero(face.capital_height()),
            x_height: nonzero(face.x_height()),
        }
    }
}
