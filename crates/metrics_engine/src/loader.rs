//! Font loading state and cache
//!
//! Fonts are acquired outside of the metric computations. The cache records
//! where each acquisition stands as a [`FontLoad`] value, and metric lookups
//! fall back to the generic metrics for anything that is not loaded.

use crate::{compute_metrics, FontKey, FontMetricsSource, MetricsError, RenderMetrics, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where the acquisition of a font stands
#[derive(Debug, Clone, PartialEq)]
pub enum FontLoad {
    /// Acquisition has started but not finished
    Pending,
    /// The font was loaded and its metrics read
    Loaded(FontMetricsSource),
    /// The font could not be loaded
    Failed(String),
}

impl FontLoad {
    /// The loaded metrics, if any
    pub fn source(&self) -> Option<&FontMetricsSource> {
        match self {
            FontLoad::Loaded(source) => Some(source),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FontLoad::Loaded(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FontLoad::Pending)
    }
}

impl From<Result<FontMetricsSource>> for FontLoad {
    fn from(result: Result<FontMetricsSource>) -> Self {
        match result {
            Ok(source) => FontLoad::Loaded(source),
            Err(e) => FontLoad::Failed(e.to_string()),
        }
    }
}

/// Something that can produce font metrics for a key
pub trait FontProvider {
    fn load(&self, key: &FontKey) -> Result<FontMetricsSource>;
}

/// Loads fonts from local files
///
/// `File` keys are read directly. `Family` keys are looked up in a table of
/// registered family names.
#[derive(Debug, Clone, Default)]
pub struct FileFontProvider {
    families: HashMap<String, PathBuf>,
    face_index: u32,
}

impl FileFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file for a family name
    pub fn with_family(mut self, family: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.register_family(family, path);
        self
    }

    /// Select the face to read from font collections
    pub fn with_face_index(mut self, face_index: u32) -> Self {
        self.face_index = face_index;
        self
    }

    pub fn register_family(&mut self, family: impl Into<String>, path: impl Into<PathBuf>) {
        self.families.insert(family.into(), path.into());
    }

    fn load_path(&self, path: &Path) -> Result<FontMetricsSource> {
        let data = std::fs::read(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        FontMetricsSource::from_font_data(&data, self.face_index)
    }
}

impl FontProvider for FileFontProvider {
    fn load(&self, key: &FontKey) -> Result<FontMetricsSource> {
        match key {
            FontKey::File(path) => self.load_path(path),
            FontKey::Family(family) => {
                let path = self
                    .families
                    .get(family)
                    .ok_or_else(|| MetricsError::FontNotFound(family.clone()))?;
                self.load_path(path)
            }
        }
    }
}

/// Load state for every font requested so far
///
/// The cache is an ordinary value owned by whoever drives font loading; it is
/// handed to the metric lookups explicitly.
#[derive(Debug, Clone, Default)]
pub struct FontCache {
    entries: HashMap<FontKey, FontLoad>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a font, `None` if it was never requested
    pub fn state(&self, key: &FontKey) -> Option<&FontLoad> {
        self.entries.get(key)
    }

    /// Mark a font as pending
    ///
    /// Returns `false` without changing anything if the font is already
    /// loaded.
    pub fn begin(&mut self, key: FontKey) -> bool {
        if self.entries.get(&key).is_some_and(FontLoad::is_loaded) {
            return false;
        }
        self.entries.insert(key, FontLoad::Pending);
        true
    }

    /// Record the outcome of an acquisition
    pub fn settle(&mut self, key: FontKey, result: Result<FontMetricsSource>) -> &FontLoad {
        let load = FontLoad::from(result);
        match &load {
            FontLoad::Loaded(source) => {
                tracing::info!("Loaded font {} ({} units per em)", key, source.units_per_em);
            }
            FontLoad::Failed(reason) => {
                tracing::warn!("Could not load font {}, using fallback metrics: {}", key, reason);
            }
            FontLoad::Pending => {}
        }

        self.entries.insert(key.clone(), load);
        &self.entries[&key]
    }

    /// Load a font through `provider` unless it is already loaded
    ///
    /// Failed entries are retried.
    pub fn load_with<P: FontProvider + ?Sized>(&mut self, key: &FontKey, provider: &P) -> &FontLoad {
        if self.entries.get(key).is_some_and(FontLoad::is_loaded) {
            tracing::debug!("Font {} already loaded", key);
            return &self.entries[key];
        }

        self.begin(key.clone());
        let result = provider.load(key);
        self.settle(key.clone(), result)
    }

    /// The loaded metrics for a font, if any
    pub fn source(&self, key: &FontKey) -> Option<&FontMetricsSource> {
        self.entries.get(key).and_then(FontLoad::source)
    }

    /// Pixel metrics for a font, falling back to the generic metrics when the
    /// font is missing, pending, or failed
    pub fn metrics_for(&self, key: &FontKey, font_size: f64) -> RenderMetrics {
        compute_metrics(self.source(key), font_size)
    }

    /// Forget a font
    pub fn evict(&mut self, key: &FontKey) -> Option<FontLoad> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
