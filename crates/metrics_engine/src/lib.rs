//! Metrics Engine - Font metric sources and pixel-space scaling
//!
//! This crate turns the metrics stored in a font program into pixel
//! measurements at a requested font size, and keeps track of which fonts
//! have been loaded.
//!
//! # Modules
//!
//! - `font`: Font metric sources and font keys
//! - `metrics`: Scaling font units into pixel metrics
//! - `loader`: Font loading state, providers, and the font cache

mod error;
mod font;
mod metrics;
pub mod loader;

#[cfg(any(test, feature = "test-util"))]
pub mod test_fonts;

pub use error::*;
pub use font::*;
pub use metrics::*;

pub use loader::{FileFontProvider, FontCache, FontLoad, FontProvider};
