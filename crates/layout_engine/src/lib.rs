//! Layout Engine - Guide line positioning for font metric visualization
//!
//! This crate takes pixel metrics from `metrics_engine` and positions the
//! baseline, ascender, descender, cap-height and x-height guide lines and the
//! half-leading bands on a canvas.

mod canvas;
mod error;
mod geometry;
mod line_height;
mod params;
mod readout;

pub use canvas::*;
pub use error::*;
pub use geometry::*;
pub use line_height::*;
pub use params::*;
pub use readout::*;
