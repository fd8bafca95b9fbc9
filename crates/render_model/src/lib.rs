//! Render Model - Guide scene construction
//!
//! This crate converts laid-out guide lines into render items that can be
//! drawn by a canvas renderer, styled by a configurable guide style.

mod converter;
mod error;
mod render_item;
mod style;

pub use converter::*;
pub use error::*;
pub use render_item::*;
pub use style::*;
