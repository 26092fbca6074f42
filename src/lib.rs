//! Circular tag cloud layout.
//!
//! Rectangles arrive one at a time and are packed around a fixed center into a
//! compact, roughly circular cloud with no overlaps. The placed rectangles, the
//! center and the enclosing radius are what a renderer needs to draw it.

pub mod geometry;
pub mod layout;
pub mod output;
mod wasm;

pub use geometry::{PointI, RectI, SizeI};
pub use layout::{
    layout_cloud, CircularCloudLayouter, ConfigError, InvalidSizeError, LayoutConfig,
    ShiftStrategy, Spiral, TagCloudLayouter,
};
pub use output::{CloudOutput, ErrorInfo};
pub use wasm::{build_cloud, compile_cloud};
