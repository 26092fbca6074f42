//! Output types for visualizer consumption.
//!
//! A snapshot of a layouter's public state, serialized to JSON for whatever
//! draws the cloud. Building one never touches the layouter.

use serde::Serialize;

use crate::geometry::{PointI, RectI, SizeI};
use crate::layout::TagCloudLayouter;

/// Error information for the caller of the JSON boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    /// Position of the offending size in the request, when one is to blame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// The finished cloud
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudOutput {
    pub center: PointI,
    pub radius: f64,
    /// Placement order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rectangles: Vec<RectI>,
    /// Union of all rectangles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<RectI>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl CloudOutput {
    pub fn from_layouter<L: TagCloudLayouter + ?Sized>(layouter: &L) -> Self {
        let rectangles = layouter.placed_rectangles().to_vec();
        let bounds = rectangles
            .iter()
            .copied()
            .reduce(|acc, r| acc.union(&r));
        Self {
            center: layouter.center(),
            radius: layouter.circle_radius(),
            rectangles,
            bounds,
            error: None,
        }
    }

    /// An empty cloud around `center` carrying `error`.
    pub fn from_error(center: PointI, error: ErrorInfo) -> Self {
        Self {
            center,
            radius: 0.0,
            rectangles: vec![],
            bounds: None,
            error: Some(error),
        }
    }

    /// Canvas size for drawing: twice the radius tall, one and a half times as wide.
    pub fn image_size(&self) -> SizeI {
        let h = (2.0 * self.radius) as i32;
        let w = (f64::from(h) * 1.5) as i32;
        SizeI { w, h }
    }
}
