// Circular cloud layouter.
//
// Places rectangles one at a time around a fixed center so the result stays
// compact and roughly circular.
//
// Goals:
// - Deterministic: no randomness, the same sizes always give the same cloud
// - Incremental: sizes arrive one by one and are never moved once placed
// - No overlap: edge-touching is allowed, interior overlap never is
//
// Per placement:
// 1. Search: walk the shared spiral until a rectangle centered on the spiral
//    point is free. The spiral is never rewound between placements.
// 2. Shift: pull the free rectangle toward the center (see `shift`).
// 3. Commit: store it and grow the bounding circle radius if needed.
//
// Submodules:
// - spiral: candidate center points
// - spatial_grid: overlap queries against placed rectangles
// - shift: center-seeking state machine

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{PointI, RectI, SizeI};

mod shift;
mod spatial_grid;
mod spiral;

pub use shift::ShiftStrategy;
pub use spiral::{Spiral, DEFAULT_ANGLE_STEP, DEFAULT_SPIRAL_STEP};

use shift::shift_toward_center;
use spatial_grid::SpatialGrid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Cloud center. Fixed for the lifetime of the layouter.
    pub center: PointI,
    /// Distance between spiral arms. Smaller is denser and slower to grow.
    pub spiral_step: f64,
    /// Angle between consecutive spiral points, in radians.
    pub angle_step: f64,
    /// Cell size of the overlap index. Affects speed only.
    pub grid_cell_size: i32,
    pub shift: ShiftStrategy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center: PointI { x: 0, y: 0 },
            spiral_step: DEFAULT_SPIRAL_STEP,
            angle_step: DEFAULT_ANGLE_STEP,
            grid_cell_size: 64,
            shift: ShiftStrategy::default(),
        }
    }
}

impl LayoutConfig {
    /// Check that the spiral settings are usable and that laying out `sizes`
    /// keeps every coordinate inside the `i32` range.
    pub fn validate(&self, sizes: &[SizeI]) -> Result<(), ConfigError> {
        let steps = [
            ("spiral_step", self.spiral_step),
            ("angle_step", self.angle_step),
        ];
        for (name, value) in steps {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError {
                    message: format!("{name} must be positive and finite, got {value}"),
                });
            }
        }

        // A placement reaches at most its width plus height, one spiral increment
        // and a few rounding units past the radius before it. Twice the sum over
        // all sizes bounds the whole cloud, spiral cursor included.
        let jump = self.spiral_step * self.angle_step / (2.0 * PI) + 4.0;
        let reach: f64 = sizes
            .iter()
            .map(|s| f64::from(s.w.max(0)) + f64::from(s.h.max(0)) + jump)
            .sum();
        let cx = self.center.x.unsigned_abs();
        let cy = self.center.y.unsigned_abs();
        if f64::from(cx.max(cy)) + 2.0 * reach >= f64::from(i32::MAX) {
            return Err(ConfigError {
                message: format!(
                    "{} rectangles around ({}, {}) may leave the i32 coordinate range",
                    sizes.len(),
                    self.center.x,
                    self.center.y
                ),
            });
        }
        Ok(())
    }
}

/// Returned when a config cannot lay out the requested sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid config: {}", self.message)
    }
}
impl std::error::Error for ConfigError {}

/// Returned when a rectangle size has a non-positive side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidSizeError {
    pub size: SizeI,
}

impl fmt::Display for InvalidSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rectangle size must have only positive values: {}x{}",
            self.size.w, self.size.h
        )
    }
}
impl std::error::Error for InvalidSizeError {}

/// Anything that grows a tag cloud one rectangle at a time.
pub trait TagCloudLayouter {
    fn put_next_rectangle(&mut self, size: SizeI) -> Result<RectI, InvalidSizeError>;
    fn placed_rectangles(&self) -> &[RectI];
    fn center(&self) -> PointI;
    fn circle_radius(&self) -> f64;
}

#[derive(Debug, Clone)]
pub struct CircularCloudLayouter {
    center: PointI,
    shift: ShiftStrategy,
    /// Shared cursor; every search continues from where the last one stopped.
    spiral: Spiral,
    /// Placement order.
    placed: Vec<RectI>,
    index: SpatialGrid,
    circle_radius: f64,
}

impl CircularCloudLayouter {
    pub fn new(center: PointI) -> Self {
        Self::with_config(LayoutConfig {
            center,
            ..LayoutConfig::default()
        })
    }

    pub fn with_config(cfg: LayoutConfig) -> Self {
        Self {
            center: cfg.center,
            shift: cfg.shift,
            spiral: Spiral::with_angle_step(cfg.center, cfg.spiral_step, cfg.angle_step),
            placed: Vec::new(),
            index: SpatialGrid::new(cfg.grid_cell_size),
            circle_radius: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Spiral points consumed so far across all placements.
    pub fn spiral_position(&self) -> u64 {
        self.spiral.points_emitted()
    }

    /// Walk the spiral until a rectangle centered on the point is free.
    fn find_free_spot(&mut self, size: SizeI) -> RectI {
        let start = self.spiral.points_emitted();
        let index = &self.index;
        let found = self
            .spiral
            .by_ref()
            .map(|p| RectI::from_center(p, size))
            .find(|candidate| !index.overlaps_any(candidate));

        log::trace!(
            "spiral search for {}x{} took {} points",
            size.w,
            size.h,
            self.spiral.points_emitted() - start
        );

        // The spiral never ends, so `find` only returns once a spot is free.
        found.unwrap_or_else(|| unreachable!("spiral iterator is infinite"))
    }

    /// Corner of `rect` farthest from the center, chosen per axis by which side
    /// of the center the rectangle's own center falls on.
    fn farthest_corner(&self, rect: &RectI) -> PointI {
        let rc = rect.center();
        let x = if self.center.x - rc.x > 0 {
            rect.left()
        } else {
            rect.right()
        };
        let y = if self.center.y - rc.y > 0 {
            rect.top()
        } else {
            rect.bottom()
        };
        PointI { x, y }
    }

    fn commit(&mut self, rect: RectI) {
        self.placed.push(rect);
        self.index.insert(rect);

        let distance = self.center.distance_to(self.farthest_corner(&rect));
        self.circle_radius = self.circle_radius.max(distance);
    }
}

impl Default for CircularCloudLayouter {
    fn default() -> Self {
        Self::with_config(LayoutConfig::default())
    }
}

impl TagCloudLayouter for CircularCloudLayouter {
    /// Coordinates are `i32`; use [`LayoutConfig::validate`] up front when the
    /// cloud could approach the edge of that range.
    fn put_next_rectangle(&mut self, size: SizeI) -> Result<RectI, InvalidSizeError> {
        if !size.is_valid() {
            log::debug!("rejected rectangle size {}x{}", size.w, size.h);
            return Err(InvalidSizeError { size });
        }

        self.index.fit(size);
        let found = self.find_free_spot(size);
        let index = &self.index;
        let blocked = |r: &RectI| index.overlaps_any(r);
        let (rect, moves) = shift_toward_center(found, self.center, self.shift, blocked);

        self.commit(rect);
        log::debug!(
            "placed #{} at ({}, {}) {}x{} after {} shift moves, radius {:.2}",
            self.placed.len(),
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            moves,
            self.circle_radius
        );
        Ok(rect)
    }

    fn placed_rectangles(&self) -> &[RectI] {
        &self.placed
    }

    fn center(&self) -> PointI {
        self.center
    }

    fn circle_radius(&self) -> f64 {
        self.circle_radius
    }
}

/// Place `sizes` in order on a fresh layouter. Stops at the first invalid size.
pub fn layout_cloud(
    sizes: &[SizeI],
    cfg: &LayoutConfig,
) -> Result<CircularCloudLayouter, InvalidSizeError> {
    let mut layouter = CircularCloudLayouter::with_config(cfg.clone());
    for &size in sizes {
        layouter.put_next_rectangle(size)?;
    }
    Ok(layouter)
}
