// Archimedean spiral point source.
//
// Candidate centers for the layouter. The sequence is infinite and lazy; the
// layouter keeps one instance for its whole lifetime so every search resumes
// where the previous one stopped.

use std::f64::consts::PI;

use crate::geometry::PointI;

/// Angular increment between consecutive points (radians).
pub const DEFAULT_ANGLE_STEP: f64 = 0.05;

/// Distance between spiral arms.
pub const DEFAULT_SPIRAL_STEP: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Spiral {
    center: PointI,
    /// Radius gained per radian: step / 2π.
    growth: f64,
    angle_step: f64,
    /// Index of the next point to emit.
    index: u64,
}

impl Spiral {
    pub fn new(center: PointI, step: f64) -> Self {
        Self::with_angle_step(center, step, DEFAULT_ANGLE_STEP)
    }

    pub fn with_angle_step(center: PointI, step: f64, angle_step: f64) -> Self {
        Self {
            center,
            growth: step / (2.0 * PI),
            angle_step,
            index: 0,
        }
    }

    /// How many points have been pulled so far.
    pub fn points_emitted(&self) -> u64 {
        self.index
    }

    fn point_at(&self, index: u64) -> PointI {
        // Angle comes from the counter, not a running sum, so point N is the same
        // no matter how it was reached.
        let angle = index as f64 * self.angle_step;
        let radius = self.growth * angle;
        let dx = (radius * angle.cos()) as i32;
        let dy = (radius * angle.sin()) as i32;
        PointI {
            x: self.center.x + dx,
            y: self.center.y + dy,
        }
    }
}

impl Iterator for Spiral {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        let p = self.point_at(self.index);
        self.index += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
