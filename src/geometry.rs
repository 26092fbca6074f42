//! Integer geometry shared by the layouter and the output types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

impl PointI {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance_to(&self, other: PointI) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeI {
    pub w: i32,
    pub h: i32,
}

impl SizeI {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Only sizes with both sides strictly positive can be placed.
    pub fn is_valid(&self) -> bool {
        self.w > 0 && self.h > 0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl RectI {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The rectangle of `size` whose `center()` is exactly `center`.
    pub fn from_center(center: PointI, size: SizeI) -> Self {
        Self {
            x: center.x - size.w / 2,
            y: center.y - size.h / 2,
            w: size.w,
            h: size.h,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn size(&self) -> SizeI {
        SizeI {
            w: self.w,
            h: self.h,
        }
    }

    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    /// Center point using truncating division, so odd sizes lean toward the top-left.
    pub fn center(&self) -> PointI {
        PointI {
            x: self.x + self.w / 2,
            y: self.y + self.h / 2,
        }
    }

    pub fn translate(&self, dx: i32, dy: i32) -> RectI {
        RectI {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Interior overlap. Rectangles sharing only an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &RectI) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn overlaps_any<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a RectI>,
    {
        others.into_iter().any(|other| self.overlaps(other))
    }

    pub fn union(&self, other: &RectI) -> RectI {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        RectI {
            x: x0,
            y: y0,
            w: x1 - x0,
            h: y1 - y0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_axis_aligned() {
        let origin = PointI::new(0, 0);
        assert_eq!(origin.distance_to(origin), 0.0);
        let axis = [
            PointI::new(0, 1),
            PointI::new(1, 0),
            PointI::new(-1, 0),
            PointI::new(0, -1),
        ];
        for p in axis {
            assert_eq!(origin.distance_to(p), 1.0);
        }
    }

    #[test]
    fn test_distance_diagonal() {
        let origin = PointI::new(0, 0);
        let unit = [
            PointI::new(1, 1),
            PointI::new(-1, 1),
            PointI::new(1, -1),
            PointI::new(-1, -1),
        ];
        for p in unit {
            assert_eq!(origin.distance_to(p), 2f64.sqrt());
        }
        let knight = [
            PointI::new(1, 2),
            PointI::new(-1, 2),
            PointI::new(1, -2),
            PointI::new(-1, -2),
        ];
        for p in knight {
            assert_eq!(origin.distance_to(p), 5f64.sqrt());
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(RectI::new(-64, -64, 128, 128).center(), PointI::new(0, 0));
        assert_eq!(RectI::new(0, 0, 128, 128).center(), PointI::new(64, 64));
        assert_eq!(RectI::new(0, 0, 3, 3).center(), PointI::new(1, 1));
    }

    #[test]
    fn test_from_center_roundtrips_center() {
        for (w, h) in [(1, 1), (2, 3), (128, 64), (33, 7)] {
            let c = PointI::new(-5, 12);
            let r = RectI::from_center(c, SizeI::new(w, h));
            assert_eq!(r.center(), c);
            assert_eq!(r.size(), SizeI::new(w, h));
        }
    }

    #[test]
    fn test_overlaps() {
        let a = RectI::new(0, 0, 10, 10);
        assert!(a.overlaps(&RectI::new(5, 5, 10, 10)));
        assert!(a.overlaps(&RectI::new(2, 2, 2, 2)));
        assert!(!a.overlaps(&RectI::new(20, 0, 10, 10)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = RectI::new(0, 0, 10, 10);
        assert!(!a.overlaps(&RectI::new(10, 0, 5, 5)));
        assert!(!a.overlaps(&RectI::new(0, 10, 5, 5)));
        assert!(!a.overlaps(&RectI::new(10, 10, 5, 5)));
        assert!(!a.overlaps(&RectI::new(-5, -5, 5, 5)));
    }

    #[test]
    fn test_overlaps_any() {
        let placed = vec![RectI::new(0, 0, 10, 10), RectI::new(30, 30, 10, 10)];
        assert!(RectI::new(35, 35, 2, 2).overlaps_any(&placed));
        assert!(!RectI::new(15, 15, 2, 2).overlaps_any(&placed));
        assert!(!RectI::new(0, 0, 1, 1).overlaps_any(std::iter::empty()));
    }

    #[test]
    fn test_union() {
        let u = RectI::new(0, 0, 10, 10).union(&RectI::new(-5, 20, 5, 5));
        assert_eq!(u, RectI::new(-5, 0, 15, 25));
    }

    #[test]
    fn test_size_validity() {
        assert!(SizeI::new(1, 1).is_valid());
        assert!(!SizeI::new(0, 1).is_valid());
        assert!(!SizeI::new(1, -1).is_valid());
    }
}
