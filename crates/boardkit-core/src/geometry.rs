//! Integer-unit 2D geometry: points, vectors, angles, bounding boxes.
//!
//! All coordinates are `i32` internal units (see [`crate::units`]).
//! Rotation rounds half away from zero, and multiples of 90 degrees are
//! computed exactly, so four successive quarter turns restore the
//! original integer coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A 2D point in internal units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A translation offset. Same representation as [`Point`].
pub type Vector = Point;

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in internal units.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// A signed angle in tenths of a degree.
///
/// Fixed-point tenths keep arc sweeps and item orientations exact under
/// negation and addition; conversion to radians happens only at the
/// trigonometry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Angle(pub i32);

impl Angle {
    pub const ZERO: Angle = Angle(0);
    pub const DEG_90: Angle = Angle(900);
    pub const DEG_180: Angle = Angle(1800);
    pub const DEG_270: Angle = Angle(2700);

    pub fn from_degrees(deg: f64) -> Self {
        Angle((deg * 10.0).round() as i32)
    }

    pub fn from_tenths(tenths: i32) -> Self {
        Angle(tenths)
    }

    pub fn degrees(&self) -> f64 {
        self.0 as f64 / 10.0
    }

    pub fn radians(&self) -> f64 {
        self.degrees().to_radians()
    }

    /// Normalize into `[0, 3600)` tenths.
    pub fn normalized(&self) -> Angle {
        Angle(self.0.rem_euclid(3600))
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

/// Rotate `p` about `center` by `angle` (counter-clockwise positive).
///
/// Quarter-turn multiples are computed with exact integer swaps; any
/// other angle goes through f64 trig with the result rounded half away
/// from zero.
pub fn rotate_point(p: Point, center: Point, angle: Angle) -> Point {
    let dx = p.x - center.x;
    let dy = p.y - center.y;

    let (rx, ry) = match angle.normalized().0 {
        0 => (dx, dy),
        900 => (-dy, dx),
        1800 => (-dx, -dy),
        2700 => (dy, -dx),
        _ => {
            let rad = angle.radians();
            let (sin, cos) = rad.sin_cos();
            let fx = dx as f64 * cos - dy as f64 * sin;
            let fy = dx as f64 * sin + dy as f64 * cos;
            // f64::round is round-half-away-from-zero.
            (fx.round() as i32, fy.round() as i32)
        }
    };

    Point::new(center.x + rx, center.y + ry)
}

/// Reflect `p` across the vertical line `x = axis_x`.
pub fn mirror_point_x(p: Point, axis_x: i32) -> Point {
    Point::new(2 * axis_x - p.x, p.y)
}

/// Reflect `p` across the horizontal line `y = axis_y`.
pub fn mirror_point_y(p: Point, axis_y: i32) -> Point {
    Point::new(p.x, 2 * axis_y - p.y)
}

/// An axis-aligned bounding rectangle in internal units.
///
/// Always kept normalized: `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    min: Point,
    max: Point,
}

impl BoundingBox {
    /// A degenerate box containing a single point.
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Build from two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The smallest box covering a point sequence. `None` if empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        let mut bbox = Self::from_point(first);
        for p in &points[1..] {
            bbox.include(*p);
        }
        Some(bbox)
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + self.width() / 2,
            self.min.y + self.height() / 2,
        )
    }

    /// Grow to cover `p`.
    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Union with another box.
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Widen every edge by `margin` units (negative shrinks).
    pub fn inflated(&self, margin: i32) -> BoundingBox {
        BoundingBox::from_corners(
            Point::new(self.min.x - margin, self.min.y - margin),
            Point::new(self.max.x + margin, self.max.y + margin),
        )
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns_are_exact() {
        let center = Point::new(17, -5);
        let start = Point::new(1000003, 31);
        let mut p = start;
        for _ in 0..4 {
            p = rotate_point(p, center, Angle::DEG_90);
        }
        assert_eq!(p, start);
    }

    #[test]
    fn mirror_composition_is_half_turn() {
        let p = Point::new(123, -456);
        let mirrored = mirror_point_y(mirror_point_x(p, 10), -20);
        let rotated = rotate_point(p, Point::new(10, -20), Angle::DEG_180);
        assert_eq!(mirrored, rotated);
    }

    #[test]
    fn bbox_merge_and_inflate() {
        let a = BoundingBox::from_corners(Point::new(0, 0), Point::new(10, 10));
        let b = BoundingBox::from_corners(Point::new(20, -5), Point::new(5, 5));
        let m = a.merge(&b);
        assert_eq!(m.min(), Point::new(0, -5));
        assert_eq!(m.max(), Point::new(20, 10));
        assert!(m.inflated(5).contains_point(Point::new(-3, -8)));
    }
}
