use boardkit_core::geometry::{mirror_point_x, mirror_point_y};
use boardkit_core::{rotate_point, Angle, BoundingBox, Layer, Point, Vector};
use serde::{Deserialize, Serialize};

use super::{dist_to_segment, Connectable, Transform};
use crate::plot::{PlotResult, Plotter};

/// Number of line segments used to approximate a cubic bezier for
/// bounds, hit testing, and plotting.
const BEZIER_SEGMENTS: usize = 32;

/// A cubic bezier stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bezier {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
    pub width: i32,
    pub layer: Layer,
}

impl Bezier {
    pub fn new(
        start: Point,
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
        width: i32,
        layer: Layer,
    ) -> Self {
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
            width,
            layer,
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    fn control_points(&self) -> [Point; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    fn control_points_mut(&mut self) -> [&mut Point; 4] {
        [
            &mut self.start,
            &mut self.ctrl1,
            &mut self.ctrl2,
            &mut self.end,
        ]
    }

    /// Fixed-step polyline approximation of the curve.
    pub fn polyline(&self) -> Vec<Point> {
        let [p0, p1, p2, p3] = self.control_points();
        let mut pts = Vec::with_capacity(BEZIER_SEGMENTS + 1);
        for i in 0..=BEZIER_SEGMENTS {
            let t = i as f64 / BEZIER_SEGMENTS as f64;
            let u = 1.0 - t;
            let interp = |a: i32, b: i32, c: i32, d: i32| -> i32 {
                (u * u * u * a as f64
                    + 3.0 * u * u * t * b as f64
                    + 3.0 * u * t * t * c as f64
                    + t * t * t * d as f64)
                    .round() as i32
            };
            pts.push(Point::new(
                interp(p0.x, p1.x, p2.x, p3.x),
                interp(p0.y, p1.y, p2.y, p3.y),
            ));
        }
        pts
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.polyline())
            .unwrap_or_else(|| BoundingBox::from_point(self.start))
            .inflated(self.width / 2)
    }

    pub fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        let limit = (self.width / 2 + tolerance) as f64;
        self.polyline()
            .windows(2)
            .any(|w| dist_to_segment(pos, w[0], w[1]) <= limit)
    }

    pub fn plot(&self, plotter: &mut dyn Plotter) -> PlotResult {
        plotter.polyline(&self.polyline(), self.width, false)
    }
}

impl Transform for Bezier {
    fn translate(&mut self, v: Vector) {
        for p in self.control_points_mut() {
            *p += v;
        }
    }

    fn rotate(&mut self, center: Point, angle: Angle) {
        for p in self.control_points_mut() {
            *p = rotate_point(*p, center, angle);
        }
    }

    fn mirror_x(&mut self, axis_x: i32) {
        for p in self.control_points_mut() {
            *p = mirror_point_x(*p, axis_x);
        }
    }

    fn mirror_y(&mut self, axis_y: i32) {
        for p in self.control_points_mut() {
            *p = mirror_point_y(*p, axis_y);
        }
    }

    fn flip(&mut self, center: Point, left_right: bool) {
        if left_right {
            self.mirror_x(center.x);
        } else {
            self.mirror_y(center.y);
        }
        self.layer = self.layer.flipped();
    }
}

impl Connectable for Bezier {}
