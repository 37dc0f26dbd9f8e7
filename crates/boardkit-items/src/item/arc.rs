use boardkit_core::geometry::{mirror_point_x, mirror_point_y};
use boardkit_core::{rotate_point, Angle, BoundingBox, Layer, Point, Vector};
use serde::{Deserialize, Serialize};

use super::{dist_to_segment, Connectable, Transform};
use crate::plot::{PlotResult, Plotter};

/// A circular arc: center, a point where the arc starts, and a signed
/// sweep. The end point is derived, so rotations stay exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    /// Point on the circumference where the arc begins.
    pub start: Point,
    /// Signed sweep, counter-clockwise positive.
    pub sweep: Angle,
    pub width: i32,
    pub layer: Layer,
}

impl Arc {
    pub fn new(center: Point, start: Point, sweep: Angle, width: i32, layer: Layer) -> Self {
        Self {
            center,
            start,
            sweep,
            width,
            layer,
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn radius(&self) -> f64 {
        self.center.distance_to(&self.start)
    }

    pub fn end(&self) -> Point {
        rotate_point(self.start, self.center, self.sweep)
    }

    /// Angle of the start point from the center, in tenths of a degree.
    pub fn start_angle(&self) -> Angle {
        let dy = (self.start.y - self.center.y) as f64;
        let dx = (self.start.x - self.center.x) as f64;
        Angle::from_degrees(dy.atan2(dx).to_degrees())
    }

    /// Sampled polyline along the arc, used by hit testing and bounds.
    /// One sample per five degrees of sweep, endpoints always included.
    pub fn polyline(&self) -> Vec<Point> {
        let steps = (self.sweep.0.abs() / 50).max(1) as usize;
        let mut pts = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let a = Angle(self.sweep.0 * i as i32 / steps as i32);
            pts.push(rotate_point(self.start, self.center, a));
        }
        pts
    }

    pub fn bounding_box(&self) -> BoundingBox {
        // Safe: polyline always yields at least two points.
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
        plotter.arc(
            self.center,
            self.radius().round() as i32,
            self.start_angle(),
            self.sweep,
            self.width,
        )
    }
}

impl Transform for Arc {
    fn translate(&mut self, v: Vector) {
        self.center += v;
        self.start += v;
    }

    fn rotate(&mut self, center: Point, angle: Angle) {
        self.center = rotate_point(self.center, center, angle);
        self.start = rotate_point(self.start, center, angle);
    }

    fn mirror_x(&mut self, axis_x: i32) {
        self.center = mirror_point_x(self.center, axis_x);
        self.start = mirror_point_x(self.start, axis_x);
        self.sweep = -self.sweep;
    }

    fn mirror_y(&mut self, axis_y: i32) {
        self.center = mirror_point_y(self.center, axis_y);
        self.start = mirror_point_y(self.start, axis_y);
        self.sweep = -self.sweep;
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

impl Connectable for Arc {}
