use boardkit_core::geometry::{mirror_point_x, mirror_point_y};
use boardkit_core::{rotate_point, Angle, BoundingBox, Layer, Point, Vector};
use serde::{Deserialize, Serialize};

use super::{Connectable, Transform};
use crate::plot::{PlotResult, Plotter};

/// A circle outline, stored as a center and a point on the
/// circumference so integer transforms apply to both uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    /// Any point on the circumference; defines the radius.
    pub radius_point: Point,
    pub width: i32,
    pub layer: Layer,
}

impl Circle {
    pub fn new(center: Point, radius_point: Point, width: i32, layer: Layer) -> Self {
        Self {
            center,
            radius_point,
            width,
            layer,
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn radius(&self) -> f64 {
        self.center.distance_to(&self.radius_point)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let r = self.radius().ceil() as i32 + self.width / 2;
        BoundingBox::from_point(self.center).inflated(r)
    }

    /// Hits on the outline, not the disk interior.
    pub fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        let dist = self.center.distance_to(&pos);
        (dist - self.radius()).abs() <= (self.width / 2 + tolerance) as f64
    }

    pub fn plot(&self, plotter: &mut dyn Plotter) -> PlotResult {
        plotter.circle(self.center, self.radius().round() as i32, self.width)
    }
}

impl Transform for Circle {
    fn translate(&mut self, v: Vector) {
        self.center += v;
        self.radius_point += v;
    }

    fn rotate(&mut self, center: Point, angle: Angle) {
        self.center = rotate_point(self.center, center, angle);
        self.radius_point = rotate_point(self.radius_point, center, angle);
    }

    fn mirror_x(&mut self, axis_x: i32) {
        self.center = mirror_point_x(self.center, axis_x);
        self.radius_point = mirror_point_x(self.radius_point, axis_x);
    }

    fn mirror_y(&mut self, axis_y: i32) {
        self.center = mirror_point_y(self.center, axis_y);
        self.radius_point = mirror_point_y(self.radius_point, axis_y);
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

impl Connectable for Circle {}
