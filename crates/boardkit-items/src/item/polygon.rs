use boardkit_core::geometry::{mirror_point_x, mirror_point_y};
use boardkit_core::{rotate_point, Angle, BoundingBox, Layer, Point, Vector};
use serde::{Deserialize, Serialize};

use super::{dist_to_segment, Connectable, Transform};
use crate::plot::{PlotResult, Plotter};

/// A closed polygonal outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub width: i32,
    pub layer: Layer,
    /// Filled polygons hit-test on the interior, outlines on the edge.
    pub filled: bool,
}

impl Polygon {
    pub fn new(points: Vec<Point>, width: i32, layer: Layer) -> Self {
        Self {
            points,
            width,
            layer,
            filled: false,
        }
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
            .unwrap_or_else(|| BoundingBox::from_point(Point::ORIGIN))
            .inflated(self.width / 2)
    }

    /// Even-odd interior test, ignoring stroke width.
    fn contains(&self, pos: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (pi, pj) = (self.points[i], self.points[j]);
            if (pi.y > pos.y) != (pj.y > pos.y) {
                let x = pi.x as f64
                    + (pos.y - pi.y) as f64 * (pj.x - pi.x) as f64 / (pj.y - pi.y) as f64;
                if (pos.x as f64) < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    pub fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        if self.points.is_empty() {
            return false;
        }
        if self.filled && self.contains(pos) {
            return true;
        }
        let limit = (self.width / 2 + tolerance) as f64;
        let n = self.points.len();
        (0..n).any(|i| dist_to_segment(pos, self.points[i], self.points[(i + 1) % n]) <= limit)
    }

    pub fn plot(&self, plotter: &mut dyn Plotter) -> PlotResult {
        plotter.polyline(&self.points, self.width, true)
    }
}

impl Transform for Polygon {
    fn translate(&mut self, v: Vector) {
        for p in &mut self.points {
            *p += v;
        }
    }

    fn rotate(&mut self, center: Point, angle: Angle) {
        for p in &mut self.points {
            *p = rotate_point(*p, center, angle);
        }
    }

    fn mirror_x(&mut self, axis_x: i32) {
        for p in &mut self.points {
            *p = mirror_point_x(*p, axis_x);
        }
    }

    fn mirror_y(&mut self, axis_y: i32) {
        for p in &mut self.points {
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

impl Connectable for Polygon {}
