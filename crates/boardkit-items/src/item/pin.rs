use boardkit_core::geometry::{mirror_point_x, mirror_point_y};
use boardkit_core::{rotate_point, Angle, BoundingBox, Layer, Point, Vector};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use super::{dist_to_segment, Connectable, ConnectionPoints, Item, Transform};
use crate::plot::{PlotResult, Plotter};

/// A component pin: an electrical attachment point with a short lead.
///
/// The connection point is `position`; the lead is drawn from there
/// along `orientation` for `length` units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub position: Point,
    pub length: i32,
    pub orientation: Angle,
    pub number: String,
}

impl Pin {
    pub fn new(position: Point, length: i32, orientation: Angle, number: impl Into<String>) -> Self {
        Self {
            position,
            length,
            orientation,
            number: number.into(),
        }
    }

    pub fn layer(&self) -> Layer {
        Layer::Pin
    }

    /// The inner end of the lead, away from the connection point.
    pub fn lead_end(&self) -> Point {
        let tip = Point::new(self.position.x + self.length, self.position.y);
        rotate_point(tip, self.position, self.orientation)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_corners(self.position, self.lead_end())
    }

    pub fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        dist_to_segment(pos, self.position, self.lead_end()) <= tolerance as f64
    }

    pub fn plot(&self, plotter: &mut dyn Plotter) -> PlotResult {
        plotter.line(self.position, self.lead_end(), 0)
    }
}

impl Transform for Pin {
    fn translate(&mut self, v: Vector) {
        self.position += v;
    }

    fn rotate(&mut self, center: Point, angle: Angle) {
        self.position = rotate_point(self.position, center, angle);
        self.orientation = (self.orientation + angle).normalized();
    }

    fn mirror_x(&mut self, axis_x: i32) {
        self.position = mirror_point_x(self.position, axis_x);
        self.orientation = (Angle::DEG_180 - self.orientation).normalized();
    }

    fn mirror_y(&mut self, axis_y: i32) {
        self.position = mirror_point_y(self.position, axis_y);
        self.orientation = (-self.orientation).normalized();
    }
}

impl Connectable for Pin {
    fn is_connectable(&self) -> bool {
        true
    }

    fn can_connect(&self, other: &Item) -> bool {
        matches!(other, Item::Segment(s) if s.layer == Layer::Wire)
            || matches!(other, Item::NoConnect(_))
    }

    fn connection_points(&self) -> ConnectionPoints {
        smallvec![self.position]
    }
}
