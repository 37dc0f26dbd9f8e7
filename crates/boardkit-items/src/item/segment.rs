use boardkit_core::geometry::{mirror_point_x, mirror_point_y};
use boardkit_core::{rotate_point, Angle, BoundingBox, Layer, Point, Vector};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use super::{dist_to_segment, Connectable, ConnectionPoints, Item, Transform};
use crate::plot::{PlotResult, Plotter};

/// A straight stroke between two points.
///
/// On [`Layer::Wire`] or [`Layer::Bus`] a segment is an electrical
/// conductor with connection points at its endpoints; on board layers
/// it is a plain graphic edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    /// Stroke width in internal units.
    pub width: i32,
    pub layer: Layer,
}

impl Segment {
    pub fn new(start: Point, end: Point, width: i32, layer: Layer) -> Self {
        Self {
            start,
            end,
            width,
            layer,
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_corners(self.start, self.end).inflated(self.width / 2)
    }

    pub fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        dist_to_segment(pos, self.start, self.end) <= (self.width / 2 + tolerance) as f64
    }

    pub fn plot(&self, plotter: &mut dyn Plotter) -> PlotResult {
        plotter.line(self.start, self.end, self.width)
    }
}

impl Transform for Segment {
    fn translate(&mut self, v: Vector) {
        self.start += v;
        self.end += v;
    }

    fn rotate(&mut self, center: Point, angle: Angle) {
        self.start = rotate_point(self.start, center, angle);
        self.end = rotate_point(self.end, center, angle);
    }

    fn mirror_x(&mut self, axis_x: i32) {
        self.start = mirror_point_x(self.start, axis_x);
        self.end = mirror_point_x(self.end, axis_x);
    }

    fn mirror_y(&mut self, axis_y: i32) {
        self.start = mirror_point_y(self.start, axis_y);
        self.end = mirror_point_y(self.end, axis_y);
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

impl Connectable for Segment {
    fn is_connectable(&self) -> bool {
        matches!(self.layer, Layer::Wire | Layer::Bus)
    }

    fn can_connect(&self, other: &Item) -> bool {
        match self.layer {
            // Wires join other wires, pins, and no-connect markers.
            Layer::Wire => matches!(
                other,
                Item::Segment(s) if s.layer == Layer::Wire
            ) || matches!(other, Item::Pin(_) | Item::NoConnect(_)),
            // Buses only join buses.
            Layer::Bus => matches!(other, Item::Segment(s) if s.layer == Layer::Bus),
            _ => false,
        }
    }

    fn connection_points(&self) -> ConnectionPoints {
        if self.is_connectable() {
            smallvec![self.start, self.end]
        } else {
            ConnectionPoints::new()
        }
    }
}
