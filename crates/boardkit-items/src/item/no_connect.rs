use boardkit_core::geometry::{mirror_point_x, mirror_point_y};
use boardkit_core::{rotate_point, Angle, BoundingBox, Layer, Point, Vector};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use super::{Connectable, ConnectionPoints, Item, Transform};
use crate::plot::{PlotResult, Plotter};

/// A no-connect marker: denotes an intentionally unconnected pin or
/// wire endpoint, drawn as an X centered on the position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoConnect {
    pub position: Point,
    /// Edge length of the X marker.
    pub size: i32,
}

impl NoConnect {
    pub fn new(position: Point, size: i32) -> Self {
        Self { position, size }
    }

    pub fn layer(&self) -> Layer {
        Layer::NoConnect
    }

    fn half(&self) -> i32 {
        self.size / 2
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_point(self.position).inflated(self.half())
    }

    pub fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        let delta = pos - self.position;
        let reach = self.half() + tolerance;
        delta.x.abs() <= reach && delta.y.abs() <= reach
    }

    pub fn plot(&self, plotter: &mut dyn Plotter) -> PlotResult {
        let h = self.half();
        let p = self.position;
        plotter.line(
            Point::new(p.x - h, p.y - h),
            Point::new(p.x + h, p.y + h),
            0,
        )?;
        plotter.line(
            Point::new(p.x - h, p.y + h),
            Point::new(p.x + h, p.y - h),
            0,
        )
    }
}

impl Transform for NoConnect {
    fn translate(&mut self, v: Vector) {
        self.position += v;
    }

    fn rotate(&mut self, center: Point, angle: Angle) {
        self.position = rotate_point(self.position, center, angle);
    }

    fn mirror_x(&mut self, axis_x: i32) {
        self.position = mirror_point_x(self.position, axis_x);
    }

    fn mirror_y(&mut self, axis_y: i32) {
        self.position = mirror_point_y(self.position, axis_y);
    }
}

impl Connectable for NoConnect {
    fn is_connectable(&self) -> bool {
        true
    }

    /// Accepts wires on the wire layer and component pins, rejects
    /// everything else.
    fn can_connect(&self, other: &Item) -> bool {
        matches!(other, Item::Segment(s) if s.layer == Layer::Wire)
            || matches!(other, Item::Pin(_))
    }

    fn connection_points(&self) -> ConnectionPoints {
        smallvec![self.position]
    }
}
