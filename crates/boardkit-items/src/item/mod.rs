//! Drawable items.
//!
//! Every geometric entity placed in a schematic or board document is one
//! of the variants of [`Item`]. Behavior shared by all variants lives in
//! two capability traits: [`Transform`] for the geometric operations and
//! [`Connectable`] for electrical connectivity queries. Variants are
//! plain value types; `Clone` produces a fully independent deep copy,
//! which is what undo/redo snapshots rely on.

use boardkit_core::{Angle, BoundingBox, Color, Layer, Point, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::plot::{PlotResult, Plotter};

mod arc;
mod bezier;
mod circle;
mod no_connect;
mod pin;
mod polygon;
mod segment;

pub use arc::Arc;
pub use bezier::Bezier;
pub use circle::Circle;
pub use no_connect::NoConnect;
pub use pin::Pin;
pub use polygon::Polygon;
pub use segment::Segment;

/// World-coordinate points at which an item may join others. Most
/// connectable items have one or two.
pub type ConnectionPoints = SmallVec<[Point; 2]>;

/// Geometric operations every item supports.
///
/// All coordinates are integer internal units. `translate` is exact
/// under negation; `rotate` rounds half away from zero and is exact for
/// quarter turns; composing `mirror_x` and `mirror_y` equals a half
/// turn about the axis intersection.
pub trait Transform {
    /// Translate all geometry by `v`.
    fn translate(&mut self, v: Vector);

    /// Rotate all geometry about `center` by `angle`.
    fn rotate(&mut self, center: Point, angle: Angle);

    /// Reflect across the vertical line `x = axis_x`.
    fn mirror_x(&mut self, axis_x: i32);

    /// Reflect across the horizontal line `y = axis_y`.
    fn mirror_y(&mut self, axis_y: i32);

    /// Mirror about `center` and remap the layer to its board-side pair.
    ///
    /// `left_right` selects the mirror axis: `true` mirrors across the
    /// vertical line through `center`, `false` across the horizontal
    /// one. Callers must flip the owning footprint or sheet context
    /// first; this is not checked here.
    fn flip(&mut self, center: Point, left_right: bool) {
        if left_right {
            self.mirror_x(center.x);
        } else {
            self.mirror_y(center.y);
        }
    }
}

/// Electrical connectivity queries.
///
/// This contract only declares local compatibility between two items;
/// global net resolution belongs to an external connectivity pass.
pub trait Connectable {
    /// Whether this item participates in connectivity at all.
    fn is_connectable(&self) -> bool {
        false
    }

    /// Asymmetric compatibility: can `other` join this item at one of
    /// its connection points?
    fn can_connect(&self, _other: &Item) -> bool {
        false
    }

    /// The points at which this item may join others. Empty for
    /// non-connectable items.
    fn connection_points(&self) -> ConnectionPoints {
        ConnectionPoints::new()
    }
}

/// Discriminant for [`Item`], used by serialization and selection UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Segment,
    Arc,
    Circle,
    Bezier,
    Polygon,
    Pin,
    NoConnect,
}

/// The closed union of drawable items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Segment(Segment),
    Arc(Arc),
    Circle(Circle),
    Bezier(Bezier),
    Polygon(Polygon),
    Pin(Pin),
    NoConnect(NoConnect),
}

macro_rules! dispatch {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            Item::Segment($inner) => $body,
            Item::Arc($inner) => $body,
            Item::Circle($inner) => $body,
            Item::Bezier($inner) => $body,
            Item::Polygon($inner) => $body,
            Item::Pin($inner) => $body,
            Item::NoConnect($inner) => $body,
        }
    };
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Segment(_) => ItemKind::Segment,
            Item::Arc(_) => ItemKind::Arc,
            Item::Circle(_) => ItemKind::Circle,
            Item::Bezier(_) => ItemKind::Bezier,
            Item::Polygon(_) => ItemKind::Polygon,
            Item::Pin(_) => ItemKind::Pin,
            Item::NoConnect(_) => ItemKind::NoConnect,
        }
    }

    pub fn layer(&self) -> Layer {
        dispatch!(self, s => s.layer())
    }

    /// Minimal axis-aligned rectangle covering the geometry, in world
    /// coordinates.
    pub fn bounding_box(&self) -> BoundingBox {
        dispatch!(self, s => s.bounding_box())
    }

    /// Point-in-shape predicate; `tolerance` widens the effective
    /// boundary by that many internal units.
    pub fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        dispatch!(self, s => s.hit_test(pos, tolerance))
    }

    /// Rectangle predicate. With `contained` the item must lie entirely
    /// inside `rect`; otherwise any overlap hits. `tolerance` widens
    /// `rect`.
    pub fn hit_test_rect(&self, rect: &BoundingBox, contained: bool, tolerance: i32) -> bool {
        let rect = rect.inflated(tolerance);
        let bbox = self.bounding_box();
        if contained {
            rect.contains_box(&bbox)
        } else {
            rect.intersects(&bbox)
        }
    }

    /// Emit this item's geometry to a plotting target. `color` is the
    /// resolved layer color; sequencing of open/close is the caller's
    /// responsibility.
    pub fn plot(&self, plotter: &mut dyn Plotter, color: Color) -> PlotResult {
        plotter.set_color(color);
        dispatch!(self, s => s.plot(plotter))
    }
}

impl Transform for Item {
    fn translate(&mut self, v: Vector) {
        dispatch!(self, s => s.translate(v))
    }

    fn rotate(&mut self, center: Point, angle: Angle) {
        dispatch!(self, s => s.rotate(center, angle))
    }

    fn mirror_x(&mut self, axis_x: i32) {
        dispatch!(self, s => s.mirror_x(axis_x))
    }

    fn mirror_y(&mut self, axis_y: i32) {
        dispatch!(self, s => s.mirror_y(axis_y))
    }

    fn flip(&mut self, center: Point, left_right: bool) {
        dispatch!(self, s => s.flip(center, left_right))
    }
}

impl Connectable for Item {
    fn is_connectable(&self) -> bool {
        dispatch!(self, s => s.is_connectable())
    }

    fn can_connect(&self, other: &Item) -> bool {
        dispatch!(self, s => s.can_connect(other))
    }

    fn connection_points(&self) -> ConnectionPoints {
        dispatch!(self, s => s.connection_points())
    }
}

/// Distance from `p` to the segment `a..b`, in internal units.
pub(crate) fn dist_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let abx = (b.x - a.x) as f64;
    let aby = (b.y - a.y) as f64;
    let apx = (p.x - a.x) as f64;
    let apy = (p.y - a.y) as f64;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0);
    let cx = a.x as f64 + t * abx;
    let cy = a.y as f64 + t * aby;
    ((p.x as f64 - cx).powi(2) + (p.y as f64 - cy).powi(2)).sqrt()
}
