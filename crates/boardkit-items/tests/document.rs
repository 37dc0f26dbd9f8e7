//! Document arena behavior: footprint local/world sync, connectivity
//! queries, hit testing and snapshot independence.

use boardkit_core::{Angle, Layer, Point, Vector};
use boardkit_items::{
    Connectable, Document, Footprint, Item, NoConnect, Pin, Segment, Transform,
};

fn wire(x1: i32, y1: i32, x2: i32, y2: i32) -> Item {
    Item::Segment(Segment::new(
        Point::new(x1, y1),
        Point::new(x2, y2),
        150,
        Layer::Wire,
    ))
}

#[test]
fn footprint_children_follow_footprint_moves() {
    let mut doc = Document::new("board");
    let fp = doc.add_footprint(Footprint::new(Point::new(1000, 2000), "U1"));
    let pad = doc
        .add_footprint_item(
            fp,
            Item::Segment(Segment::new(
                Point::new(0, 0),
                Point::new(100, 0),
                50,
                Layer::CopperFront,
            )),
        )
        .unwrap();

    // Placed at the footprint position.
    let world = doc.item(pad).unwrap().clone();
    assert_eq!(world.bounding_box().min(), Point::new(975, 1975));

    doc.translate_footprint(fp, Vector::new(-1000, -2000));
    let world = doc.item(pad).unwrap();
    assert_eq!(world.bounding_box().center(), Point::new(50, 0));
}

#[test]
fn footprint_rotation_rotates_children_about_footprint_origin() {
    let mut doc = Document::new("board");
    let fp = doc.add_footprint(Footprint::new(Point::ORIGIN, "U2"));
    let pad = doc
        .add_footprint_item(
            fp,
            Item::Segment(Segment::new(
                Point::new(100, 0),
                Point::new(200, 0),
                0,
                Layer::CopperFront,
            )),
        )
        .unwrap();

    doc.rotate_footprint(fp, Point::ORIGIN, Angle::DEG_90);
    let Item::Segment(s) = doc.item(pad).unwrap() else {
        panic!("pad changed kind");
    };
    assert_eq!(s.start, Point::new(0, 100));
    assert_eq!(s.end, Point::new(0, 200));
}

#[test]
fn flipping_a_footprint_remaps_child_layers() {
    let mut doc = Document::new("board");
    let fp = doc.add_footprint(Footprint::new(Point::new(500, 0), "U3"));
    let silk = doc
        .add_footprint_item(
            fp,
            Item::Segment(Segment::new(
                Point::new(-100, 0),
                Point::new(100, 0),
                0,
                Layer::SilkFront,
            )),
        )
        .unwrap();

    doc.flip_footprint(fp, Point::new(500, 0), true);
    assert_eq!(doc.item(silk).unwrap().layer(), Layer::SilkBack);

    // Flipping back restores both side and geometry.
    doc.flip_footprint(fp, Point::new(500, 0), true);
    let Item::Segment(s) = doc.item(silk).unwrap() else {
        panic!("child changed kind");
    };
    assert_eq!(s.layer, Layer::SilkFront);
    assert_eq!(s.start, Point::new(400, 0));
    assert_eq!(s.end, Point::new(600, 0));
}

#[test]
fn flipping_a_footprint_up_down_matches_item_level_flip() {
    let mut doc = Document::new("board");
    let fp = doc.add_footprint(Footprint::new(Point::ORIGIN, "U5"));
    let local = Segment::new(Point::new(0, 0), Point::new(100, 50), 0, Layer::SilkFront);
    let child = doc
        .add_footprint_item(fp, Item::Segment(local.clone()))
        .unwrap();

    // An up-down footprint flip must act on the children exactly like
    // flipping each world item across the horizontal axis.
    let mut expected = Item::Segment(local);
    expected.flip(Point::ORIGIN, false);

    doc.flip_footprint(fp, Point::ORIGIN, false);
    assert_eq!(doc.item(child).unwrap(), &expected);
    let Item::Segment(s) = doc.item(child).unwrap() else {
        panic!("child changed kind");
    };
    assert_eq!(s.end, Point::new(100, -50));
    assert_eq!(s.layer, Layer::SilkBack);
}

#[test]
fn up_down_flip_of_a_rotated_footprint() {
    let mut doc = Document::new("board");
    let fp = doc.add_footprint(Footprint::new(Point::ORIGIN, "U6"));
    let pad = doc
        .add_footprint_item(
            fp,
            Item::Segment(Segment::new(
                Point::new(0, 0),
                Point::new(100, 0),
                0,
                Layer::CopperFront,
            )),
        )
        .unwrap();

    doc.rotate_footprint(fp, Point::ORIGIN, Angle::DEG_90);
    doc.flip_footprint(fp, Point::ORIGIN, false);

    // World before the flip ran (0,0)-(0,100); mirroring it across the
    // horizontal axis gives (0,0)-(0,-100) on the back copper.
    let Item::Segment(s) = doc.item(pad).unwrap() else {
        panic!("pad changed kind");
    };
    assert_eq!(s.start, Point::new(0, 0));
    assert_eq!(s.end, Point::new(0, -100));
    assert_eq!(s.layer, Layer::CopperBack);

    // A second up-down flip restores the pre-flip world geometry.
    doc.flip_footprint(fp, Point::ORIGIN, false);
    let Item::Segment(s) = doc.item(pad).unwrap() else {
        panic!("pad changed kind");
    };
    assert_eq!(s.end, Point::new(0, 100));
    assert_eq!(s.layer, Layer::CopperFront);
}

#[test]
fn editing_world_geometry_updates_local_copy() {
    let mut doc = Document::new("board");
    let fp = doc.add_footprint(Footprint::new(Point::new(1000, 0), "U4"));
    let pad = doc
        .add_footprint_item(
            fp,
            Item::Segment(Segment::new(
                Point::new(0, 0),
                Point::new(100, 0),
                0,
                Layer::CopperFront,
            )),
        )
        .unwrap();

    // Drag the pad in world space, then move the footprint: the edit
    // must survive because the local copy was re-derived.
    doc.update_item(pad, |item| item.translate(Vector::new(0, 50)));
    doc.translate_footprint(fp, Vector::new(100, 0));

    let Item::Segment(s) = doc.item(pad).unwrap() else {
        panic!("pad changed kind");
    };
    assert_eq!(s.start, Point::new(1100, 50));
    assert_eq!(s.end, Point::new(1200, 50));
}

#[test]
fn connectivity_matrix() {
    let w = wire(0, 0, 100, 0);
    let b = Item::Segment(Segment::new(
        Point::new(0, 0),
        Point::new(100, 0),
        150,
        Layer::Bus,
    ));
    let graphic = Item::Segment(Segment::new(
        Point::new(0, 0),
        Point::new(100, 0),
        150,
        Layer::Notes,
    ));
    let pin = Item::Pin(Pin::new(Point::new(0, 0), 100, Angle::ZERO, "1"));
    let nc = Item::NoConnect(NoConnect::new(Point::new(100, 0), 25));

    assert!(w.is_connectable());
    assert!(b.is_connectable());
    assert!(!graphic.is_connectable());
    assert!(pin.is_connectable());
    assert!(nc.is_connectable());

    // Wires accept wires, pins and no-connects; buses only buses.
    assert!(w.can_connect(&pin));
    assert!(w.can_connect(&nc));
    assert!(w.can_connect(&wire(0, 0, 0, 50)));
    assert!(!w.can_connect(&b));
    assert!(b.can_connect(&b.clone()));
    assert!(!b.can_connect(&w));

    assert!(pin.can_connect(&w));
    assert!(!pin.can_connect(&b));
    assert!(nc.can_connect(&pin));

    // Non-connectable graphics refuse everything.
    assert!(!graphic.can_connect(&w));
    assert!(graphic.connection_points().is_empty());
}

#[test]
fn connection_points_are_endpoints() {
    let w = wire(10, 20, 30, 40);
    let pts = w.connection_points();
    assert_eq!(pts.as_slice(), &[Point::new(10, 20), Point::new(30, 40)]);

    let pin = Item::Pin(Pin::new(Point::new(7, 8), 100, Angle::ZERO, "3"));
    assert_eq!(pin.connection_points().as_slice(), &[Point::new(7, 8)]);
}

#[test]
fn hit_testing_respects_tolerance_and_containment() {
    let mut doc = Document::new("sheet");
    let id = doc.add_item(wire(0, 0, 1000, 0));

    // The stroke is 150 wide, so the edge sits 75 from the centerline.
    assert_eq!(doc.items_at(Point::new(500, 100), 0), Vec::new());
    assert_eq!(doc.items_at(Point::new(500, 100), 30), vec![id]);

    let item = doc.item(id).unwrap();
    let tight = boardkit_core::BoundingBox::from_corners(Point::new(10, -80), Point::new(990, 80));
    assert!(item.hit_test_rect(&tight, false, 0));
    assert!(!item.hit_test_rect(&tight, true, 0));
    assert!(item.hit_test_rect(&tight, true, 100));
}

#[test]
fn snapshots_share_nothing() {
    let mut doc = Document::new("sheet");
    let id = doc.add_item(wire(0, 0, 100, 0));
    let snapshot = doc.snapshot();

    doc.update_item(id, |item| item.translate(Vector::new(5000, 0)));
    doc.add_item(wire(0, 100, 100, 100));

    assert_eq!(snapshot.item_count(), 1);
    let Item::Segment(s) = snapshot.item(id).unwrap() else {
        panic!("item changed kind");
    };
    assert_eq!(s.start, Point::ORIGIN);
}

#[test]
fn removed_items_disappear_from_iteration() {
    let mut doc = Document::new("sheet");
    let a = doc.add_item(wire(0, 0, 100, 0));
    let b = doc.add_item(wire(0, 100, 100, 100));
    assert_eq!(doc.item_count(), 2);

    assert!(doc.remove_item(a).is_some());
    assert!(doc.item(a).is_none());
    assert!(doc.remove_item(a).is_none());
    assert_eq!(doc.item_ids().collect::<Vec<_>>(), vec![b]);
}

#[test]
fn clone_of_item_is_independent() {
    let original = wire(0, 0, 100, 0);
    let mut copy = original.clone();
    copy.translate(Vector::new(1, 1));
    assert_ne!(copy, original);
    assert_eq!(original.bounding_box().center(), Point::new(50, 0));
}
