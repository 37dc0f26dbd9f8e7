//! Batch DXF export, including the abort-at-first-failure policy.

use boardkit_core::{Color, Layer, LayerColors, Point};
use boardkit_items::{plot_sheets, Document, ExportOptions, Item, Segment};

struct FlatColors;

impl LayerColors for FlatColors {
    fn layer_color(&self, _layer: Layer) -> Color {
        Color::rgb(0, 132, 0)
    }
}

fn sheet(name: &str) -> Document {
    let mut doc = Document::new(name);
    doc.add_item(Item::Segment(Segment::new(
        Point::new(0, 0),
        Point::new(10_000_000, 5_000_000),
        150_000,
        Layer::Wire,
    )));
    doc
}

#[test]
fn exports_one_dxf_file_per_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let sheets = vec![sheet("root"), sheet("power")];

    let report = plot_sheets(
        &sheets,
        dir.path(),
        &FlatColors,
        &ExportOptions::default(),
    );

    assert!(report.all_succeeded());
    assert!(!report.aborted);
    assert_eq!(report.sheets.len(), 2);

    for name in ["root.dxf", "power.dxf"] {
        let content = std::fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(content.contains("ENTITIES"), "{name} missing entities");
        assert!(content.contains("LINE"), "{name} missing line");
        assert!(content.contains("EOF"), "{name} not terminated");
    }
}

#[test]
fn batch_stops_at_first_failing_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let sheets = vec![sheet("first"), sheet("second"), sheet("third")];

    // Occupy the second sheet's output path with a directory so the
    // file cannot be created.
    std::fs::create_dir(dir.path().join("second.dxf")).unwrap();

    let report = plot_sheets(
        &sheets,
        dir.path(),
        &FlatColors,
        &ExportOptions::default(),
    );

    assert_eq!(report.sheets.len(), 2);
    assert!(report.sheets[0].succeeded());
    assert!(!report.sheets[1].succeeded());
    assert!(report.aborted);
    assert!(!report.all_succeeded());

    // The third sheet was never attempted.
    assert!(dir.path().join("first.dxf").is_file());
    assert!(!dir.path().join("third.dxf").exists());
}

#[test]
fn failure_on_the_last_sheet_is_not_an_abort() {
    let dir = tempfile::tempdir().unwrap();
    let sheets = vec![sheet("only"), sheet("last")];
    std::fs::create_dir(dir.path().join("last.dxf")).unwrap();

    let report = plot_sheets(
        &sheets,
        dir.path(),
        &FlatColors,
        &ExportOptions::default(),
    );

    assert_eq!(report.sheets.len(), 2);
    assert!(!report.aborted);
    assert!(!report.all_succeeded());
}

#[test]
fn sheet_names_are_sanitized_for_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let sheets = vec![sheet("power rail / 3v3")];

    let report = plot_sheets(
        &sheets,
        dir.path(),
        &FlatColors,
        &ExportOptions::default(),
    );

    assert!(report.all_succeeded());
    assert!(dir.path().join("power_rail___3v3.dxf").is_file());
}

#[test]
fn frame_option_emits_a_border_polyline() {
    let dir = tempfile::tempdir().unwrap();
    let sheets = vec![sheet("framed")];
    let options = ExportOptions {
        frame: Some((297_000_000, 210_000_000)),
        ..ExportOptions::default()
    };

    let report = plot_sheets(&sheets, dir.path(), &FlatColors, &options);
    assert!(report.all_succeeded());

    let content = std::fs::read_to_string(dir.path().join("framed.dxf")).unwrap();
    assert!(content.contains("LWPOLYLINE"));
}
