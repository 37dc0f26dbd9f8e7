//! # Boardkit Items
//!
//! The drawable-item model: a closed set of geometry variants behind
//! shared transform and connectivity contracts, a document arena that
//! owns items and footprints, and vector plot export.

pub mod document;
pub mod item;
pub mod plot;
pub mod serialization;

pub use document::{Document, Footprint, FootprintId, ItemId};
pub use item::{
    Arc, Bezier, Circle, Connectable, Item, ItemKind, NoConnect, Pin, Polygon, Segment, Transform,
};
pub use plot::{plot_sheets, DxfPlotter, ExportOptions, ExportReport, Plotter, SheetReport};
pub use serialization::{load_design, save_design, DesignFile, DesignMetadata};
