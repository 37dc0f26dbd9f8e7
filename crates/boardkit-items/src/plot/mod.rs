//! Vector plot export.
//!
//! [`Plotter`] is the abstract plotting target every item knows how to
//! emit itself onto; [`DxfPlotter`] is the concrete DXF backend. The
//! batch exporter in [`export`] drives the open → frame → items → close
//! sequencing per sheet; items never manage target lifetime themselves.

mod dxf;
mod export;

pub use dxf::DxfPlotter;
pub use export::{plot_sheets, ExportOptions, ExportReport, SheetReport};

use boardkit_core::error::PlotError;
use boardkit_core::{Angle, Color, Point};
use std::path::Path;

/// Result of a single plot primitive.
pub type PlotResult = Result<(), PlotError>;

/// An abstract vector plotting target.
///
/// Coordinates are internal units; backends convert to their own units
/// on output. A plotter must be `open`ed before any drawing call and
/// `end_plot` flushes and closes the target.
pub trait Plotter {
    /// Open the output target. Failure is recoverable per target.
    fn open(&mut self, path: &Path) -> PlotResult;

    /// Emit the header. Must be called once after `open`.
    fn start_plot(&mut self, creator: &str) -> PlotResult;

    /// Set the stroke color for subsequent primitives.
    fn set_color(&mut self, color: Color);

    fn line(&mut self, a: Point, b: Point, width: i32) -> PlotResult;

    fn circle(&mut self, center: Point, radius: i32, width: i32) -> PlotResult;

    fn arc(
        &mut self,
        center: Point,
        radius: i32,
        start: Angle,
        sweep: Angle,
        width: i32,
    ) -> PlotResult;

    fn polyline(&mut self, points: &[Point], width: i32, closed: bool) -> PlotResult;

    /// Emit the trailer, flush, and close the target.
    fn end_plot(&mut self) -> PlotResult;

    /// Default file extension for this backend, without the dot.
    fn default_extension(&self) -> &'static str;
}
