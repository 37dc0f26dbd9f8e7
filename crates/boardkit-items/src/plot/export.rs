//! Batch sheet export.
//!
//! Drives the per-sheet plot sequence: build the output file name, open
//! the target, emit the optional frame, plot every item, close. A sheet
//! whose target cannot be opened aborts the batch at that sheet; earlier
//! sheets keep their results. An I/O fault during an in-progress plot
//! aborts the same way.

use boardkit_core::error::PlotError;
use boardkit_core::{Color, LayerColors, Point};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{DxfPlotter, Plotter};
use crate::document::Document;

/// Options for a batch export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Plot a page frame (border rectangle) of this width and height,
    /// in internal units, before the items.
    pub frame: Option<(i32, i32)>,
    /// Ignore the theme and plot everything in black.
    pub monochrome: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            frame: None,
            monochrome: false,
        }
    }
}

/// Outcome for one attempted sheet.
#[derive(Debug)]
pub struct SheetReport {
    pub sheet: String,
    pub path: PathBuf,
    pub error: Option<PlotError>,
}

impl SheetReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of a whole batch.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub sheets: Vec<SheetReport>,
    /// Whether the batch stopped before attempting every sheet.
    pub aborted: bool,
}

impl ExportReport {
    pub fn all_succeeded(&self) -> bool {
        !self.aborted && self.sheets.iter().all(SheetReport::succeeded)
    }
}

/// File-system safe name for a sheet.
fn sheet_file_name(sheet: &Document) -> String {
    let base: String = sheet
        .name()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    if base.is_empty() {
        "sheet".to_string()
    } else {
        base
    }
}

fn plot_one_sheet(
    sheet: &Document,
    path: &Path,
    colors: &dyn LayerColors,
    options: &ExportOptions,
) -> Result<(), PlotError> {
    let mut plotter = DxfPlotter::new();
    plotter.open(path)?;
    plotter.start_plot("boardkit-dxf")?;

    if let Some((w, h)) = options.frame {
        plotter.set_color(Color::BLACK);
        let frame = [
            Point::ORIGIN,
            Point::new(w, 0),
            Point::new(w, h),
            Point::new(0, h),
        ];
        plotter.polyline(&frame, 0, true)?;
    }

    for item in sheet.items() {
        let color = if options.monochrome {
            Color::BLACK
        } else {
            colors.layer_color(item.layer())
        };
        item.plot(&mut plotter, color)?;
    }

    plotter.end_plot()
}

/// Plot every sheet into `out_dir`, one file per sheet.
///
/// Returns per-sheet outcomes. The batch stops at the first sheet whose
/// target fails to open or whose plot faults mid-write; remaining sheets
/// are not attempted.
pub fn plot_sheets(
    sheets: &[Document],
    out_dir: &Path,
    colors: &dyn LayerColors,
    options: &ExportOptions,
) -> ExportReport {
    let mut report = ExportReport::default();

    for (index, sheet) in sheets.iter().enumerate() {
        let path = out_dir.join(format!("{}.dxf", sheet_file_name(sheet)));

        match plot_one_sheet(sheet, &path, colors, options) {
            Ok(()) => {
                info!("Plotted \"{}\" to {}", sheet.name(), path.display());
                report.sheets.push(SheetReport {
                    sheet: sheet.name().to_string(),
                    path,
                    error: None,
                });
            }
            Err(err) => {
                warn!("Plot of \"{}\" failed: {err}", sheet.name());
                report.sheets.push(SheetReport {
                    sheet: sheet.name().to_string(),
                    path,
                    error: Some(err),
                });
                report.aborted = index + 1 < sheets.len();
                break;
            }
        }
    }

    report
}
