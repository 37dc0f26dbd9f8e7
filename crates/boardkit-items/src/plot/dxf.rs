//! Minimal ASCII DXF plotting backend.
//!
//! Emits an AC1015 document with LINE, CIRCLE, ARC, and LWPOLYLINE
//! entities, coordinates in millimeters, colors as 24-bit true color.
//! Stroke widths map to the entity line weight only loosely; DXF is a
//! wireframe exchange format here, not a fab output.

use boardkit_core::error::PlotError;
use boardkit_core::units::to_mm;
use boardkit_core::{Angle, Color, Point};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{PlotResult, Plotter};

/// DXF plotting target.
pub struct DxfPlotter {
    out: Option<BufWriter<File>>,
    path: PathBuf,
    color: Color,
}

impl DxfPlotter {
    pub fn new() -> Self {
        Self {
            out: None,
            path: PathBuf::new(),
            color: Color::BLACK,
        }
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>, PlotError> {
        self.out.as_mut().ok_or(PlotError::NotOpen)
    }

    fn emit(&mut self, text: &str) -> PlotResult {
        let path = self.path.clone();
        let w = self.writer()?;
        w.write_all(text.as_bytes())
            .map_err(|source| PlotError::WriteFault { path, source })
    }

    fn truecolor(&self) -> u32 {
        ((self.color.r as u32) << 16) | ((self.color.g as u32) << 8) | self.color.b as u32
    }

    /// Common entity prologue: type, layer, true color.
    fn entity(&mut self, kind: &str) -> PlotResult {
        let color = self.truecolor();
        self.emit(&format!("0\n{kind}\n8\n0\n420\n{color}\n"))
    }
}

impl Default for DxfPlotter {
    fn default() -> Self {
        Self::new()
    }
}

impl Plotter for DxfPlotter {
    fn open(&mut self, path: &Path) -> PlotResult {
        let file = File::create(path).map_err(|source| PlotError::OpenTarget {
            path: path.to_path_buf(),
            source,
        })?;
        self.out = Some(BufWriter::new(file));
        self.path = path.to_path_buf();
        Ok(())
    }

    fn start_plot(&mut self, creator: &str) -> PlotResult {
        self.emit(&format!(
            "999\n{creator}\n0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n\
             9\n$INSUNITS\n70\n4\n0\nENDSEC\n0\nSECTION\n2\nENTITIES\n"
        ))
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn line(&mut self, a: Point, b: Point, _width: i32) -> PlotResult {
        self.entity("LINE")?;
        self.emit(&format!(
            "10\n{:.4}\n20\n{:.4}\n11\n{:.4}\n21\n{:.4}\n",
            to_mm(a.x),
            to_mm(a.y),
            to_mm(b.x),
            to_mm(b.y)
        ))
    }

    fn circle(&mut self, center: Point, radius: i32, _width: i32) -> PlotResult {
        self.entity("CIRCLE")?;
        self.emit(&format!(
            "10\n{:.4}\n20\n{:.4}\n40\n{:.4}\n",
            to_mm(center.x),
            to_mm(center.y),
            to_mm(radius)
        ))
    }

    fn arc(
        &mut self,
        center: Point,
        radius: i32,
        start: Angle,
        sweep: Angle,
        _width: i32,
    ) -> PlotResult {
        // DXF arcs are always counter-clockwise from start to end.
        let (a0, a1) = if sweep.0 >= 0 {
            (start, start + sweep)
        } else {
            (start + sweep, start)
        };
        self.entity("ARC")?;
        self.emit(&format!(
            "10\n{:.4}\n20\n{:.4}\n40\n{:.4}\n50\n{:.4}\n51\n{:.4}\n",
            to_mm(center.x),
            to_mm(center.y),
            to_mm(radius),
            a0.degrees(),
            a1.degrees()
        ))
    }

    fn polyline(&mut self, points: &[Point], _width: i32, closed: bool) -> PlotResult {
        if points.len() < 2 {
            return Ok(());
        }
        self.entity("LWPOLYLINE")?;
        self.emit(&format!(
            "90\n{}\n70\n{}\n",
            points.len(),
            if closed { 1 } else { 0 }
        ))?;
        for p in points {
            self.emit(&format!("10\n{:.4}\n20\n{:.4}\n", to_mm(p.x), to_mm(p.y)))?;
        }
        Ok(())
    }

    fn end_plot(&mut self) -> PlotResult {
        self.emit("0\nENDSEC\n0\nEOF\n")?;
        let path = self.path.clone();
        if let Some(mut w) = self.out.take() {
            w.flush()
                .map_err(|source| PlotError::WriteFault { path, source })?;
        }
        Ok(())
    }

    fn default_extension(&self) -> &'static str {
        "dxf"
    }
}
