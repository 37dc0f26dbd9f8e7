//! # Boardkit
//!
//! An EDA document model with cascading color themes and vector plot
//! export.
//!
//! ## Architecture
//!
//! Boardkit is organized as a workspace with multiple crates:
//!
//! 1. **boardkit-core** - Geometry, integer units, layers, colors
//! 2. **boardkit-items** - Drawable items, documents, footprints, plot export
//! 3. **boardkit-settings** - Settings documents, color themes, legacy migration
//! 4. **boardkit** - Main binary that integrates all crates
//!
//! ## Features
//!
//! - **Item model**: segments, arcs, circles, beziers, polygons, pins
//!   and no-connect markers behind shared transform and connectivity
//!   contracts
//! - **Exact transforms**: integer internal units with lossless
//!   quarter-turn rotation and mirror operations
//! - **Color themes**: per-layer palettes with cascading fallback from
//!   a user default theme down to compiled-in constants
//! - **Plot export**: batch DXF export of multi-sheet designs

pub use boardkit_core::{
    Angle, BoundingBox, Color, Layer, LayerColors, PlotError, Point, Vector,
};
pub use boardkit_items::{
    load_design, plot_sheets, save_design, Connectable, Document, DxfPlotter, ExportOptions,
    ExportReport, Footprint, FootprintId, Item, ItemId, ItemKind, Plotter, Transform,
};
pub use boardkit_settings::{
    ColorContext, ColorTheme, SettingsDocument, SettingsError, SettingsManager,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Console output with RUST_LOG environment variable support, defaulting
/// to INFO level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
