//! # Boardkit Settings
//!
//! Settings persistence and color themes: a hierarchical JSON settings
//! document addressed by JSON-pointer paths, declarative color schema
//! tables, the cascading [`ColorTheme`] store, one-time migration from
//! legacy flat configs, and the [`SettingsManager`] that owns the
//! config directory and the process-wide default theme.

pub mod color_theme;
pub mod document;
pub mod error;
pub mod manager;
pub mod migration;
pub mod schema;

pub use color_theme::{ColorContext, ColorTheme};
pub use document::SettingsDocument;
pub use error::SettingsError;
pub use manager::SettingsManager;
pub use migration::{migrate_from_legacy, LegacyConfig};
pub use schema::{
    ColorParam, BOARD_COLOR_SCHEMA, DEFAULT_PALETTE, FPEDIT_COLOR_SCHEMA, SCHEMATIC_COLOR_SCHEMA,
};
