//! One-time import of legacy flat configuration files.
//!
//! Older releases kept colors in a flat `key = value` TOML table with
//! per-layer key names. Each recognized key maps to a layer; the
//! layer's schema entry then supplies the hierarchical path in the new
//! document. Unrecognized keys are ignored, and a missing legacy file
//! is not an error.

use std::path::Path;

use boardkit_core::{Color, Layer};
use tracing::{info, warn};

use crate::document::SettingsDocument;
use crate::error::SettingsError;
use crate::schema::all_sections;

/// Legacy key names and the layers they painted.
static LEGACY_COLOR_KEYS: &[(&str, Layer)] = &[
    ("Color4DWireEx", Layer::Wire),
    ("Color4DBusEx", Layer::Bus),
    ("Color4DPinEx", Layer::Pin),
    ("Color4DNoConnectEx", Layer::NoConnect),
    ("Color4DNoteEx", Layer::Notes),
    ("ColorPCBLayerFCu", Layer::CopperFront),
    ("ColorPCBLayerBCu", Layer::CopperBack),
    ("ColorPCBLayerFSilkS", Layer::SilkFront),
    ("ColorPCBLayerBSilkS", Layer::SilkBack),
    ("ColorPCBLayerFFab", Layer::FabFront),
    ("ColorPCBLayerBFab", Layer::FabBack),
    ("ColorPCBLayerFCrtYd", Layer::CourtyardFront),
    ("ColorPCBLayerBCrtYd", Layer::CourtyardBack),
    ("ColorPCBLayerEdgeCuts", Layer::EdgeCuts),
    ("Color4DBgCanvasEx", Layer::Background),
    ("Color4DGridEx", Layer::Grid),
    ("Color4DCursorEx", Layer::Cursor),
];

/// A parsed legacy configuration file.
#[derive(Debug, Clone, Default)]
pub struct LegacyConfig {
    table: toml::Table,
}

impl LegacyConfig {
    /// Read a legacy file. Absent file yields an empty configuration;
    /// a malformed one is a real error since the caller asked for it.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            table: content.parse::<toml::Table>()?,
        })
    }

    pub fn from_table(table: toml::Table) -> Self {
        Self { table }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn color_for(&self, key: &str) -> Option<Color> {
        let raw = self.table.get(key)?.as_str()?;
        match Color::parse(raw) {
            Some(color) => Some(color),
            None => {
                warn!("Skipping legacy key {key}: unrecognized color \"{raw}\"");
                None
            }
        }
    }
}

/// Copy recognized legacy values into `doc` at their schema paths.
/// Returns whether anything was imported.
pub fn migrate_from_legacy(legacy: &LegacyConfig, doc: &mut SettingsDocument) -> bool {
    let mut imported = 0usize;
    for (key, layer) in LEGACY_COLOR_KEYS {
        let Some(color) = legacy.color_for(key) else {
            continue;
        };
        for param in all_sections().filter(|p| p.layer == *layer) {
            doc.set(param.path, color.to_string());
        }
        imported += 1;
    }
    if imported > 0 {
        info!("Imported {imported} color(s) from legacy configuration");
    }
    imported > 0
}
