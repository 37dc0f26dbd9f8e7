//! Color themes.
//!
//! A theme resolves every [`Layer`] to a [`Color`] through a cascade:
//! the theme's own file, then an injected fallback theme, then the
//! compiled-in defaults from the schema tables. Resolution happens at
//! load time, so `get_color` is a plain map lookup and is total.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use boardkit_core::{Color, Layer, LayerColors};
use tracing::debug;

use crate::document::SettingsDocument;
use crate::error::SettingsError;
use crate::schema::{
    BOARD_COLOR_SCHEMA, DEFAULT_PALETTE, FPEDIT_COLOR_SCHEMA, SCHEMATIC_COLOR_SCHEMA,
};

/// Which editor surface a color is being fetched for.
///
/// The footprint editor carries its own small override set; everything
/// it does not name falls through to the board colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorContext {
    Board,
    Footprint,
}

#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Display name, from `/meta/name` or the file stem.
    pub name: String,
    /// Path the theme was loaded from, for re-save. Builtin themes
    /// have none and are read-only.
    path: Option<PathBuf>,
    /// Explicit board and schematic entries from the theme file.
    colors: HashMap<Layer, Color>,
    /// Explicit footprint-editor entries from the theme file.
    fpedit_colors: HashMap<Layer, Color>,
    /// Resolved fallbacks (injected theme or compiled-in).
    defaults: HashMap<Layer, Color>,
    fpedit_defaults: HashMap<Layer, Color>,
    /// Ordered palette for cycling item colors.
    palette: Vec<Color>,
    /// When set, renderers ignore item-specific colors and assign from
    /// the palette instead.
    pub override_item_colors: bool,
}

fn builtin_palette() -> Vec<Color> {
    DEFAULT_PALETTE
        .iter()
        .map(|s| Color::parse_or_black(s))
        .collect()
}

impl ColorTheme {
    /// The compiled-in theme, used when nothing else is available.
    pub fn builtin() -> Self {
        let mut defaults = HashMap::new();
        for p in BOARD_COLOR_SCHEMA.iter().chain(SCHEMATIC_COLOR_SCHEMA) {
            defaults.insert(p.layer, Color::parse_or_black(p.default));
        }
        let mut fpedit_defaults = HashMap::new();
        for p in FPEDIT_COLOR_SCHEMA {
            fpedit_defaults.insert(p.layer, Color::parse_or_black(p.default));
        }
        Self {
            name: "Default".to_string(),
            path: None,
            colors: HashMap::new(),
            fpedit_colors: HashMap::new(),
            defaults,
            fpedit_defaults,
            palette: builtin_palette(),
            override_item_colors: false,
        }
    }

    /// Load a theme from disk, cascading onto `fallback` where the
    /// file is silent. A missing or corrupt file yields a theme equal
    /// to the fallback (or builtin) under the file's name.
    pub fn load(path: &Path, fallback: Option<&ColorTheme>) -> Self {
        Self::load_with(path, fallback, false)
    }

    /// As [`load`](Self::load), but with `read_only` set the file's own
    /// color entries are skipped entirely: the theme keeps its cascade
    /// defaults and refuses to save. Used for stock themes that must
    /// not drift from their shipped values.
    pub fn load_with(path: &Path, fallback: Option<&ColorTheme>, read_only: bool) -> Self {
        let doc = SettingsDocument::load(path);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());
        let name = doc.get_as::<String>("/meta/name").unwrap_or(stem);
        debug!("Loading color theme \"{name}\" from {}", path.display());

        let mut defaults = HashMap::new();
        for p in BOARD_COLOR_SCHEMA.iter().chain(SCHEMATIC_COLOR_SCHEMA) {
            let color = match fallback {
                Some(theme) => theme.get_color(p.layer, ColorContext::Board),
                None => Color::parse_or_black(p.default),
            };
            defaults.insert(p.layer, color);
        }
        let mut fpedit_defaults = HashMap::new();
        for p in FPEDIT_COLOR_SCHEMA {
            let color = match fallback {
                Some(theme) => theme.get_color(p.layer, ColorContext::Footprint),
                None => Color::parse_or_black(p.default),
            };
            fpedit_defaults.insert(p.layer, color);
        }

        let mut colors = HashMap::new();
        let mut fpedit_colors = HashMap::new();
        if !read_only {
            for p in BOARD_COLOR_SCHEMA.iter().chain(SCHEMATIC_COLOR_SCHEMA) {
                if let Some(s) = doc.get_as::<String>(p.path) {
                    colors.insert(p.layer, Color::parse_or_black(&s));
                }
            }
            for p in FPEDIT_COLOR_SCHEMA {
                if let Some(s) = doc.get_as::<String>(p.path) {
                    fpedit_colors.insert(p.layer, Color::parse_or_black(&s));
                }
            }
        }

        let palette = doc
            .get_as::<Vec<Color>>("/palette")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| match fallback {
                Some(theme) => theme.palette.clone(),
                None => builtin_palette(),
            });
        let override_item_colors = doc
            .get_as::<bool>("/meta/override_item_colors")
            .unwrap_or_else(|| fallback.is_some_and(|t| t.override_item_colors));

        Self {
            name,
            path: (!read_only).then(|| path.to_path_buf()),
            colors,
            fpedit_colors,
            defaults,
            fpedit_defaults,
            palette,
            override_item_colors,
        }
    }

    /// Resolve a layer to a color. Never fails: unmapped layers come
    /// back black rather than poisoning a render pass.
    pub fn get_color(&self, layer: Layer, context: ColorContext) -> Color {
        if context == ColorContext::Footprint {
            if let Some(color) = self
                .fpedit_colors
                .get(&layer)
                .or_else(|| self.fpedit_defaults.get(&layer))
            {
                return *color;
            }
        }
        self.colors
            .get(&layer)
            .or_else(|| self.defaults.get(&layer))
            .copied()
            .unwrap_or(Color::BLACK)
    }

    /// Resolve a layer ignoring this theme's own overrides, for
    /// reset-to-default actions. Still total.
    pub fn get_default_color(&self, layer: Layer, context: ColorContext) -> Color {
        if context == ColorContext::Footprint {
            if let Some(color) = self.fpedit_defaults.get(&layer) {
                return *color;
            }
        }
        self.defaults.get(&layer).copied().unwrap_or(Color::BLACK)
    }

    /// The ordered palette used for cycling item colors.
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Vec<Color>) {
        if !palette.is_empty() {
            self.palette = palette;
        }
    }

    /// Override a layer's color in the given context.
    pub fn set_color(&mut self, layer: Layer, context: ColorContext, color: Color) {
        match context {
            ColorContext::Board => self.colors.insert(layer, color),
            ColorContext::Footprint => self.fpedit_colors.insert(layer, color),
        };
    }

    /// Whether the theme file explicitly names this layer.
    pub fn has_override(&self, layer: Layer, context: ColorContext) -> bool {
        match context {
            ColorContext::Board => self.colors.contains_key(&layer),
            ColorContext::Footprint => self.fpedit_colors.contains_key(&layer),
        }
    }

    pub fn is_writable(&self) -> bool {
        self.path.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Render the fully-resolved theme as a settings document.
    pub fn to_document(&self) -> SettingsDocument {
        let mut doc = SettingsDocument::new();
        doc.set("/meta/name", &self.name);
        doc.set("/meta/override_item_colors", self.override_item_colors);
        doc.set("/palette", &self.palette);
        for p in BOARD_COLOR_SCHEMA.iter().chain(SCHEMATIC_COLOR_SCHEMA) {
            doc.set(
                p.path,
                self.get_color(p.layer, ColorContext::Board).to_string(),
            );
        }
        for p in FPEDIT_COLOR_SCHEMA {
            if self.fpedit_colors.contains_key(&p.layer) {
                doc.set(
                    p.path,
                    self.get_color(p.layer, ColorContext::Footprint).to_string(),
                );
            }
        }
        doc
    }

    /// Write the theme back to the path it was loaded from.
    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::Save {
                path: PathBuf::from(&self.name),
                reason: "builtin themes are read-only".to_string(),
            });
        };
        self.to_document().save(path)
    }

    /// Write the theme to a new location, adopting it for later saves.
    pub fn save_as(&mut self, path: &Path) -> Result<(), SettingsError> {
        self.to_document().save(path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }
}

impl LayerColors for ColorTheme {
    fn layer_color(&self, layer: Layer) -> Color {
        self.get_color(layer, ColorContext::Board)
    }
}
