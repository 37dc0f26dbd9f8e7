//! Theme discovery, caching and lifecycle.
//!
//! The manager owns the configuration directory, discovers theme files
//! under `themes/`, and keeps loaded themes cached by name. Every
//! non-default theme is loaded with the user's default theme injected
//! as its fallback, which is what makes partial theme files work.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::color_theme::ColorTheme;
use crate::document::SettingsDocument;
use crate::error::SettingsError;
use crate::migration::{migrate_from_legacy, LegacyConfig};

const THEME_EXTENSION: &str = "json";
const DEFAULT_THEME: &str = "default";
const LEGACY_CONFIG_FILE: &str = "boardkit.conf";

pub struct SettingsManager {
    config_dir: PathBuf,
    themes: HashMap<String, ColorTheme>,
    active: String,
}

impl SettingsManager {
    /// Manager rooted at the platform configuration directory.
    pub fn new() -> Result<Self, SettingsError> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform configuration directory".to_string())
        })?;
        Ok(Self::with_config_dir(base.join("boardkit")))
    }

    /// Manager rooted at an explicit directory. Tests point this at a
    /// temporary directory.
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            themes: HashMap::new(),
            active: DEFAULT_THEME.to_string(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn theme_dir(&self) -> PathBuf {
        self.config_dir.join("themes")
    }

    fn theme_path(&self, name: &str) -> PathBuf {
        self.theme_dir().join(format!("{name}.{THEME_EXTENSION}"))
    }

    /// Discover and load all themes. On first run this creates the
    /// default theme file, seeding it from a legacy flat configuration
    /// when one is present.
    pub fn load(&mut self) -> Result<(), SettingsError> {
        let default_path = self.theme_path(DEFAULT_THEME);
        if !default_path.exists() {
            self.first_run(&default_path)?;
        }

        let default = ColorTheme::load(&default_path, None);
        self.themes.clear();

        let entries = match std::fs::read_dir(self.theme_dir()) {
            Ok(entries) => entries,
            Err(err) => {
                return Err(SettingsError::Load {
                    path: self.theme_dir(),
                    reason: err.to_string(),
                })
            }
        };
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(THEME_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem == DEFAULT_THEME {
                continue;
            }
            debug!("Discovered color theme file {}", path.display());
            self.themes
                .insert(stem.to_string(), ColorTheme::load(&path, Some(&default)));
        }
        self.themes.insert(DEFAULT_THEME.to_string(), default);
        if !self.themes.contains_key(&self.active) {
            self.active = DEFAULT_THEME.to_string();
        }
        Ok(())
    }

    /// Create the default theme file, importing legacy colors if any.
    fn first_run(&self, default_path: &Path) -> Result<(), SettingsError> {
        info!(
            "Initializing configuration directory {}",
            self.config_dir.display()
        );
        let mut doc = SettingsDocument::new();
        let legacy = LegacyConfig::load(&self.config_dir.join(LEGACY_CONFIG_FILE))?;
        if migrate_from_legacy(&legacy, &mut doc) {
            info!("Seeded default theme from legacy configuration");
        }
        doc.set("/meta/name", "Default");
        doc.save(default_path)
    }

    /// Names of all loaded themes, sorted for display.
    pub fn theme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// A theme by file name, or the builtin palette if unknown.
    pub fn theme(&self, name: &str) -> ColorTheme {
        match self.themes.get(name) {
            Some(theme) => theme.clone(),
            None => ColorTheme::builtin(),
        }
    }

    pub fn active_theme(&self) -> ColorTheme {
        self.theme(&self.active)
    }

    /// Select the active theme. Unknown names are refused so the
    /// caller's current selection survives a typo.
    pub fn set_active(&mut self, name: &str) -> bool {
        if self.themes.contains_key(name) {
            self.active = name.to_string();
            true
        } else {
            false
        }
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// Store a theme in the cache and write it to disk under `name`.
    pub fn save_theme(&mut self, name: &str, mut theme: ColorTheme) -> Result<(), SettingsError> {
        theme.save_as(&self.theme_path(name))?;
        self.themes.insert(name.to_string(), theme);
        Ok(())
    }

    /// Drop the cache and re-read every theme file.
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        self.load()
    }
}
