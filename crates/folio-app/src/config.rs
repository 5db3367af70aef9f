//! Settings parser for the folio config file.
//!
//! Settings live at `~/.config/folio/config.toml`. A missing or broken
//! file falls back to defaults; the only value written back is the
//! theme, via [`ConfigThemeStore`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use folio_core::prelude::*;
use folio_core::{Theme, ThemeStore};

const CONFIG_FILENAME: &str = "config.toml";
const FOLIO_DIR: &str = "folio";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// `[theme]` table
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeSettings {
    /// Persisted display theme
    #[serde(default)]
    pub mode: Theme,
}

/// `[ui]` table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll timeout in milliseconds (animation tick rate)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_tick_ms() -> u64 {
    50
}

/// `[behavior]` table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Lines scrolled per mouse wheel notch
    #[serde(default = "default_mouse_scroll_lines")]
    pub mouse_scroll_lines: usize,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            mouse_scroll_lines: default_mouse_scroll_lines(),
        }
    }
}

fn default_mouse_scroll_lines() -> usize {
    3
}

/// Default config file location (`~/.config/folio/config.toml`).
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(FOLIO_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the default location, falling back to defaults.
pub fn load_settings() -> Settings {
    load_settings_from(&config_path())
}

/// Load settings from a specific path.
///
/// A missing file is normal (first run). A malformed file is logged and
/// ignored rather than aborting startup.
pub fn load_settings_from(path: &Path) -> Settings {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
        Err(e) => {
            warn!("Failed to read config {}: {}", path.display(), e);
            return Settings::default();
        }
    };

    match toml::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Invalid config {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Write settings to `path` atomically (temp file + rename).
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config directory: {e}")))?;
    }

    // Write-then-rename so a crash never leaves a half-written file
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, content)
        .map_err(|e| Error::config(format!("Failed to write config: {e}")))?;
    std::fs::rename(&tmp, path)
        .map_err(|e| Error::config(format!("Failed to replace config: {e}")))?;

    info!("Saved settings to {}", path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// ConfigThemeStore
// ─────────────────────────────────────────────────────────────────────────────

/// Theme collaborator backed by the config file.
///
/// Owns the persisted settings and writes them back on every theme
/// change. Persistence failures are logged but never surfaced: from the
/// page's point of view the toggle cannot fail.
#[derive(Debug)]
pub struct ConfigThemeStore {
    path: PathBuf,
    settings: Settings,
}

impl ConfigThemeStore {
    pub fn new(path: PathBuf, settings: Settings) -> Self {
        Self { path, settings }
    }

    /// Store over the default config location.
    pub fn open_default(settings: Settings) -> Self {
        Self::new(config_path(), settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl ThemeStore for ConfigThemeStore {
    fn theme(&self) -> Theme {
        self.settings.theme.mode
    }

    fn set_theme(&mut self, theme: Theme) {
        self.settings.theme.mode = theme;
        if let Err(e) = save_settings(&self.path, &self.settings) {
            warn!("Failed to persist theme: {e}");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
