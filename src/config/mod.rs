// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Invalid or partial files degrade to defaults rather than failing startup; a
//! missing config directory simply means defaults are used and nothing is saved.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Vitrine";

/// Default time a toast stays fully visible before its removal animation starts.
pub const DEFAULT_VISIBLE_DURATION_MS: u64 = 3000;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub notifications: Notifications,
    #[serde(default)]
    pub gallery: Gallery,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct General {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Notifications {
    /// Toast visible duration in milliseconds before the removal animation.
    #[serde(default)]
    pub visible_duration_ms: Option<u64>,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Gallery {
    /// Directory scanned for gallery images. Absent disables the gallery.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Effective toast visible duration, falling back to the default.
    #[must_use]
    pub fn visible_duration_ms(&self) -> u64 {
        self.notifications
            .visible_duration_ms
            .unwrap_or(DEFAULT_VISIBLE_DURATION_MS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
