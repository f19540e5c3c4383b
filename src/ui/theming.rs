// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection (light, dark, or follow the system).

use serde::{Deserialize, Serialize};

/// User-selectable theme mode persisted in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the effective darkness of this mode.
    ///
    /// `System` asks the OS via `dark-light`; detection errors fall back to dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Parses a CLI value (`light` / `dark` / `system`). Unknown values map to `None`.
    #[must_use]
    pub fn from_cli(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_system_lookup() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn from_cli_parses_known_values() {
        assert_eq!(ThemeMode::from_cli("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_cli("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_cli("system"), Some(ThemeMode::System));
        assert_eq!(ThemeMode::from_cli("solarized"), None);
    }

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }
}
