use serde::{Deserialize, Serialize};

use super::shorten::ShortenService;

/// Top-level linkshort settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub appearance: AppearanceSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            appearance: AppearanceSettings::default(),
        }
    }
}

/// Defaults applied to shorten calls when no command-line flag overrides them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub service: ShortenService,
    pub log_stats: bool,
    pub show_qr: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            service: ShortenService::IsGd,
            log_stats: false,
            show_qr: true,
        }
    }
}

/// Appearance and display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
        }
    }
}

/// Display mode selection. `System` defers to the environment's
/// color-scheme signal at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}
