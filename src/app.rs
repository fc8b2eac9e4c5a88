//! App core for linkshort.
//!
//! Central struct holding the database handle and services, and the
//! shorten flow tying them together.

use std::sync::Arc;

use tracing::warn;

use crate::database::Database;
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::platform;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::shortener_client::{ShortenerClient, ShortenerClientTrait};
use crate::services::theme_engine::{Palette, ThemeEngine, ThemeEngineTrait};
use crate::services::validation;
use crate::types::errors::AppError;
use crate::types::history::HistoryEntry;
use crate::types::settings::ThemeMode;
use crate::types::shorten::{ShortenRequest, ShortenService, ShortenedLink};

/// Per-call overrides for the shorten flow. `None` falls back to the
/// persisted defaults.
#[derive(Debug, Clone, Default)]
pub struct ShortenOptions {
    pub alias: Option<String>,
    pub service: Option<ShortenService>,
    pub log_stats: Option<bool>,
}

/// Central application struct owning the database and services.
///
/// HistoryManager is created on demand via `db.connection()` because it
/// borrows the connection with a lifetime parameter.
pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub shortener: ShortenerClient,
}

impl App {
    /// Creates a new App against the given database path, initializing all
    /// services. Settings that fail to load are replaced by defaults.
    pub fn new(db_path: &str, settings_path: Option<String>) -> Result<Self, AppError> {
        let db = Arc::new(
            Database::open(db_path).map_err(|e| AppError::Database(e.to_string()))?,
        );

        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            warn!("settings unreadable, falling back to defaults: {}", e);
        }

        let theme_engine = ThemeEngine::new(settings_engine.get_settings().appearance.theme.clone());

        Ok(Self {
            db,
            settings_engine,
            theme_engine,
            shortener: ShortenerClient::new(),
        })
    }

    /// Opens the app against the per-user data directory, creating it if
    /// needed.
    pub fn open_default() -> Result<Self, AppError> {
        let data_dir = platform::get_data_dir();
        std::fs::create_dir_all(&data_dir).map_err(|e| AppError::Database(e.to_string()))?;
        let db_path = data_dir.join("linkshort.db");
        Self::new(&db_path.to_string_lossy(), None)
    }

    /// The shorten flow: normalize and validate input, call the service,
    /// record the result. History is written only after the call succeeds,
    /// so a failed attempt leaves no entry behind.
    pub fn shorten(
        &mut self,
        raw_url: &str,
        options: &ShortenOptions,
    ) -> Result<ShortenedLink, AppError> {
        let long_url = validation::normalize_url(raw_url)?;
        if let Some(alias) = &options.alias {
            validation::validate_alias(alias)?;
        }

        let settings = self.settings_engine.get_settings();
        let service = options.service.unwrap_or(settings.general.service);
        let log_stats = options.log_stats.unwrap_or(settings.general.log_stats);

        let request = ShortenRequest {
            long_url,
            alias: options.alias.clone().filter(|a| !a.is_empty()),
            log_stats,
        };

        let link = self.shortener.shorten(service, &request)?;

        let mut history = HistoryManager::new(self.db.connection());
        history.record(&link.long_url, &link.short_url)?;

        Ok(link)
    }

    /// Returns stored history entries, newest first.
    pub fn history(&self) -> Result<Vec<HistoryEntry>, AppError> {
        let history = HistoryManager::new(self.db.connection());
        Ok(history.list()?)
    }

    /// Removes every stored history entry.
    pub fn clear_history(&mut self) -> Result<(), AppError> {
        let mut history = HistoryManager::new(self.db.connection());
        Ok(history.clear_all()?)
    }

    /// The palette for the effective display mode.
    pub fn palette(&self) -> Palette {
        self.theme_engine.palette()
    }

    /// The effective display mode with `System` resolved.
    pub fn resolved_theme(&self) -> ThemeMode {
        self.theme_engine.resolved_theme()
    }
}
