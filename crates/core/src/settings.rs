use crate::error::{Result, ScraperError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SETTINGS_FILE: &str = "settings.json";

/// User-editable options persisted to the settings file.
///
/// Values are not validated: whatever the file holds is used until the user
/// overwrites it from the settings menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// 1: basic, 2: moderate, 3: extensive.
    pub scraping_level: i64,
    /// Negative values keep every keyword.
    pub min_keyword_length: i64,
    pub notification_alert: bool,
    /// `google` or `bing`.
    pub api_source: String,
    pub result_path: String,
    /// Unset until the filter step asks for it the first time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_spaces: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_keywords: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scraping_level: 1,
            min_keyword_length: 3,
            notification_alert: false,
            api_source: "google".to_string(),
            result_path: "results".to_string(),
            remove_spaces: None,
            sort_keywords: None,
        }
    }
}

impl Settings {
    pub fn with_scraping_level(self, scraping_level: i64) -> Self {
        Self {
            scraping_level,
            ..self
        }
    }

    pub fn with_min_keyword_length(self, min_keyword_length: i64) -> Self {
        Self {
            min_keyword_length,
            ..self
        }
    }

    pub fn with_notification_alert(self, notification_alert: bool) -> Self {
        Self {
            notification_alert,
            ..self
        }
    }

    pub fn with_api_source(self, api_source: impl Into<String>) -> Self {
        Self {
            api_source: api_source.into(),
            ..self
        }
    }

    pub fn with_result_path(self, result_path: impl Into<String>) -> Self {
        Self {
            result_path: result_path.into(),
            ..self
        }
    }

    pub fn with_remove_spaces(self, remove_spaces: bool) -> Self {
        Self {
            remove_spaces: Some(remove_spaces),
            ..self
        }
    }

    pub fn with_sort_keywords(self, sort_keywords: bool) -> Self {
        Self {
            sort_keywords: Some(sort_keywords),
            ..self
        }
    }
}

/// Loads and saves [`Settings`] as a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.json` relative to the working directory.
    pub fn default_location() -> Self {
        Self::new(SETTINGS_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file over the built-in defaults. A missing file yields the
    /// defaults; a malformed one is an error.
    pub fn load(&self) -> Result<Settings> {
        let defaults = Settings::default();
        let cfg = config::Config::builder()
            .set_default("scraping_level", defaults.scraping_level)?
            .set_default("min_keyword_length", defaults.min_keyword_length)?
            .set_default("notification_alert", defaults.notification_alert)?
            .set_default("api_source", defaults.api_source)?
            .set_default("result_path", defaults.result_path)?
            .add_source(
                config::File::from(self.path.as_path())
                    .format(config::FileFormat::Json)
                    .required(false),
            )
            .build()?;
        let settings: Settings = cfg.try_deserialize()?;
        debug!(path = %self.path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ScraperError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json).map_err(|e| ScraperError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
