//! User settings read from `settings.toml`.

use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use lavado_lib::table::DEFAULT_PAGE_SIZE;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::paths;

/// Settings with their defaults filled in.
///
/// ```toml
/// page_size = 20
/// log_level = "info"
/// date_format = "%d/%m/%Y"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_size: usize,
    pub log_level: String,
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "warn".to_string(),
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl Settings {
    /// Load from the platform config directory, or defaults if there is none.
    pub fn load() -> Result<Self, CliError> {
        match paths::settings_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|source| CliError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        settings.check()?;
        Ok(settings)
    }

    fn check(&self) -> Result<(), CliError> {
        if self.page_size == 0 {
            return Err(CliError::InvalidSetting {
                key: "page_size",
                message: "must be at least 1".into(),
            });
        }
        self.level_filter()?;
        if StrftimeItems::new(&self.date_format).any(|item| item == Item::Error) {
            return Err(CliError::InvalidSetting {
                key: "date_format",
                message: format!("`{}` is not a valid strftime format", self.date_format),
            });
        }
        // Cells hold plain dates; time fields have nothing to render
        let sample = NaiveDate::default();
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.date_format)).is_err() {
            return Err(CliError::InvalidSetting {
                key: "date_format",
                message: format!("`{}` cannot format a date without a time", self.date_format),
            });
        }
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, CliError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| CliError::InvalidSetting {
            key: "log_level",
            message: format!("unknown level `{}`", self.log_level),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "page_size = 25\nlog_level = \"debug\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(settings.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_rejects_bad_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");

        std::fs::write(&path, "page_size = 0").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(CliError::InvalidSetting { key: "page_size", .. })
        ));

        std::fs::write(&path, "log_level = \"loud\"").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(CliError::InvalidSetting { key: "log_level", .. })
        ));

        std::fs::write(&path, "date_format = \"%d/%m/%Y %H:%M\"").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(CliError::InvalidSetting { key: "date_format", .. })
        ));

        std::fs::write(&path, "page_size = \"ten\"").unwrap();
        assert!(matches!(Settings::load_from(&path), Err(CliError::Settings { .. })));
    }
}
