//! Configuration management module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::validation::is_valid_email;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub school: SchoolConfig,
    pub fees: FeesConfig,
    #[serde(default)]
    pub organization: OrganizationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// School identity printed on receipts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolConfig {
    pub name: String,
    pub tagline: String,
    pub contact: String,
    pub address: String,
    /// Official opening authorisation number.
    pub opening_number: String,
}

/// Fee schedule in francs CFA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeesConfig {
    pub registration: i64,
    pub tuition: i64,
    pub installment: i64,
}

/// Organisation that signed up through the registration wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationConfig {
    pub name: String,
    pub size: String,
    pub website: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
}

/// UI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: Theme,
    pub start_view: StartView,
    pub language: String,
    pub notifications_email: bool,
    pub notifications_push: bool,
    pub course_reminders: bool,
}

/// Visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Mode clair",
            Theme::Dark => "Mode sombre",
            Theme::System => "Suivre le système",
        }
    }
}

/// Which face of the application opens first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Site,
    Admin,
}

impl AppConfig {
    /// Get config file path in the platform config directory.
    pub fn default_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.school.name.trim().is_empty() {
            return Err(ConfigError::Validation("School name cannot be empty".to_string()));
        }
        if self.fees.registration < 0 {
            return Err(ConfigError::Validation(
                "Registration fees cannot be negative".to_string(),
            ));
        }
        if self.fees.tuition <= 0 {
            return Err(ConfigError::Validation(
                "Tuition fees must be greater than 0".to_string(),
            ));
        }
        if self.fees.installment <= 0 {
            return Err(ConfigError::Validation(
                "Installment must be greater than 0".to_string(),
            ));
        }
        if self.fees.installment > self.fees.tuition {
            return Err(ConfigError::Validation(
                "Installment cannot exceed tuition fees".to_string(),
            ));
        }
        if !self.organization.email.is_empty() && !is_valid_email(&self.organization.email) {
            return Err(ConfigError::Validation(
                "Organization email is not a valid address".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Platform directories for config and logs.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("cm", "Maat", "MaatSchool")
}

/// Directory for rolling log files.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            name: "MAAT SCHOOL".to_string(),
            tagline: "Excellence en Formation".to_string(),
            contact: "+237 6XX XX XX XX".to_string(),
            address: "Douala, Cameroun".to_string(),
            opening_number: "01/A/200/FS/2024".to_string(),
        }
    }
}

impl Default for FeesConfig {
    fn default() -> Self {
        Self {
            registration: 15_000,
            tuition: 65_000,
            installment: 32_500,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            start_view: StartView::Site,
            language: "Français".to_string(),
            notifications_email: true,
            notifications_push: true,
            course_reminders: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_school_name() {
        let mut config = AppConfig::default();
        config.school.name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_fee_bounds() {
        let mut config = AppConfig::default();

        config.fees.tuition = 0;
        assert!(config.validate().is_err());

        config.fees.tuition = 65_000;
        config.fees.installment = 70_000;
        assert!(config.validate().is_err());

        config.fees.installment = 32_500;
        config.fees.registration = -1;
        assert!(config.validate().is_err());

        config.fees.registration = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_organization_email() {
        let mut config = AppConfig::default();
        config.organization.email = "not-an-email".to_string();
        assert!(config.validate().is_err());

        config.organization.email = "direction@maat.cm".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.organization.name = "Centre de Formation Maat".to_string();
        config.ui.theme = Theme::Dark;
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded, config),
            other => panic!("expected loaded config, got {other:?}"),
        }
    }

    #[test]
    fn test_try_load_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));

        std::fs::write(&path, "school = 3").unwrap();
        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Parse(_))
        ));
    }
}
