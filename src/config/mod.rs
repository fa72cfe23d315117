use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user_id")]
    pub user_id: i64,
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
    #[serde(default = "default_seed_full_name")]
    pub seed_full_name: String,
    #[serde(default = "default_seed_required_hours")]
    pub seed_required_hours: f64,
    #[serde(default = "default_seed_deadline")]
    pub seed_deadline: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_user_id() -> i64 {
    1
}
fn default_report_dir() -> String {
    ".".to_string()
}
fn default_seed_full_name() -> String {
    "Timothy Wheels".to_string()
}
fn default_seed_required_hours() -> f64 {
    40.0
}
fn default_seed_deadline() -> String {
    "2026-01-17".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            user_id: default_user_id(),
            report_dir: default_report_dir(),
            seed_full_name: default_seed_full_name(),
            seed_required_hours: default_seed_required_hours(),
            seed_deadline: default_seed_deadline(),
        }
    }
}

/// First-run profile values inserted when `User_Profile` is empty.
#[derive(Debug, Clone)]
pub struct ProfileSeed {
    pub full_name: String,
    pub total_hours_required: f64,
    pub deadline_date: NaiveDate,
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rservicelog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rservicelog.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rservicelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?
        } else {
            Config::default()
        };

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.report_dir = expand_tilde(&cfg.report_dir)
            .to_string_lossy()
            .to_string();
        Ok(cfg)
    }

    /// Write a default configuration file unless one is already present.
    /// Returns `false` when the file already existed.
    pub fn init_file() -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&Config::default())
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(&path, yaml).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        Ok(true)
    }

    /// Validated first-run profile built from the `seed_*` fields.
    pub fn profile_seed(&self) -> AppResult<ProfileSeed> {
        if self.seed_required_hours.is_nan() || self.seed_required_hours <= 0.0 {
            return Err(AppError::Config(format!(
                "seed_required_hours must be greater than zero (got {})",
                self.seed_required_hours
            )));
        }

        let deadline = date::parse_date(&self.seed_deadline).ok_or_else(|| {
            AppError::Config(format!(
                "seed_deadline must be a YYYY-MM-DD date (got '{}')",
                self.seed_deadline
            ))
        })?;

        Ok(ProfileSeed {
            full_name: self.seed_full_name.clone(),
            total_hours_required: self.seed_required_hours,
            deadline_date: deadline,
        })
    }
}
