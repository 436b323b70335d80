use crate::core::calendar::GridMetrics;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod check;

/// Environment variable that relocates the configuration directory.
pub const CONFIG_DIR_ENV: &str = "RTASKWEEK_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub tasks_file: String,
    #[serde(default)]
    pub seed_file: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_hour_height")]
    pub hour_height_px: f64,
    #[serde(default = "default_min_event_height")]
    pub min_event_height_px: f64,
    #[serde(default = "default_gutter")]
    pub gutter_px: f64,
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_hour_height() -> f64 {
    GridMetrics::default().hour_height_px
}
fn default_min_event_height() -> f64 {
    GridMetrics::default().min_event_height_px
}
fn default_gutter() -> f64 {
    GridMetrics::default().gutter_px
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: Self::tasks_file_path().to_string_lossy().to_string(),
            seed_file: None,
            log_level: default_log_level(),
            hour_height_px: default_hour_height(),
            min_event_height_px: default_min_event_height(),
            gutter_px: default_gutter(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$RTASKWEEK_HOME` when set,
    /// otherwise `~/.rtaskweek` (`%APPDATA%\rtaskweek` on Windows).
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(CONFIG_DIR_ENV)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtaskweek")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtaskweek")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtaskweek.conf")
    }

    /// Return the default path of the task store
    pub fn tasks_file_path() -> PathBuf {
        Self::config_dir().join("tasks.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {e}", path.display()))
        })
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Create the config directory and, unless `is_test`, the config file.
    /// `tasks_file` overrides the default store location.
    pub fn init_all(tasks_file: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let tasks_path = match tasks_file {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::tasks_file_path(),
        };

        let config = Config {
            tasks_file: tasks_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            config.save()?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }

    pub fn grid_metrics(&self) -> GridMetrics {
        GridMetrics {
            hour_height_px: self.hour_height_px,
            min_event_height_px: self.min_event_height_px,
            gutter_px: self.gutter_px,
        }
    }
}
