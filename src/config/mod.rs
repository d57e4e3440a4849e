use crate::errors::{AppError, AppResult};
use crate::store::{RecordStore, StoreLayout, TableFiles};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the transaction table and the audit logs.
    pub data_dir: String,
    #[serde(default)]
    pub files: TableFiles,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Chart page written by the date-range view, relative to `data_dir`.
    #[serde(default = "default_chart_file")]
    pub chart_file: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_chart_file() -> String {
    "transactions_chart.html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            files: TableFiles::default(),
            currency_symbol: default_currency_symbol(),
            chart_file: default_chart_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfintrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rfintrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfintrack.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration file, pointing at `data_dir` when given.
    /// In test mode nothing is written.
    pub fn init_all(data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::load()?;
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.data_path().join(&self.chart_file)
    }

    /// Record store over the configured directory and file names.
    pub fn store(&self) -> RecordStore {
        RecordStore::with_layout(self.data_path(), StoreLayout::from_files(&self.files))
    }
}
