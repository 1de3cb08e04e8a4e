use crate::errors::{AppError, AppResult};
use crate::models::policy::ChainPolicy;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub default_user: String,
    #[serde(default = "default_min_fuel_price")]
    pub min_fuel_price: f64,
    #[serde(default = "default_odometer_step")]
    pub odometer_step: f64,
    #[serde(default)]
    pub edit_chain_policy: ChainPolicy,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

/// Keys every configuration file is expected to carry.
pub const CONFIG_KEYS: [&str; 6] = [
    "database",
    "default_user",
    "min_fuel_price",
    "odometer_step",
    "edit_chain_policy",
    "chart_width",
];

fn default_min_fuel_price() -> f64 {
    1.0
}
fn default_odometer_step() -> f64 {
    0.1
}
fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_user: String::new(),
            min_fuel_price: default_min_fuel_price(),
            odometer_step: default_odometer_step(),
            edit_chain_policy: ChainPolicy::default(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfuellogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rfuellogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfuellogger.conf")
    }

    /// Return the full path of the SQLite sheet
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rfuellogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();

        if cfg.odometer_step < 0.0 {
            return Err(AppError::Config("odometer_step must not be negative".into()));
        }
        if cfg.chart_width == 0 {
            return Err(AppError::Config("chart_width must be positive".into()));
        }
        Ok(cfg)
    }

    /// Keys from `CONFIG_KEYS` absent in the YAML document.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: Value = serde_yaml::from_str(content)?;
        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(Value::String((*k).to_string())))
            .collect())
    }

    /// `--db` value as a path: `~` expanded, relative names under the
    /// config directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => Self::resolve_database(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
