use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Store endpoint, e.g. "https://xyzcompany.supabase.co"
    pub store_url: Option<String>,
    /// Store access key (anon/service key)
    pub store_key: Option<String>,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_widget_limit")]
    pub widget_limit: usize,
}

fn default_table() -> String {
    "todos".to_string()
}
fn default_theme() -> String {
    "light".to_string()
}
fn default_widget_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: None,
            store_key: None,
            table: default_table(),
            theme: default_theme(),
            widget_limit: default_widget_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtodo")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtodo")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtodo.conf")
    }

    /// Return the full path of the cached widget snapshot
    pub fn snapshot_file() -> PathBuf {
        Self::config_dir().join("widget_snapshot.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Environment variables take precedence over the file for credentials.
    pub fn load() -> Self {
        let path = Self::config_file();

        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        };

        if let Ok(url) = env::var("RTODO_STORE_URL") {
            cfg.store_url = Some(url);
        }
        if let Ok(key) = env::var("RTODO_STORE_KEY") {
            cfg.store_key = Some(key);
        }

        cfg
    }

    /// Store endpoint and access key are mandatory for any command that
    /// touches the remote store; a missing value is a fatal config error.
    pub fn store_credentials(&self) -> AppResult<(String, String)> {
        let url = self
            .store_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "store URL not configured. Set store_url in the config file, \
                     the RTODO_STORE_URL environment variable, or pass --url"
                        .to_string(),
                )
            })?;
        let key = self
            .store_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "store key not configured. Set store_key in the config file, \
                     the RTODO_STORE_KEY environment variable, or pass --key"
                        .to_string(),
                )
            })?;
        Ok((url, key))
    }

    /// Persist the current configuration to the config file
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the configuration directory and default config file
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !Self::config_file().exists() {
            Config::default().save()?;
        }

        println!("✅ Config file: {:?}", Self::config_file());
        Ok(())
    }
}
