//! Configuration management for taskboard.
//!
//! The configuration lives as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]):
//!
//! - **Windows**: `%LOCALAPPDATA%\taskboard\taskboard\config.json`
//! - **macOS**: `~/Library/Application Support/taskboard/taskboard/config.json`
//! - **Linux**: `~/.local/share/taskboard/taskboard/config.json`
//!
//! A missing file is not an error; defaults are used. The API URL can be
//! overridden with the `TASKBOARD_API_URL` environment variable (a `.env`
//! file in the working directory is loaded by the binary at start-up).
//!
//! Credentials are never written here. The session token has its own
//! encrypted file, see [`crate::libs::token`].
//!
//! ```rust,no_run
//! use taskboard::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("API: {}", config.server_or_default().api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const API_URL_ENV: &str = "TASKBOARD_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Connection settings for the task service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL the REST paths are appended to, e.g. `https://tasks.example.com/api`.
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads `config.json` from the default data directory, or defaults when it does not exist.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(config_file_path)?;
        Ok(serde_json::from_str(&config_str)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file = File::create(storage.get_path(CONFIG_FILE_NAME)?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Effective server settings: the configured ones (or defaults) with the
    /// environment override applied.
    pub fn server_or_default(&self) -> ServerConfig {
        let mut server = self.server.clone().unwrap_or_default();
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                server.api_url = url;
            }
        }
        server
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.server.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleServer);
        config.server = Some(ServerConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerTimeout.to_string())
                .default(default.timeout_secs)
                .interact_text()?,
        });

        Ok(config)
    }
}
