use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_ttl")]
    pub ttl: i64,
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: default_session_ttl(),
            cleanup_interval: default_cleanup_interval(),
        }
    }
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_users_path() -> PathBuf {
    PathBuf::from("user_data/users.csv")
}

fn default_session_ttl() -> i64 {
    3600 // 1 hour
}

fn default_cleanup_interval() -> u64 {
    300 // 5 minutes
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.storage.users_path.as_os_str().is_empty() {
            bail!("users_path must not be empty");
        }

        if self.session.ttl <= 0 {
            bail!("session ttl must be greater than 0");
        }

        if self.session.cleanup_interval == 0 {
            bail!("session cleanup_interval must be greater than 0");
        }

        if self.session.cleanup_interval as i64 >= self.session.ttl {
            bail!(
                "session cleanup_interval ({}) must be less than ttl ({})",
                self.session.cleanup_interval,
                self.session.ttl
            );
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
