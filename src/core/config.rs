//! Configuration management for the Courseable service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! Both halves of the system read the same file: the `[server]`
//! section drives the API server, the `[client]` section drives
//! connection establishment and request issuing.

use crate::core::error::{CourseableError, Result};
use crate::core::types::DEFAULT_PORT;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind (local development deployment)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on; 0 picks an ephemeral port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the course source records
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

/// Client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Maximum probes of the root route before giving up
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,

    /// Delay between failed probes, in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Per-request timeout, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/courses.json")
}

fn default_connect_attempts() -> u32 {
    8
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_request_timeout() -> u64 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_attempts: default_connect_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            request_timeout_sec: default_request_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CourseableError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File resolution order:
    /// 1. COURSEABLE_CONFIG env var
    /// 2. User config file (~/.config/courseable/config.toml)
    /// 3. Local ./courseable.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("COURSEABLE_CONFIG") {
            Self::from_file(config_path)?
        } else if let Some(user_config) = Self::user_config_file() {
            if user_config.exists() {
                Self::from_file(user_config)?
            } else if Path::new("courseable.toml").exists() {
                Self::from_file("courseable.toml")?
            } else {
                Self::default()
            }
        } else if Path::new("courseable.toml").exists() {
            Self::from_file("courseable.toml")?
        } else {
            Self::default()
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Per-user config file location, if a config directory exists
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("courseable").join("config.toml"))
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("COURSEABLE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("COURSEABLE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(data_file) = env::var("COURSEABLE_DATA_FILE") {
            self.server.data_file = PathBuf::from(data_file);
        }

        // Client configuration
        if let Ok(attempts) = env::var("COURSEABLE_CONNECT_ATTEMPTS") {
            if let Ok(a) = attempts.parse() {
                self.client.connect_attempts = a;
            }
        }
        if let Ok(delay) = env::var("COURSEABLE_RETRY_DELAY_MS") {
            if let Ok(d) = delay.parse() {
                self.client.retry_delay_ms = d;
            }
        }
        if let Ok(timeout) = env::var("COURSEABLE_REQUEST_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.client.request_timeout_sec = t;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(CourseableError::ConfigError(
                "Host must be non-empty".to_string(),
            ));
        }

        if self.server.data_file.as_os_str().is_empty() {
            return Err(CourseableError::ConfigError(
                "Data file path must be non-empty".to_string(),
            ));
        }

        if self.client.connect_attempts == 0 {
            return Err(CourseableError::ConfigError(
                "Connect attempts must be non-zero".to_string(),
            ));
        }

        if self.client.request_timeout_sec == 0 {
            return Err(CourseableError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL both the monitor and the request issuer target
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }

    /// Delay between connection probes
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.client.retry_delay_ms)
    }

    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.client.request_timeout_sec)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Host: {}", self.server.host);
        tracing::info!("  Port: {}", self.server.port);
        tracing::info!("  Data file: {:?}", self.server.data_file);
        tracing::info!("  Connect attempts: {}", self.client.connect_attempts);
        tracing::info!("  Retry delay: {} ms", self.client.retry_delay_ms);
        tracing::info!("  Request timeout: {}s", self.client.request_timeout_sec);
    }
}
