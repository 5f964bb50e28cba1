//! Dashboard configuration file support.
//!
//! Settings are read from a `dashboard.toml` file when one exists, then
//! overridden by environment variables. Every field has a default, so the
//! server starts with no configuration at all.
//!
//! ```toml
//! [data]
//! path = "spacex_launch_dash.csv"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8050
//!
//! [controls]
//! slider_min = 0
//! slider_max = 10000
//! slider_step = 1000
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `data.path`.
pub const DATA_PATH_ENV: &str = "SPACEX_DATA_PATH";
/// Environment variable overriding `server.host`.
pub const HOST_ENV: &str = "HOST";
/// Environment variable overriding `server.port`.
pub const PORT_ENV: &str = "PORT";

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub controls: ControlsSettings,
}

/// Launch table location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Display range of the payload slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsSettings {
    #[serde(default = "default_slider_min")]
    pub slider_min: f64,
    #[serde(default = "default_slider_max")]
    pub slider_max: f64,
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_slider_min() -> f64 {
    0.0
}

fn default_slider_max() -> f64 {
    10000.0
}

fn default_slider_step() -> f64 {
    1000.0
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
        }
    }
}

impl ControlsSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.slider_min.is_finite() || !self.slider_max.is_finite() {
            bail!("Slider bounds must be finite numbers");
        }
        if self.slider_min > self.slider_max {
            bail!(
                "Slider minimum {} exceeds maximum {}",
                self.slider_min,
                self.slider_max
            );
        }
        if !(self.slider_step > 0.0) {
            bail!("Slider step must be positive, got {}", self.slider_step);
        }
        Ok(())
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DashboardConfig =
            toml::from_str(content).context("Failed to parse config file")?;
        config.controls.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file is found.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::info!("No dashboard.toml found, using default configuration");
        Ok(Self::default())
    }

    /// Apply `SPACEX_DATA_PATH`, `HOST` and `PORT` overrides.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(path) = env::var(DATA_PATH_ENV) {
            self.data.path = PathBuf::from(path);
        }
        if let Ok(host) = env::var(HOST_ENV) {
            self.server.host = host;
        }
        if let Ok(port) = env::var(PORT_ENV) {
            self.server.port = port
                .parse()
                .with_context(|| format!("{} must be a valid port number, got '{}'", PORT_ENV, port))?;
        }
        Ok(self)
    }

    /// Bind address as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
