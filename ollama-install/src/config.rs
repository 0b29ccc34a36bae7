use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::InstallError;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub platform: PlatformConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

/// What to install and where its releases live.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PackageConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Endpoint returning the latest release as JSON with a `tag_name` field
    #[serde(default = "default_release_api")]
    pub release_api: String,

    /// Download URLs are `<download_base>/<tag>/<asset>`
    #[serde(default = "default_download_base")]
    pub download_base: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            release_api: default_release_api(),
            download_base: default_download_base(),
        }
    }
}

/// Platform tokens baked into the asset name.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlatformConfig {
    #[serde(default = "default_os")]
    pub os: String,

    #[serde(default = "default_arch")]
    pub arch: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            os: default_os(),
            arch: default_arch(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout for the release lookup. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_name() -> String {
    "ollama".to_string()
}

fn default_release_api() -> String {
    "https://api.github.com/repos/ollama/ollama/releases/latest".to_string()
}

fn default_download_base() -> String {
    "https://github.com/ollama/ollama/releases/download".to_string()
}

fn default_os() -> String {
    "linux".to_string()
}

fn default_arch() -> String {
    "amd64".to_string()
}

fn default_user_agent() -> String {
    concat!("ollama-install/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Config {
    /// Load configuration from file, falling back to defaults when it is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| InstallError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("ollama-install.toml"))
            .unwrap_or_else(|| PathBuf::from(".config/ollama-install.toml"))
    }

    /// The package name ends up in filesystem paths, so it must be a single component.
    pub fn validate(&self, origin: &Path) -> std::result::Result<(), InstallError> {
        let invalid = |message: &str| InstallError::Config {
            path: origin.display().to_string(),
            message: message.to_string(),
        };

        let name = self.package.name.as_str();
        if name.is_empty() || name == "." || name == ".." {
            return Err(invalid("package.name must be a non-empty file name"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("package.name must not contain path separators"));
        }
        if self.platform.os.is_empty() || self.platform.arch.is_empty() {
            return Err(invalid("platform.os and platform.arch must be set"));
        }
        Ok(())
    }
}
