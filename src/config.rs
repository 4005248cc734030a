//! Configuration management
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `smellpost.toml` in the working directory (or `--config <path>`)
//! 3. Environment variables
//! 4. Command-line flags (applied by the binary)
//!
//! Credentials only ever come from the environment:
//!
//! | Variable                  | Meaning                                   |
//! |---------------------------|-------------------------------------------|
//! | `PAT`                     | Token sent as `Authorization: Bearer`     |
//! | `GITHUB_REPOSITORY_OWNER` | Repository owner                          |
//! | `GITHUB_REPOSITORY`       | `owner/name`; the name part is used       |
//! | `GITHUB_API_URL`          | API base (default `https://api.github.com`) |

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::DEFAULT_CHUNK_SIZE;
use crate::paths;

/// Token environment variable
pub const ENV_TOKEN: &str = "PAT";
/// Owner environment variable
pub const ENV_OWNER: &str = "GITHUB_REPOSITORY_OWNER";
/// Combined `owner/name` environment variable
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
/// API base environment variable
pub const ENV_API_URL: &str = "GITHUB_API_URL";

/// Errors raised while assembling configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// `GITHUB_REPOSITORY` has no `/name` part
    #[error("GITHUB_REPOSITORY must look like `owner/name`, got `{0}`")]
    MalformedRepository(String),

    /// Chunk size of zero
    #[error("chunk_size must be at least 1")]
    InvalidChunkSize,

    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },
}

/// Contents of `smellpost.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Report discovery settings
    #[serde(default)]
    pub reports: ReportsConfig,
    /// Tracker settings
    #[serde(default)]
    pub tracker: TrackerConfig,
}

/// `[reports]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// Directory holding the CSV reports
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Maximum data rows per issue
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_dir() -> PathBuf {
    paths::smells_dir()
}

const fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            chunk_size: default_chunk_size(),
        }
    }
}

/// `[tracker]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl FileConfig {
    /// Load the config file at `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `smellpost.toml` from the working directory
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&paths::config_file())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reports.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize);
        }
        Ok(())
    }
}

/// Identity and endpoint of the issue tracker
#[derive(Clone)]
pub struct TrackerSettings {
    /// Bearer token
    pub token: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// API base URL
    pub api_url: String,
}

impl std::fmt::Debug for TrackerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerSettings")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl TrackerSettings {
    /// Read settings from the process environment.
    ///
    /// `file_api_url` is used when `GITHUB_API_URL` is unset.
    pub fn from_env(file_api_url: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), file_api_url)
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// Every required variable is validated up front so a missing value is
    /// reported by name instead of surfacing as an HTTP 401 or 404.
    pub fn from_lookup<F>(lookup: F, file_api_url: Option<&str>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let token = required(ENV_TOKEN)?;
        let owner = required(ENV_OWNER)?;
        let repository = required(ENV_REPOSITORY)?;
        let repo = repository_name(&repository)?;

        let api_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| file_api_url.map(String::from))
            .unwrap_or_else(|| paths::DEFAULT_API_URL.to_string());

        Ok(Self {
            token,
            owner,
            repo,
            api_url,
        })
    }
}

/// Extract the name from an `owner/name` repository identifier
pub fn repository_name(repository: &str) -> Result<String, ConfigError> {
    repository
        .split('/')
        .nth(1)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .ok_or_else(|| ConfigError::MalformedRepository(repository.to_string()))
}
