//! Centralized path and endpoint defaults for smellpost
//!
//! ## Working Directory Layout
//!
//! ```text
//! ./
//! ├── smellpost.toml          # Optional config file
//! └── smells/                 # Smell reports, one CSV per detector run
//!     ├── long_method.csv
//!     └── god_class.csv
//! ```

use std::path::PathBuf;

/// Directory scanned for smell reports (relative to the working directory)
pub const SMELLS_DIR: &str = "smells";

/// Optional configuration filename
pub const CONFIG_FILE: &str = "smellpost.toml";

/// File suffix that marks a smell report (matched case-sensitively)
pub const REPORT_SUFFIX: &str = ".csv";

/// Default GitHub REST API base
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Get the default smells directory.
#[must_use]
pub fn smells_dir() -> PathBuf {
    PathBuf::from(SMELLS_DIR)
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Build the issue-creation endpoint for a repository.
///
/// Trailing slashes on `api_url` are ignored so both
/// `https://api.github.com` and `https://api.github.com/` work.
#[must_use]
pub fn issues_endpoint(api_url: &str, owner: &str, repo: &str) -> String {
    format!("{}/repos/{owner}/{repo}/issues", api_url.trim_end_matches('/'))
}
