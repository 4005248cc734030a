//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `directory` - Smell reports read from a directory of CSV files
//! - `github` - Issues filed through the GitHub REST API
//! - `dry_run` - Issues recorded in memory, nothing sent

pub mod directory;
pub mod dry_run;
pub mod github;

pub use directory::CsvDirectory;
pub use dry_run::DryRunTracker;
pub use github::GitHubTracker;
