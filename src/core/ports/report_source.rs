//! Report source port
//!
//! Defines the interface for discovering and loading smell reports.

use std::path::PathBuf;

use super::super::models::{PublishError, SmellReport};

/// A discovered report file, not yet read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    /// File name as it appears in the directory
    pub file_name: String,
    /// Full path to the file
    pub path: PathBuf,
}

/// Source of smell reports
///
/// Implementations decide where reports live (a directory of CSV files,
/// fixtures in tests, ...).
pub trait ReportSource {
    /// List the reports to publish, in publishing order
    fn discover(&self) -> Result<Vec<ReportFile>, PublishError>;

    /// Read and parse one report
    fn load(&self, file: &ReportFile) -> Result<SmellReport, PublishError>;
}
