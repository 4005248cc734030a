//! Smell reports
//!
//! A report is the parsed content of one CSV file: a header row followed by
//! zero or more data rows. Reports are read once, never mutated, and dropped
//! after they have been chunked.
//!
//! # Examples
//!
//! ```
//! use smellpost::core::models::{SmellReport, report_name};
//!
//! let records = vec![
//!     vec!["id".to_string(), "smell".to_string()],
//!     vec!["1".to_string(), "Long Method".to_string()],
//! ];
//! let report = SmellReport::from_records(report_name("long_method.csv"), records).unwrap();
//! assert_eq!(report.name(), "long_method");
//! assert_eq!(report.header(), ["id", "smell"]);
//! assert_eq!(report.row_count(), 1);
//! ```

use thiserror::Error;

use crate::paths::REPORT_SUFFIX;

/// Errors that make a report unusable
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The file held no records at all, not even a header
    #[error("report `{0}` is empty (no header row)")]
    Empty(String),

    /// Chunks must hold at least one row
    #[error("invalid chunk size: {0} (must be at least 1)")]
    InvalidChunkSize(usize),
}

/// A parsed smell report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmellReport {
    name: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SmellReport {
    /// Build a report from raw CSV records, the first being the header.
    pub fn from_records(
        name: impl Into<String>,
        records: Vec<Vec<String>>,
    ) -> Result<Self, ReportError> {
        let name = name.into();
        let mut records = records.into_iter();
        let header = records.next().ok_or_else(|| ReportError::Empty(name.clone()))?;
        Ok(Self {
            name,
            header,
            rows: records.collect(),
        })
    }

    /// Report name (file name without the `.csv` suffix)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, header excluded
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Derive a report name from its file name.
///
/// Surrounding whitespace is trimmed and one trailing `.csv` is removed.
/// The suffix match is case-sensitive, so `a.CSV` keeps its extension.
#[must_use]
pub fn report_name(file_name: &str) -> String {
    let trimmed = file_name.trim();
    trimmed.strip_suffix(REPORT_SUFFIX).unwrap_or(trimmed).to_string()
}

/// Whether a file name marks a smell report
#[must_use]
pub fn is_report_file_name(file_name: &str) -> bool {
    file_name.trim().ends_with(REPORT_SUFFIX)
}
