//! Directory-of-CSV report source
//!
//! Implements `ReportSource` over a flat directory: every regular file whose
//! name ends in `.csv` is one report. Subdirectories are not descended into.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::{PublishError, SmellReport, is_report_file_name, report_name};
use crate::core::ports::{ReportFile, ReportSource};

/// Reads smell reports from a directory of CSV files
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    dir: PathBuf,
}

impl CsvDirectory {
    /// Create a source rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory being scanned
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportSource for CsvDirectory {
    /// Files are returned sorted by name so runs are reproducible.
    fn discover(&self) -> Result<Vec<ReportFile>, PublishError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !is_report_file_name(&file_name) {
                continue;
            }
            // Follows symlinks, so a link to a CSV counts as a report
            let path = entry.path();
            if !fs::metadata(&path).is_ok_and(|m| m.is_file()) {
                debug!("Skipping non-file entry {}", path.display());
                continue;
            }
            files.push(ReportFile { file_name, path });
        }
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(files)
    }

    fn load(&self, file: &ReportFile) -> Result<SmellReport, PublishError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&file.path)?;

        let records = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(String::from).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()?;

        Ok(SmellReport::from_records(report_name(&file.file_name), records)?)
    }
}
