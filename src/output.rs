//! Output formatting for human and JSON modes
//!
//! This module renders the outcome of a run either as human-readable text
//! or as machine-parseable JSON.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::models::IssueRequest;
use crate::core::services::{ReportOutcome, ReportSummary, RunSummary};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl RunSummary {
    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable summary text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        if self.reports.is_empty() {
            out.push_str("No smell reports found.\n");
            return out;
        }

        for report in &self.reports {
            match &report.outcome {
                ReportOutcome::Published { issues } => {
                    let _ = writeln!(out, "{}: {} issue(s)", report.file, issues.len());
                    for issue in issues {
                        let _ = writeln!(
                            out,
                            "  {}{}",
                            issue.title,
                            issue.url.as_deref().map(|u| format!(" <{u}>")).unwrap_or_default()
                        );
                    }
                },
                ReportOutcome::InputError { message } => {
                    let _ = writeln!(out, "{}: FAILED ({message})", report.file);
                },
                ReportOutcome::RemoteError {
                    message, issues, ..
                } => {
                    let _ = writeln!(
                        out,
                        "{}: FAILED after {} issue(s) ({message})",
                        report.file,
                        issues.len()
                    );
                },
            }
        }

        let failed = self.failed().len();
        let _ = writeln!(
            out,
            "\n{} issue(s) created for commit {}",
            self.issues_created(),
            self.commit
        );
        if failed > 0 {
            let _ = writeln!(out, "{failed} report(s) failed");
        }
        out
    }
}

/// Issues a dry run would have filed
#[derive(Debug, Clone, Serialize)]
pub struct DryRunPreview<'a> {
    /// Requests in publishing order
    pub issues: &'a [IssueRequest],
    /// Reports that could not be rendered
    pub failed: Vec<&'a ReportSummary>,
}

impl DryRunPreview<'_> {
    /// Render the preview based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable preview text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        for issue in self.issues {
            let _ = writeln!(out, "=== {}\n", issue.title);
            out.push_str(&issue.body);
            out.push('\n');
        }
        let _ = writeln!(out, "Dry run: {} issue(s) not sent", self.issues.len());
        for report in &self.failed {
            let _ = writeln!(out, "{}: FAILED ({})", report.file, failure_message(&report.outcome));
        }
        if !self.failed.is_empty() {
            let _ = writeln!(out, "{} report(s) failed", self.failed.len());
        }
        out
    }
}

fn failure_message(outcome: &ReportOutcome) -> &str {
    match outcome {
        ReportOutcome::InputError { message } | ReportOutcome::RemoteError { message, .. } => {
            message.as_str()
        },
        ReportOutcome::Published { .. } => "published",
    }
}
