//! Publish service - turns reports into issues
//!
//! For each report: parse, chunk, then render and file one issue per chunk.
//! Everything runs sequentially on the calling thread. Nothing is retried
//! and issues already filed are never rolled back.

use log::{debug, error, info};
use serde::Serialize;

use super::markdown::render_markdown;
use crate::core::models::{IssueRequest, PublishError, chunk_report, issue_title};
use crate::core::ports::{IssueTracker, ReportFile, ReportSource};

/// What to do when a report fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the whole run at the first failure
    #[default]
    Abort,
    /// Record the failure and move on to the next report
    Continue,
}

/// Settings for one publishing run
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Commit identifier written into every title
    pub commit: String,
    /// Maximum data rows per issue
    pub chunk_size: usize,
    /// Failure handling
    pub policy: FailurePolicy,
}

/// An issue filed during the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedIssue {
    /// Issue title
    pub title: String,
    /// Issue number, when the tracker reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    /// Issue URL, when the tracker reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Result of publishing one report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// Every chunk was filed
    Published {
        /// Issues created, in chunk order
        issues: Vec<PublishedIssue>,
    },
    /// The report could not be read or parsed
    InputError {
        /// Error description
        message: String,
    },
    /// The tracker rejected a request or could not be reached
    RemoteError {
        /// HTTP status, absent for transport failures
        #[serde(rename = "http_status", skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        /// Error description
        message: String,
        /// Issues created before the failure
        issues: Vec<PublishedIssue>,
    },
}

/// Outcome for one report file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// File name of the report
    pub file: String,
    /// What happened
    #[serde(flatten)]
    pub outcome: ReportOutcome,
}

/// Outcome of a whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Commit identifier the issues were tagged with
    pub commit: String,
    /// Per-report outcomes, in publishing order
    pub reports: Vec<ReportSummary>,
}

impl RunSummary {
    /// Total number of issues created
    #[must_use]
    pub fn issues_created(&self) -> usize {
        self.reports
            .iter()
            .map(|r| match &r.outcome {
                ReportOutcome::Published { issues } | ReportOutcome::RemoteError { issues, .. } => {
                    issues.len()
                },
                ReportOutcome::InputError { .. } => 0,
            })
            .sum()
    }

    /// Reports that did not publish completely
    #[must_use]
    pub fn failed(&self) -> Vec<&ReportSummary> {
        self.reports
            .iter()
            .filter(|r| !matches!(r.outcome, ReportOutcome::Published { .. }))
            .collect()
    }

    /// Whether every report published completely
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed().is_empty()
    }
}

/// Publishes every report from a source to a tracker
#[derive(Debug)]
pub struct Publisher<'a, S, T> {
    source: &'a S,
    tracker: &'a mut T,
    options: PublishOptions,
}

impl<'a, S: ReportSource, T: IssueTracker> Publisher<'a, S, T> {
    /// Create a publisher
    pub fn new(source: &'a S, tracker: &'a mut T, options: PublishOptions) -> Self {
        Self {
            source,
            tracker,
            options,
        }
    }

    /// Publish all reports.
    ///
    /// Under [`FailurePolicy::Abort`] the first failure is returned as an
    /// error and later reports are never started. Under
    /// [`FailurePolicy::Continue`] failures are recorded in the summary.
    /// Discovery failures always abort.
    pub fn run(&mut self) -> Result<RunSummary, PublishError> {
        let files = self.source.discover()?;
        info!("Found {} smell report(s)", files.len());

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            let mut issues = Vec::new();
            let outcome = match self.publish_report(file, &mut issues) {
                Ok(()) => ReportOutcome::Published { issues },
                Err(err) => {
                    error!("Error processing file {}: {err}", file.file_name);
                    if self.options.policy == FailurePolicy::Abort {
                        return Err(err);
                    }
                    failure_outcome(&err, issues)
                },
            };
            reports.push(ReportSummary {
                file: file.file_name.clone(),
                outcome,
            });
        }

        Ok(RunSummary {
            commit: self.options.commit.clone(),
            reports,
        })
    }

    fn publish_report(
        &mut self,
        file: &ReportFile,
        issues: &mut Vec<PublishedIssue>,
    ) -> Result<(), PublishError> {
        let report = self.source.load(file)?;
        let chunks = chunk_report(&report, self.options.chunk_size)?;
        debug!(
            "{}: {} row(s) in {} chunk(s)",
            file.file_name,
            report.row_count(),
            chunks.len()
        );

        for chunk in &chunks {
            let request = IssueRequest {
                title: issue_title(report.name(), &self.options.commit, chunk.part, chunk.total),
                body: render_markdown(chunk),
            };
            let created = self.tracker.create_issue(&request).inspect_err(|err| {
                if let PublishError::Remote { status, body } = err {
                    error!("Error creating issue: {status}");
                    error!("Response: {body}");
                }
            })?;
            info!("Filed issue: {}", request.title);
            issues.push(PublishedIssue {
                title: request.title,
                number: created.number,
                url: created.url,
            });
        }
        Ok(())
    }
}

fn failure_outcome(err: &PublishError, issues: Vec<PublishedIssue>) -> ReportOutcome {
    match err {
        PublishError::Remote { status, .. } => ReportOutcome::RemoteError {
            status: Some(*status),
            message: err.to_string(),
            issues,
        },
        PublishError::Transport(_) => ReportOutcome::RemoteError {
            status: None,
            message: err.to_string(),
            issues,
        },
        _ => ReportOutcome::InputError {
            message: err.to_string(),
        },
    }
}
