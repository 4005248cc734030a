//! Issue requests and the tracker's reply

use serde::{Deserialize, Serialize};

/// Body of an issue-creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRequest {
    /// Issue title
    pub title: String,
    /// Markdown body
    pub body: String,
}

/// An issue the tracker reported as created
///
/// Both fields are optional: any 201 response counts as success, even one
/// whose body cannot be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Issue number within the repository
    #[serde(default)]
    pub number: Option<u64>,
    /// Browser URL of the issue
    #[serde(default, rename = "html_url")]
    pub url: Option<String>,
}

/// Build the title for one chunk of a report.
///
/// A `(Part n)` suffix is appended only when the report produced more than
/// one chunk.
#[must_use]
pub fn issue_title(report_name: &str, commit: &str, part: usize, total: usize) -> String {
    let title = format!("{report_name} for commit - {commit}");
    if total > 1 {
        format!("{title} (Part {part})")
    } else {
        title
    }
}
