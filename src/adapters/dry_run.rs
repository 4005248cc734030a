//! Dry-run issue tracker
//!
//! Implements `IssueTracker` without any network I/O. Requests are kept so
//! the caller can show what would have been filed.

use crate::core::models::{CreatedIssue, IssueRequest, PublishError};
use crate::core::ports::IssueTracker;

/// Records issue requests instead of sending them
#[derive(Debug, Default)]
pub struct DryRunTracker {
    requests: Vec<IssueRequest>,
}

impl DryRunTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, in order
    #[must_use]
    pub fn requests(&self) -> &[IssueRequest] {
        &self.requests
    }
}

impl IssueTracker for DryRunTracker {
    fn create_issue(&mut self, request: &IssueRequest) -> Result<CreatedIssue, PublishError> {
        self.requests.push(request.clone());
        Ok(CreatedIssue {
            number: u64::try_from(self.requests.len()).ok(),
            url: None,
        })
    }
}
