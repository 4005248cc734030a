//! Issue tracker port
//!
//! Defines the interface for filing issues.

use super::super::models::{CreatedIssue, IssueRequest, PublishError};

/// Issue tracker abstraction
///
/// Creating an issue is not idempotent: calling this twice with the same
/// request files two issues.
pub trait IssueTracker {
    /// Create one issue
    ///
    /// Returns [`PublishError::Remote`] for any response other than
    /// `201 Created`.
    fn create_issue(&mut self, request: &IssueRequest) -> Result<CreatedIssue, PublishError>;
}
