//! Domain models for smellpost
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`SmellReport`] - A parsed CSV report (header + rows)
//! - [`Chunk`] - A page of report rows with the header re-attached
//! - [`IssueRequest`] - Title and Markdown body for one issue
//! - [`CreatedIssue`] - What the tracker returned on success

mod chunk;
mod error;
mod issue;
mod report;

pub use chunk::{Chunk, DEFAULT_CHUNK_SIZE, chunk_report};
pub use error::PublishError;
pub use issue::{CreatedIssue, IssueRequest, issue_title};
pub use report::{ReportError, SmellReport, is_report_file_name, report_name};
