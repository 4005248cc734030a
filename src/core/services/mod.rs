//! Business logic services
//!
//! Pure orchestration logic that operates on domain models and ports.
//!
//! - [`markdown`] - Render chunks as Markdown tables
//! - [`publisher`] - Turn reports into issues

pub mod markdown;
pub mod publisher;

pub use markdown::{escape_cell, render_markdown};
pub use publisher::{
    FailurePolicy, PublishOptions, PublishedIssue, Publisher, ReportOutcome, ReportSummary,
    RunSummary,
};
