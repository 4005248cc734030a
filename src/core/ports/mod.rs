//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (the filesystem and the issue tracker).
//!
//! Implementations live in the `adapters` module.

mod report_source;
mod tracker;

pub use report_source::{ReportFile, ReportSource};
pub use tracker::IssueTracker;
