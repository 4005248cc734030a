//! Publishing errors

use thiserror::Error;

use super::report::ReportError;

/// Errors raised while publishing a report
#[derive(Debug, Error)]
pub enum PublishError {
    /// The report content is unusable
    #[error(transparent)]
    Input(#[from] ReportError),

    /// The report file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The report file is not valid CSV
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The tracker answered with something other than 201 Created
    #[error("Failed to create issue: HTTP {status}: {body}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// The tracker could not be reached
    #[error("transport error: {0}")]
    Transport(String),
}
