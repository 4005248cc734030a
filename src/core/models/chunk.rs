//! Paging reports into issue-sized chunks

use super::report::{ReportError, SmellReport};

/// Default maximum number of data rows per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// A page of a report's data rows with the header re-attached
///
/// Every chunk renders as a complete table on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Column names, identical to the report header
    pub header: Vec<String>,
    /// Data rows in report order
    pub rows: Vec<Vec<String>>,
    /// 1-indexed position of this chunk
    pub part: usize,
    /// Number of chunks the report produced
    pub total: usize,
}

impl Chunk {
    /// Whether this chunk is one of several
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.total > 1
    }
}

/// Split a report into chunks of at most `max_rows` data rows.
///
/// A report with `max_rows` rows or fewer (including a header-only report)
/// yields exactly one chunk. Concatenating the chunks' rows in order
/// reproduces the report's rows.
pub fn chunk_report(report: &SmellReport, max_rows: usize) -> Result<Vec<Chunk>, ReportError> {
    if max_rows == 0 {
        return Err(ReportError::InvalidChunkSize(max_rows));
    }

    let header = report.header().to_vec();
    if report.row_count() <= max_rows {
        return Ok(vec![Chunk {
            header,
            rows: report.rows().to_vec(),
            part: 1,
            total: 1,
        }]);
    }

    let total = report.row_count().div_ceil(max_rows);
    Ok(report
        .rows()
        .chunks(max_rows)
        .enumerate()
        .map(|(i, rows)| Chunk {
            header: header.clone(),
            rows: rows.to_vec(),
            part: i + 1,
            total,
        })
        .collect())
}
