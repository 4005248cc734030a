//! Tests for chunking and title construction

use smellpost::core::models::{
    Chunk, DEFAULT_CHUNK_SIZE, SmellReport, chunk_report, issue_title,
};

fn numbered_report(rows: usize) -> SmellReport {
    let mut records = vec![vec!["id".to_string(), "smell".to_string()]];
    records.extend((1..=rows).map(|i| vec![i.to_string(), format!("smell {i}")]));
    SmellReport::from_records("long_method", records).unwrap()
}

fn titles(chunks: &[Chunk], commit: &str) -> Vec<String> {
    chunks
        .iter()
        .map(|c| issue_title("long_method", commit, c.part, c.total))
        .collect()
}

#[test]
fn test_default_chunk_size() {
    assert_eq!(DEFAULT_CHUNK_SIZE, 500);
}

#[test]
fn test_501_rows_make_two_chunks() {
    let report = numbered_report(501);
    let chunks = chunk_report(&report, 500).unwrap();

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].rows.len(), 500);
    assert_eq!(chunks[0].rows[0][0], "1");
    assert_eq!(chunks[0].rows[499][0], "500");
    assert_eq!(chunks[1].rows, vec![vec!["501".to_string(), "smell 501".to_string()]]);
    for chunk in &chunks {
        assert_eq!(chunk.header, ["id", "smell"]);
    }

    assert_eq!(
        titles(&chunks, "abc123"),
        [
            "long_method for commit - abc123 (Part 1)",
            "long_method for commit - abc123 (Part 2)",
        ]
    );
}

#[test]
fn test_small_report_is_one_chunk_without_suffix() {
    let report = numbered_report(3);
    let chunks = chunk_report(&report, 500).unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].rows.len(), 3);
    assert_eq!((chunks[0].part, chunks[0].total), (1, 1));
    assert_eq!(titles(&chunks, "abc123"), ["long_method for commit - abc123"]);
}

#[test]
fn test_header_only_report_is_one_empty_chunk() {
    let chunks = chunk_report(&numbered_report(0), 500).unwrap();
    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].rows.is_empty());
    assert_eq!(chunks[0].header, ["id", "smell"]);
}

#[test]
fn test_commit_inserted_verbatim() {
    assert_eq!(
        issue_title("dup", "feature/x 1.0", 1, 1),
        "dup for commit - feature/x 1.0"
    );
}

#[test]
fn test_single_chunk_never_suffixed() {
    assert_eq!(issue_title("r", "c", 3, 1), "r for commit - c");
}
