//! Tests for report parsing and naming

use smellpost::core::models::{ReportError, SmellReport, is_report_file_name, report_name};
use test_case::test_case;

fn records(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter().map(|r| r.iter().map(|s| (*s).to_string()).collect()).collect()
}

#[test]
fn test_first_record_is_header() {
    let report =
        SmellReport::from_records("god_class", records(&[&["id", "smell"], &["1", "God Class"]]))
            .unwrap();
    assert_eq!(report.header(), ["id", "smell"]);
    assert_eq!(report.rows(), records(&[&["1", "God Class"]]).as_slice());
}

#[test]
fn test_header_only_report_has_no_rows() {
    let report = SmellReport::from_records("r", records(&[&["id", "smell"]])).unwrap();
    assert_eq!(report.row_count(), 0);
}

#[test]
fn test_empty_report_is_an_error() {
    let err = SmellReport::from_records("empty", Vec::new()).unwrap_err();
    assert_eq!(err, ReportError::Empty("empty".to_string()));
    assert!(err.to_string().contains("empty"));
}

#[test_case("long_method.csv", "long_method" ; "plain")]
#[test_case(" spaced.csv ", "spaced" ; "trimmed")]
#[test_case("a.csv.csv", "a.csv" ; "only last suffix removed")]
#[test_case("upper.CSV", "upper.CSV" ; "suffix is case sensitive")]
fn test_report_name(file_name: &str, expected: &str) {
    assert_eq!(report_name(file_name), expected);
}

#[test_case("a.csv", true ; "csv")]
#[test_case("a.csv ", true ; "trailing whitespace")]
#[test_case("b.CSV", false ; "upper case")]
#[test_case("notes.txt", false ; "text")]
#[test_case("csv", false ; "bare word")]
fn test_is_report_file_name(file_name: &str, expected: bool) {
    assert_eq!(is_report_file_name(file_name), expected);
}
