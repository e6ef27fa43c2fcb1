use rowscan::loading::csv::{scan_csv_from_path, scan_csv_from_reader};
use rowscan::summary::{Summary, SummaryOptions, summarize_records};

fn summarize_csv(input: &'static str, delimiter: u8) -> Summary {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(input.as_bytes());
    let records = scan_csv_from_reader(rdr).unwrap();
    summarize_records(records, &SummaryOptions::default()).unwrap()
}

#[test]
fn summarize_csv_fixture_happy_path() {
    let records = scan_csv_from_path("tests/fixtures/people.csv", b',').unwrap();
    let summary = summarize_records(records, &SummaryOptions::default()).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.columns, vec!["id", "name", "score", "active"]);
    assert_eq!(summary.sample.len(), 2);

    let score = summary.numeric_stats("score").unwrap();
    assert_eq!(score.count, 2);
    assert_eq!(score.min, Some(87.25));
    assert_eq!(score.max, Some(98.5));

    // CSV booleans arrive as strings; "true"/"false" are opaque, not numeric.
    assert!(summary.numeric_stats("active").is_none());
    assert!(summary.numeric_stats("name").is_none());
}

#[test]
fn na_cells_count_as_missing_not_numeric() {
    let summary = summarize_csv("x,y\n1,2\n3,NA\n", b',');

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.missing_count("x"), Some(0));
    assert_eq!(summary.missing_count("y"), Some(1));

    let x = summary.numeric_stats("x").unwrap();
    assert_eq!(x.count, 2);
    assert_eq!(x.min, Some(1.0));
    assert_eq!(x.max, Some(3.0));
    assert_eq!(x.mean, Some(2.0));

    let y = summary.numeric_stats("y").unwrap();
    assert_eq!(y.count, 1);
    assert_eq!(y.min, Some(2.0));
    assert_eq!(y.max, Some(2.0));
    assert_eq!(y.mean, Some(2.0));
    assert_eq!(y.stddev, Some(0.0));
}

#[test]
fn quoted_thousands_separators_coerce() {
    let summary = summarize_csv("amount\n\"1,234.5\"\n\"2,000\"\n", b',');

    let amount = summary.numeric_stats("amount").unwrap();
    assert_eq!(amount.count, 2);
    assert_eq!(amount.min, Some(1234.5));
    assert_eq!(amount.max, Some(2000.0));
}

#[test]
fn short_rows_read_as_missing_values() {
    let summary = summarize_csv("a,b\n1,2\n3\n", b',');

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.missing_count("b"), Some(1));
    assert_eq!(summary.numeric_stats("a").unwrap().count, 2);
}

#[test]
fn tsv_uses_tab_delimiter() {
    let summary = summarize_csv("x\ty\n1\thello\n2\tworld\n", b'\t');

    assert_eq!(summary.columns, vec!["x", "y"]);
    assert_eq!(summary.numeric_stats("x").unwrap().count, 2);
    assert!(summary.numeric_stats("y").is_none());
}

#[test]
fn header_only_csv_yields_empty_summary() {
    let summary = summarize_csv("a,b,c\n", b',');

    assert_eq!(summary.rows, 0);
    // Columns come from the first data row, not the header line, so an
    // all-header file reports none.
    assert!(summary.columns.is_empty());
    assert!(summary.sample.is_empty());
    assert!(!summary.truncated);
}
