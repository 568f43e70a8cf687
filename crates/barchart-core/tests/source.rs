// File: crates/barchart-core/tests/source.rs
// Purpose: CSV loading, row mapping and malformed-input errors.

use barchart_core::{ChartError, CsvSource, DataSource, MemorySource, Record};

#[test]
fn population_is_scaled_from_thousands() {
    let csv = "country,population\nChina,1439323\nIndia,1380004\n";
    let records = CsvSource::new("inline.csv").load_from(csv.as_bytes()).expect("load");
    assert_eq!(
        records,
        vec![Record::new("China", 1_439_323_000.0), Record::new("India", 1_380_004_000.0)]
    );
}

#[test]
fn extra_columns_are_ignored_and_headers_match_loosely() {
    let csv = "rank, Country ,Population,code\n1,China,1439323.776,CHN\n";
    let records = CsvSource::new("inline.csv").load_from(csv.as_bytes()).expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, "China");
    assert!((records[0].value - 1_439_323_776.0).abs() < 1e-3);
}

#[test]
fn missing_column_is_reported() {
    let csv = "country,people\nChina,1\n";
    let err = CsvSource::new("inline.csv").load_from(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn(ref c) if c == "population"), "{err}");
}

#[test]
fn non_numeric_value_names_the_row() {
    let csv = "country,population\nChina,1439323\nIndia,lots\n";
    let err = CsvSource::new("inline.csv").load_from(csv.as_bytes()).unwrap_err();
    match err {
        ChartError::ParseValue { row, column, raw } => {
            assert_eq!(row, 2);
            assert_eq!(column, "population");
            assert_eq!(raw, "lots");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn custom_delimiter_and_mapper() {
    let csv = "name;value\nA;1.5\nB;2\n";
    let source = CsvSource::new("inline.csv")
        .delimiter(b';')
        .map_rows(|row| Ok(Record::new(row.require("name")?, row.number("value")?)));
    let records = source.load_from(csv.as_bytes()).expect("load");
    assert_eq!(records, vec![Record::new("A", 1.5), Record::new("B", 2.0)]);
}

#[test]
fn load_reads_file_from_disk() {
    let path = std::path::PathBuf::from("target/test_out/source_top2.csv");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "country,population\nChina,1439323\nIndia,1380004\n").unwrap();

    let records = CsvSource::new(&path).load().expect("load from file");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].category, "India");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = CsvSource::new("target/test_out/does_not_exist.csv").load().unwrap_err();
    assert!(matches!(err, ChartError::Io(_)));
}

#[test]
fn memory_source_returns_its_records() {
    let records = vec![Record::new("X", 1.0)];
    assert_eq!(MemorySource::new(records.clone()).load().expect("load"), records);
}
