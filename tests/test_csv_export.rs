use finrec_dash::config::config::Config;
use finrec_dash::{
    build_view, export_csv, parse_csv, CsvLoader, DashError, DataExporter, DataTable, DataType,
    DataValue, Schema, ViewConfig,
};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn create_test_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "고객명,비자종류,월소득,국적,외화예금
Wang,E-9,250,중국,1200.5
Nguyen,D-2,80,베트남,
Smith,F-2,420,미국,30000.0
\"Kim, Jisoo\",E-7,310,중국,455.25
"
    )
    .unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_loaded_types_drive_sorting() {
    let file = create_test_csv();
    let table = CsvLoader::load_csv(file.path(), "dummy").unwrap();

    assert_eq!(table.get_column("월소득").unwrap().data_type, DataType::Integer);
    assert_eq!(table.get_column("외화예금").unwrap().data_type, DataType::Float);
    assert_eq!(table.get_value(3, 0), Some(&DataValue::from("Kim, Jisoo")));

    let config = ViewConfig::new(["고객명", "외화예금"]).sorted_by("외화예금", false);
    let view = build_view(Arc::new(table), &config).unwrap();

    assert_eq!(
        export_csv(&view).unwrap(),
        "고객명,외화예금\nSmith,30000.0\nWang,1200.5\n\"Kim, Jisoo\",455.25\nNguyen,\n"
    );
}

#[test]
fn test_export_parse_round_trip() {
    let file = create_test_csv();
    let table = CsvLoader::load_csv(file.path(), "dummy").unwrap();

    let config = ViewConfig::new(["국적", "고객명", "월소득", "외화예금"]).sorted_by("월소득", true);
    let view = build_view(Arc::new(table), &config).unwrap();

    let text = export_csv(&view).unwrap();
    let parsed = parse_csv(&text, &view.schema()).unwrap();

    assert_eq!(parsed.column_names(), view.column_names());
    assert_eq!(parsed.rows, view.to_table().rows);
}

#[test]
fn test_export_to_path_and_download() {
    let file = create_test_csv();
    let table = Arc::new(CsvLoader::load_csv(file.path(), "dummy").unwrap());
    let view = build_view(table, &ViewConfig::new(["고객명"])).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("names.csv");
    let rows = DataExporter::export_to_path(&view, &out).unwrap();
    assert_eq!(rows, 4);

    let written = std::fs::read_to_string(&out).unwrap();
    let download = DataExporter::export_download(&view, "names.csv", "text/csv").unwrap();
    assert_eq!(download.data, written.into_bytes());
    assert_eq!(download.mime, "text/csv");
}

#[test]
fn test_header_only_file_loads_but_does_not_export() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "a,b").unwrap();
    file.flush().unwrap();

    let table = CsvLoader::load_csv(file.path(), "empty").unwrap();
    assert_eq!(table.row_count(), 0);

    let view = build_view(Arc::new(table), &ViewConfig::default()).unwrap();
    assert!(matches!(export_csv(&view), Err(DashError::EmptyDataset)));
}

#[test]
fn test_ragged_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "a,b\n1,2\n3\n").unwrap();
    file.flush().unwrap();

    let err = CsvLoader::load_csv(file.path(), "ragged").unwrap_err();
    assert!(matches!(err, DashError::MalformedRow { row: 1, .. }));
}

#[test]
fn test_download_uses_configured_mime() {
    let file = create_test_csv();
    let table = Arc::new(CsvLoader::load_csv(file.path(), "dummy").unwrap());
    let view = build_view(table, &ViewConfig::new(["국적"])).unwrap();

    let mut config = Config::default();
    config.export.mime = "text/csv; charset=utf-8".to_string();
    let download =
        DataExporter::export_download(&view, &config.export.file_name, &config.export.mime)
            .unwrap();

    assert_eq!(download.mime, "text/csv; charset=utf-8");
    assert_eq!(download.file_name, "foreigner_ingu_merged2.csv");
}

#[test]
fn test_empty_string_cell_round_trips() {
    let schema = Schema::untyped(["name", "note"]).unwrap();
    let records = vec![HashMap::from([
        ("name".to_string(), DataValue::from("A")),
        ("note".to_string(), DataValue::from("")),
    ])];
    let table = DataTable::from_records("notes", &schema, records).unwrap();
    let view = build_view(Arc::new(table), &ViewConfig::default()).unwrap();

    let text = export_csv(&view).unwrap();
    assert_eq!(text, "name,note\nA,\n");

    let parsed = parse_csv(&text, &view.schema()).unwrap();
    assert_eq!(parsed.rows, view.to_table().rows);
}

#[test]
fn test_mixed_column_keeps_cell_text() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "code,label\n007,a\nE-9,b\n12,c\n1.50,d\n").unwrap();
    file.flush().unwrap();

    let table = CsvLoader::load_csv(file.path(), "codes").unwrap();
    assert_eq!(table.get_column("code").unwrap().data_type, DataType::Mixed);

    let config = ViewConfig::new(["code", "label"]).sorted_by("label", true);
    let view = build_view(Arc::new(table), &config).unwrap();
    let text = export_csv(&view).unwrap();
    assert_eq!(text, "code,label\n007,a\nE-9,b\n12,c\n1.50,d\n");

    let parsed = parse_csv(&text, &view.schema()).unwrap();
    assert_eq!(parsed.rows, view.to_table().rows);
}
