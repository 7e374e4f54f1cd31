/// Integration test for the full wear-sensor pipeline:
/// workbook → sentinel filter → snapshot → delta → series → export.
///
/// The workbook is built through the public model types rather than read
/// from an .xlsx fixture file; the calamine conversion has its own unit
/// tests next to `ingest::xlsx`. The scenarios here are the reference
/// cases from the page behavior: a sheet with one placeholder row and one
/// real reading, a sheet that is all placeholders, and a sheet missing the
/// total-length column.

use chrono::{NaiveDate, NaiveDateTime};

use wearmon_service::analysis::series::collect_series;
use wearmon_service::analysis::snapshots::{compute_delta, extract_snapshots};
use wearmon_service::chart::assemble_chart;
use wearmon_service::config::parse_registry;
use wearmon_service::export::{relabel_for_export, relabel_workbook};
use wearmon_service::model::CellValue;
use wearmon_service::workbook::{SheetTable, Workbook};

const TEST_REGISTRY: &str = r#"
sentinel_total_length = 12337.0

[[mill]]
id = "sag1"
name = "SAG Mill #1"
workbook = "data/sag1_sensor_readings.xlsx"
baseline_length_mm = 400.0
sensors = [{ code = "S1", location = "Row #2 FE lifter bar" }]

[mill.schema]
timestamp_column = "DateTime"
total_length_column = "TotalLength"
actual_length_column = "ActualLength"

[[mill.export]]
sheet = "S1"
columns = ["Datetime", "Total Length (mm)", "Reading (mm)"]

[[mill.export]]
sheet = "S2"
columns = ["Datetime", "Total Length (mm)", "Reading (mm)"]

[[mill.chart]]
sheet = "S1"
timestamp_column = "DateTime"
total_length_column = "TotalLength"
x_title = "Date and Time"
y_title = "Sensor Thickness - mm"
y_range = [0.0, 450.0]
traces = [{ column = "ActualLength", label = "S1" }]
"#;

fn t(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, day)
        .unwrap()
        .and_hms_opt(11, 35, 20)
        .unwrap()
}

fn reading_row(day: u32, total: f64, actual: f64) -> Vec<CellValue> {
    vec![
        CellValue::Timestamp(t(day)),
        CellValue::Number(total),
        CellValue::Number(actual),
    ]
}

fn columns() -> Vec<String> {
    vec![
        "DateTime".to_string(),
        "TotalLength".to_string(),
        "ActualLength".to_string(),
    ]
}

/// S1: placeholder row then a real reading. S2: placeholders only.
fn test_workbook() -> Workbook {
    Workbook {
        sheets: vec![
            SheetTable::new(
                "S1",
                columns(),
                vec![reading_row(1, 12337.0, 100.0), reading_row(2, 500.0, 210.0)],
            ),
            SheetTable::new("S2", columns(), vec![reading_row(1, 12337.0, 100.0)]),
        ],
    }
}

#[test]
fn test_pipeline_snapshot_and_delta_for_mixed_sheet() {
    let registry = parse_registry(TEST_REGISTRY).expect("test registry should parse");
    let mill = registry.mill("sag1").expect("sag1 configured");

    let workbook = test_workbook();
    let snapshots = extract_snapshots(&workbook, &mill.schema, registry.sentinel_total_length);

    assert_eq!(snapshots.len(), 2, "one snapshot per sheet, in sheet order");

    let s1 = &snapshots[0];
    assert_eq!(s1.sensor_name, "S1");
    assert_eq!(s1.latest_time, Some(t(2)));
    assert_eq!(s1.total_length_mm, Some(500.0));
    assert_eq!(s1.actual_length_mm, Some(210.0));
    assert_eq!(compute_delta(s1), Some(-290.0));
}

#[test]
fn test_pipeline_all_sentinel_sheet_reports_no_data() {
    let registry = parse_registry(TEST_REGISTRY).unwrap();
    let mill = registry.mill("sag1").unwrap();

    let workbook = test_workbook();
    let snapshots = extract_snapshots(&workbook, &mill.schema, registry.sentinel_total_length);

    let s2 = &snapshots[1];
    assert_eq!(s2.sensor_name, "S2");
    assert!(s2.latest_time.is_none());
    assert!(s2.total_length_mm.is_none());
    assert!(s2.actual_length_mm.is_none());
    assert_eq!(compute_delta(s2), None, "no delta without both lengths");
}

#[test]
fn test_pipeline_series_matches_snapshot_filtering() {
    let registry = parse_registry(TEST_REGISTRY).unwrap();
    let mill = registry.mill("sag1").unwrap();
    let workbook = test_workbook();

    let s1_points = collect_series(
        &workbook.sheets[0],
        &mill.schema,
        registry.sentinel_total_length,
    )
    .expect("series should assemble");
    assert_eq!(s1_points.len(), 1);
    assert_eq!(s1_points[0].at, t(2));
    assert_eq!(s1_points[0].actual_length_mm, 210.0);

    let s2_points = collect_series(
        &workbook.sheets[1],
        &mill.schema,
        registry.sentinel_total_length,
    )
    .expect("empty-after-filter is tolerated");
    assert!(s2_points.is_empty());
}

#[test]
fn test_pipeline_chart_assembly_from_configured_spec() {
    let registry = parse_registry(TEST_REGISTRY).unwrap();
    let mill = registry.mill("sag1").unwrap();
    let workbook = test_workbook();

    let spec = &mill.chart[0];
    let sheet = workbook.sheet(&spec.sheet).expect("chart sheet exists");
    let chart = assemble_chart(sheet, spec, registry.sentinel_total_length)
        .expect("chart should assemble");

    assert_eq!(chart.traces.len(), 1);
    assert_eq!(chart.traces[0].label, "S1");
    // The placeholder row (total 12337) must not plot; only the real
    // reading does.
    assert_eq!(chart.traces[0].points, vec![(t(2), 210.0)]);
    assert_eq!(chart.y_title, "Sensor Thickness - mm");
}

#[test]
fn test_pipeline_export_round_trip() {
    let registry = parse_registry(TEST_REGISTRY).unwrap();
    let mill = registry.mill("sag1").unwrap();
    let workbook = test_workbook();

    let relabelled = relabel_workbook(&workbook, &mill.export).expect("export should relabel");

    assert_eq!(relabelled.sheets.len(), workbook.sheets.len());
    for (before, after) in workbook.sheets.iter().zip(&relabelled.sheets) {
        assert_eq!(after.rows, before.rows, "rows must survive relabelling untouched");
        assert_eq!(
            after.columns,
            vec!["Datetime", "Total Length (mm)", "Reading (mm)"]
        );
    }
}

#[test]
fn test_pipeline_export_rejects_width_mismatch() {
    let registry = parse_registry(TEST_REGISTRY).unwrap();
    let mill = registry.mill("sag1").unwrap();

    // A two-column sheet against the three-column schema.
    let narrow = SheetTable::new(
        "S1",
        vec!["DateTime".to_string(), "ActualLength".to_string()],
        vec![vec![CellValue::Timestamp(t(1)), CellValue::Number(210.0)]],
    );

    let err = relabel_for_export(&narrow, &mill.export[0]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("S1"), "error should name the sheet: {}", msg);
    assert!(msg.contains("3") && msg.contains("2"), "error should give both widths: {}", msg);
}
