/// Test fixtures: representative in-memory workbook tables.
///
/// These mirror the shape of the hand-maintained sensor workbooks: one
/// sheet per sensor, a timestamp column plus two numeric length columns,
/// rows appended in reading order, and placeholder rows whose total length
/// carries the 12337 sentinel.
///
/// Sheet shape:
///   DateTime      — timestamp (date-formatted cell or text)
///   TotalLength   — reference length in mm, 12337 marks a placeholder row
///   ActualLength  — current sensor reading in mm

#[cfg(test)]
use chrono::NaiveDate;

#[cfg(test)]
use crate::model::CellValue;
#[cfg(test)]
use crate::workbook::{SheetTable, Workbook};

#[cfg(test)]
pub(crate) fn ts(day: u32, hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, day)
        .unwrap()
        .and_hms_opt(hour, 35, 20)
        .unwrap()
}

#[cfg(test)]
fn standard_columns() -> Vec<String> {
    vec![
        "DateTime".to_string(),
        "TotalLength".to_string(),
        "ActualLength".to_string(),
    ]
}

#[cfg(test)]
fn row(day: u32, hour: u32, total: f64, actual: f64) -> Vec<CellValue> {
    vec![
        CellValue::Timestamp(ts(day, hour)),
        CellValue::Number(total),
        CellValue::Number(actual),
    ]
}

/// Sheet "S1": one sentinel placeholder row followed by one real reading.
/// The snapshot must come from the second row (t2, 500, 210).
#[cfg(test)]
pub(crate) fn fixture_mixed_sheet() -> SheetTable {
    SheetTable::new(
        "S1",
        standard_columns(),
        vec![row(1, 11, 12337.0, 100.0), row(2, 11, 500.0, 210.0)],
    )
}

/// Sheet "S2": every row is a sentinel placeholder, so the sheet has no
/// usable reading at all.
#[cfg(test)]
pub(crate) fn fixture_all_sentinel_sheet() -> SheetTable {
    SheetTable::new("S2", standard_columns(), vec![row(1, 11, 12337.0, 100.0)])
}

/// Sheet "S3": lacks a TotalLength column entirely. No sentinel filtering
/// applies; the snapshot comes from the true last row.
#[cfg(test)]
pub(crate) fn fixture_no_total_column_sheet() -> SheetTable {
    SheetTable::new(
        "S3",
        vec!["DateTime".to_string(), "ActualLength".to_string()],
        vec![
            vec![CellValue::Timestamp(ts(1, 11)), CellValue::Number(310.0)],
            vec![CellValue::Timestamp(ts(3, 9)), CellValue::Number(305.0)],
        ],
    )
}

/// Sheet "S4": text timestamps in the workbook's dd-mm-yyyy caption style,
/// with a sentinel row in the middle of the series.
#[cfg(test)]
pub(crate) fn fixture_text_timestamp_sheet() -> SheetTable {
    SheetTable::new(
        "S4",
        standard_columns(),
        vec![
            vec![
                CellValue::Text("11:35:20 01-12-2024".to_string()),
                CellValue::Number(500.0),
                CellValue::Number(400.0),
            ],
            vec![
                CellValue::Text("11:35:20 02-12-2024".to_string()),
                CellValue::Number(12337.0),
                CellValue::Number(100.0),
            ],
            vec![
                CellValue::Text("11:35:20 03-12-2024".to_string()),
                CellValue::Number(500.0),
                CellValue::Number(390.0),
            ],
        ],
    )
}

/// Three-sheet workbook covering the mixed, all-sentinel, and
/// missing-column cases, in that order.
#[cfg(test)]
pub(crate) fn fixture_workbook() -> Workbook {
    Workbook {
        sheets: vec![
            fixture_mixed_sheet(),
            fixture_all_sentinel_sheet(),
            fixture_no_total_column_sheet(),
        ],
    }
}
