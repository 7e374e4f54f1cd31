/// Latest-reading extraction.
///
/// `extract_snapshots` walks every sheet of a workbook and reports, per
/// sheet, the most recent valid reading: sentinel placeholder rows are
/// dropped, and the positionally last remaining row supplies the timestamp
/// and the two length values. Rows are not sorted — the maintainers append
/// readings, so file order is time order and "latest" means "last".
///
/// Nothing in this path raises. Missing columns, missing values, and
/// sheets left empty by the filter are all encoded as `None` fields on the
/// resulting `SensorSnapshot`.

use crate::analysis::series::parse_timestamp;
use crate::config::SheetSchema;
use crate::model::{CellValue, SensorSnapshot};
use crate::workbook::{SheetTable, Workbook};

/// True when the row's total-length cell equals the sentinel. A sheet
/// without a total-length column has no sentinel rows at all.
pub(crate) fn is_sentinel_row(row: &[CellValue], total_col: Option<usize>, sentinel: f64) -> bool {
    match total_col {
        Some(idx) => row.get(idx).and_then(CellValue::as_number) == Some(sentinel),
        None => false,
    }
}

/// One snapshot per sheet, in workbook order.
pub fn extract_snapshots(
    workbook: &Workbook,
    schema: &SheetSchema,
    sentinel: f64,
) -> Vec<SensorSnapshot> {
    workbook
        .sheets
        .iter()
        .map(|sheet| snapshot_for_sheet(sheet, schema, sentinel))
        .collect()
}

fn snapshot_for_sheet(table: &SheetTable, schema: &SheetSchema, sentinel: f64) -> SensorSnapshot {
    let time_col = table.column_index(&schema.timestamp_column);
    let total_col = table.column_index(&schema.total_length_column);
    let actual_col = table.column_index(&schema.actual_length_column);

    let last_row = table
        .rows
        .iter()
        .filter(|row| !is_sentinel_row(row, total_col, sentinel))
        .next_back();

    let row = match last_row {
        Some(row) => row,
        None => return SensorSnapshot::empty(&table.name),
    };

    SensorSnapshot {
        sensor_name: table.name.clone(),
        latest_time: time_col.and_then(|idx| match row.get(idx) {
            Some(CellValue::Timestamp(ts)) => Some(*ts),
            Some(CellValue::Text(raw)) => parse_timestamp(raw),
            _ => None,
        }),
        total_length_mm: total_col.and_then(|idx| row.get(idx)).and_then(CellValue::as_number),
        actual_length_mm: actual_col.and_then(|idx| row.get(idx)).and_then(CellValue::as_number),
    }
}

/// Signed wear delta: current reading minus the row's reference length.
/// Negative means the sensor reads under the reference.
///
/// `None` whenever either side is absent — never zero as a stand-in for
/// "unknown". Callers render a no-data indicator in that case.
pub fn compute_delta(snapshot: &SensorSnapshot) -> Option<f64> {
    match (snapshot.actual_length_mm, snapshot.total_length_mm) {
        (Some(actual), Some(total)) => Some(actual - total),
        _ => None,
    }
}
