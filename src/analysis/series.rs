/// Per-sheet wear time series for the chart pages.
///
/// `wear_series` yields the sheet's sentinel-filtered rows in original row
/// order as `(timestamp, actual length)` points. The iterator is lazy and
/// non-restartable: no row is examined before the consumer reaches it, and
/// consumed rows are gone.
///
/// Error contract (deliberately different from snapshot extraction): a
/// timestamp cell that is present but unparseable yields an `Err` item,
/// and `collect_series` propagates it, failing the whole sheet — the chart
/// page shows an error state instead of silently plotting a gappy series.
/// Absent cells and absent columns are still tolerated by skipping, same
/// as the snapshot path.

use chrono::{NaiveDate, NaiveDateTime};

use crate::analysis::snapshots::is_sentinel_row;
use crate::config::SheetSchema;
use crate::model::{CellValue, WearError, WearPoint};
use crate::workbook::SheetTable;

/// Text timestamp formats seen in the hand-maintained workbooks, tried in
/// order: ISO 8601, spreadsheet-style "Y-m-d H:M[:S]", and the dashboard
/// caption style "H:M:S d-m-Y".
const TEXT_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%H:%M:%S %d-%m-%Y",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

/// Parses a raw text timestamp. Bare dates resolve to midnight.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in TEXT_TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
}

/// Lazy iterator over one sheet's wear points.
pub struct WearSeries<'a> {
    table: &'a SheetTable,
    sentinel: f64,
    time_col: Option<usize>,
    value_col: Option<usize>,
    total_col: Option<usize>,
    next_row: usize,
}

/// Builds the series iterator for one sheet. A sheet missing its timestamp
/// or actual-length column produces an empty series.
pub fn wear_series<'a>(
    table: &'a SheetTable,
    schema: &SheetSchema,
    sentinel: f64,
) -> WearSeries<'a> {
    WearSeries {
        table,
        sentinel,
        time_col: table.column_index(&schema.timestamp_column),
        value_col: table.column_index(&schema.actual_length_column),
        total_col: table.column_index(&schema.total_length_column),
        next_row: 0,
    }
}

/// Eager helper: the full series, or the first timestamp error.
pub fn collect_series(
    table: &SheetTable,
    schema: &SheetSchema,
    sentinel: f64,
) -> Result<Vec<WearPoint>, WearError> {
    wear_series(table, schema, sentinel).collect()
}

impl Iterator for WearSeries<'_> {
    type Item = Result<WearPoint, WearError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (time_col, value_col) = match (self.time_col, self.value_col) {
            (Some(t), Some(v)) => (t, v),
            _ => return None,
        };

        while self.next_row < self.table.rows.len() {
            let idx = self.next_row;
            self.next_row += 1;

            let row = &self.table.rows[idx];
            if is_sentinel_row(row, self.total_col, self.sentinel) {
                continue;
            }

            let at = match self.table.cell(idx, time_col) {
                CellValue::Timestamp(ts) => *ts,
                CellValue::Text(raw) => match parse_timestamp(raw) {
                    Some(ts) => ts,
                    None => return Some(Err(self.malformed(idx, raw.clone()))),
                },
                CellValue::Empty => continue,
                CellValue::Number(n) => return Some(Err(self.malformed(idx, n.to_string()))),
                CellValue::Bool(b) => return Some(Err(self.malformed(idx, b.to_string()))),
            };

            let value = match self.table.cell(idx, value_col).as_number() {
                Some(v) => v,
                None => continue,
            };

            return Some(Ok(WearPoint {
                at,
                actual_length_mm: value,
            }));
        }

        None
    }
}

impl WearSeries<'_> {
    fn malformed(&self, idx: usize, raw: String) -> WearError {
        WearError::MalformedTimestamp {
            sheet: self.table.name.clone(),
            row: idx + 1,
            raw,
        }
    }
}
