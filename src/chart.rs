/// Parameterized chart-series assembly.
///
/// The original pages each carried their own near-identical chart builder.
/// Here a single `assemble_chart` consumes a `ChartSpec` — trace
/// definitions, axis titles, optional y-range — and produces plot-ready
/// point series. Rendering itself belongs to the presentation layer; this
/// module only shapes the data.
///
/// Sentinel placeholder rows are excluded here the same way the snapshot
/// and series paths exclude them: when the spec names a total-length
/// column and the sheet has it, rows carrying the sentinel in that column
/// never plot.
///
/// Unlike snapshot extraction, a trace column named by the spec but absent
/// from the sheet is a configuration error, not tolerable absence: the
/// chart was explicitly asked for and cannot be drawn.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::analysis::series::parse_timestamp;
use crate::analysis::snapshots::is_sentinel_row;
use crate::model::{CellValue, WearError};
use crate::workbook::SheetTable;

/// One plotted line: source column plus display label.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceSpec {
    pub column: String,
    pub label: String,
}

/// Everything needed to build one chart from one sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSpec {
    /// Sheet the traces are read from.
    pub sheet: String,
    pub timestamp_column: String,
    /// Column checked for the placeholder sentinel. `None` (or a label the
    /// sheet lacks) means no rows are filtered, matching the extractor.
    #[serde(default)]
    pub total_length_column: Option<String>,
    pub traces: Vec<TraceSpec>,
    pub x_title: String,
    pub y_title: String,
    #[serde(default)]
    pub y_range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTrace {
    pub label: String,
    pub points: Vec<(NaiveDateTime, f64)>,
}

/// Assembled chart data, ready for a plotting layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub x_title: String,
    pub y_title: String,
    pub y_range: Option<[f64; 2]>,
    pub traces: Vec<ChartTrace>,
}

/// Builds every trace of `spec` from `table`, preserving trace order and
/// row order. Sentinel rows are dropped before any trace sees them.
///
/// # Errors
/// - `WearError::MissingChartColumn` — the timestamp column or a trace
///   column is not in the sheet.
/// - `WearError::MalformedTimestamp` — a timestamp cell is present but
///   unparseable; the whole chart fails rather than dropping points.
pub fn assemble_chart(
    table: &SheetTable,
    spec: &ChartSpec,
    sentinel: f64,
) -> Result<ChartData, WearError> {
    let time_col = table
        .column_index(&spec.timestamp_column)
        .ok_or_else(|| missing_column(table, &spec.timestamp_column))?;

    let total_col = spec
        .total_length_column
        .as_deref()
        .and_then(|label| table.column_index(label));

    let mut traces = Vec::with_capacity(spec.traces.len());
    for trace in &spec.traces {
        let value_col = table
            .column_index(&trace.column)
            .ok_or_else(|| missing_column(table, &trace.column))?;

        let mut points = Vec::new();
        for idx in 0..table.rows.len() {
            if is_sentinel_row(&table.rows[idx], total_col, sentinel) {
                continue;
            }

            let at = match table.cell(idx, time_col) {
                CellValue::Timestamp(ts) => *ts,
                CellValue::Text(raw) => parse_timestamp(raw)
                    .ok_or_else(|| malformed(table, idx, raw.clone()))?,
                CellValue::Empty => continue,
                CellValue::Number(n) => return Err(malformed(table, idx, n.to_string())),
                CellValue::Bool(b) => return Err(malformed(table, idx, b.to_string())),
            };

            if let Some(value) = table.cell(idx, value_col).as_number() {
                points.push((at, value));
            }
        }

        traces.push(ChartTrace {
            label: trace.label.clone(),
            points,
        });
    }

    Ok(ChartData {
        x_title: spec.x_title.clone(),
        y_title: spec.y_title.clone(),
        y_range: spec.y_range,
        traces,
    })
}

fn missing_column(table: &SheetTable, column: &str) -> WearError {
    WearError::MissingChartColumn {
        sheet: table.name.clone(),
        column: column.to_string(),
    }
}

fn malformed(table: &SheetTable, idx: usize, raw: String) -> WearError {
    WearError::MalformedTimestamp {
        sheet: table.name.clone(),
        row: idx + 1,
        raw,
    }
}
