/// Shared data types for the wear sensor pipeline.
///
/// Everything downstream of ingest speaks in these types: typed cells
/// (`CellValue`), per-sensor latest-reading summaries (`SensorSnapshot`),
/// chart points (`WearPoint`), and the single error enum (`WearError`).

use chrono::NaiveDateTime;
use thiserror::Error;

/// A typed spreadsheet cell.
///
/// `Empty` means the cell carries no value. This is distinct from a column
/// being absent from a sheet entirely (the column accessor on `SheetTable`
/// returns `None` for that), and both are distinct from a genuine zero.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Timestamp(NaiveDateTime),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Numeric view of the cell. Text, booleans, and timestamps are not
    /// coerced; only a genuine numeric cell yields a value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// The most recent valid reading for one sensor sheet.
///
/// A sheet with no rows left after sentinel filtering produces a snapshot
/// with every field except `sensor_name` set to `None` — absence is encoded
/// here, never signaled as an error and never substituted with zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSnapshot {
    pub sensor_name: String,
    pub latest_time: Option<NaiveDateTime>,
    pub total_length_mm: Option<f64>,
    pub actual_length_mm: Option<f64>,
}

impl SensorSnapshot {
    /// An all-absent snapshot for a sheet with no usable rows.
    pub fn empty(sensor_name: &str) -> Self {
        SensorSnapshot {
            sensor_name: sensor_name.to_string(),
            latest_time: None,
            total_length_mm: None,
            actual_length_mm: None,
        }
    }
}

/// One plotted point of a sensor's wear history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WearPoint {
    pub at: NaiveDateTime,
    pub actual_length_mm: f64,
}

/// Terminal errors for the extraction, charting, and export paths.
///
/// Tolerated conditions (missing columns, empty cells, empty-after-filter
/// sheets) never reach this enum; they are encoded as absence in the result
/// types above.
#[derive(Debug, Error)]
pub enum WearError {
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// Row numbers are 1-based positions among a sheet's data rows
    /// (the header row is not counted).
    #[error("sheet '{sheet}' row {row}: malformed timestamp '{raw}'")]
    MalformedTimestamp {
        sheet: String,
        row: usize,
        raw: String,
    },

    #[error("export schema for sheet '{sheet}' expects {expected} columns, sheet has {found}")]
    ExportColumnMismatch {
        sheet: String,
        expected: usize,
        found: usize,
    },

    #[error("no export schema defined for sheet '{sheet}'")]
    MissingExportSchema { sheet: String },

    #[error("chart column '{column}' not found in sheet '{sheet}'")]
    MissingChartColumn { sheet: String, column: String },
}
