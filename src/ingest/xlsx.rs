/// Workbook reading: .xlsx file → in-memory `Workbook`.
///
/// File I/O is kept to the thin `read_workbook` wrapper; everything after
/// the calamine range is the pure `table_from_rows` conversion, which is
/// what the tests exercise. The file handle lives only inside
/// `read_workbook`'s scope and is released on every exit path, including
/// parse errors.
///
/// Cell typing rules:
/// - numeric cells (int or float) → `CellValue::Number`
/// - date-formatted cells → `CellValue::Timestamp` (via calamine's `dates`
///   feature); serials that fall outside chrono's range read as `Empty`
/// - ISO datetime text from newer writers is kept as `Text` and parsed by
///   the series assembler with the other text timestamp formats
/// - blank strings, error cells, and empty cells → `CellValue::Empty`

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::model::{CellValue, WearError};
use crate::workbook::{SheetTable, Workbook};

/// Reads every sheet of the workbook at `path`, in file order.
///
/// The first row of each sheet is taken as its header labels; the rest are
/// data rows. A sheet with no rows at all becomes a table with no columns
/// and no rows.
///
/// # Errors
/// `WearError::Workbook` — unreadable file or malformed xlsx. One terminal
/// error per run; there is no partial success.
pub fn read_workbook(path: &Path) -> Result<Workbook, WearError> {
    let mut xlsx: Xlsx<_> = open_workbook(path)?;

    let mut sheets = Vec::new();
    for name in xlsx.sheet_names().to_owned() {
        let range = xlsx.worksheet_range(&name)?;
        sheets.push(table_from_rows(&name, range.rows()));
    }

    Ok(Workbook { sheets })
}

/// Converts raw calamine rows into a `SheetTable`. First row supplies the
/// header labels.
pub fn table_from_rows<'a, I>(name: &str, rows: I) -> SheetTable
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter();

    let columns = match rows.next() {
        Some(header) => header.iter().map(header_label).collect(),
        None => Vec::new(),
    };

    let data_rows = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    SheetTable::new(name, columns, data_rows)
}

fn header_label(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::Timestamp(naive),
            None => CellValue::Empty,
        },
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
