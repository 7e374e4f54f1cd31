/// In-memory workbook model.
///
/// A `Workbook` is an ordered sequence of `SheetTable`s, preserving the
/// sheet order of the backing file. Each `SheetTable` carries its header
/// labels separately from its data rows, and column lookup is by header
/// label so that "column absent" is observable (`column_index` returns
/// `None`) and distinct from "cell empty" (`CellValue::Empty`).
///
/// Workbooks are read fresh on every invocation and discarded after use;
/// nothing here caches or persists.

use crate::model::CellValue;

/// One sheet: name, ordered header labels, and data rows.
///
/// Rows keep the file's original order. Nothing in this crate sorts them;
/// "latest reading" means the positionally last row, matching how the
/// maintainers append to the spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(name: &str, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        SheetTable {
            name: name.to_string(),
            columns,
            rows,
        }
    }

    /// Position of a column by header label, or `None` if the sheet has no
    /// such column. First match wins on duplicate labels.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Cell at (row, column index). Out-of-range positions read as `Empty`,
    /// so ragged rows behave like rows padded with empty cells.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Empty)
    }

    /// Numeric value at (row, column label). `None` when the column is
    /// absent, the cell is empty, or the cell is non-numeric.
    pub fn number(&self, row: usize, label: &str) -> Option<f64> {
        let col = self.column_index(label)?;
        self.cell(row, col).as_number()
    }
}

/// An ordered collection of sheets, one per sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<SheetTable>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&SheetTable> {
        self.sheets.iter().find(|s| s.name == name)
    }
}
