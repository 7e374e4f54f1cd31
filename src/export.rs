/// Re-labelled workbook copies for download.
///
/// The dashboard offers the raw workbook for download with presentable
/// header labels (e.g. "P6051 Reading" instead of an internal tag). Only
/// the labels change: row count and row values are preserved exactly. A
/// sheet whose width does not match its target schema fails the export
/// with a descriptive error — never silent truncation or padding.

use crate::config::ExportSchema;
use crate::model::WearError;
use crate::workbook::{SheetTable, Workbook};

/// Copy of one sheet with its header labels replaced.
pub fn relabel_for_export(table: &SheetTable, schema: &ExportSchema) -> Result<SheetTable, WearError> {
    if table.columns.len() != schema.columns.len() {
        return Err(WearError::ExportColumnMismatch {
            sheet: table.name.clone(),
            expected: schema.columns.len(),
            found: table.columns.len(),
        });
    }

    Ok(SheetTable {
        name: table.name.clone(),
        columns: schema.columns.clone(),
        rows: table.rows.clone(),
    })
}

/// Copy of a whole workbook with every sheet re-labelled by name-matched
/// schema. A sheet named by no schema fails the export: a download must be
/// fully labelled.
pub fn relabel_workbook(
    workbook: &Workbook,
    schemas: &[ExportSchema],
) -> Result<Workbook, WearError> {
    let sheets = workbook
        .sheets
        .iter()
        .map(|table| {
            let schema = schemas
                .iter()
                .find(|s| s.sheet == table.name)
                .ok_or_else(|| WearError::MissingExportSchema {
                    sheet: table.name.clone(),
                })?;
            relabel_for_export(table, schema)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Workbook { sheets })
}
