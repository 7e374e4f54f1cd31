/// Spreadsheet ingest for the wear monitoring service.
///
/// Submodules:
/// - `xlsx` — calamine-backed workbook reading and cell typing.
/// - `fixtures` (test only) — representative in-memory workbook tables.

pub mod fixtures;
pub mod xlsx;
