/// wearmon_service: SAG mill wear sensor data shaping.
///
/// Turns the hand-maintained sensor reading workbooks into display-ready
/// data for the monitoring pages: per-sensor latest-reading snapshots with
/// wear deltas, per-sheet time series for charting, and re-labelled
/// workbook copies for download. Rendering (charts, metric widgets,
/// tables) lives in the presentation layer, not here.
///
/// # Module structure
///
/// ```text
/// wearmon_service
/// ├── model      — shared data types (CellValue, SensorSnapshot, WearPoint, WearError)
/// ├── config     — mill registry configuration loader (mills.toml)
/// ├── workbook   — in-memory workbook model with typed cells
/// ├── ingest
/// │   ├── xlsx      — calamine-backed spreadsheet reading
/// │   └── fixtures (test only) — representative workbook tables
/// ├── analysis
/// │   ├── snapshots — sentinel filtering + latest-reading extraction + delta
/// │   └── series    — per-sheet wear time series for charting
/// ├── chart      — parameterized chart-series assembly
/// └── export     — re-labelled workbook copies for download
/// ```

/// Public modules
pub mod analysis;
pub mod chart;
pub mod config;
pub mod export;
pub mod ingest;
pub mod model;
pub mod workbook;
