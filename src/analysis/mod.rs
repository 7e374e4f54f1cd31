/// Data shaping for the mill wear monitoring pages.
///
/// Submodules:
/// - `snapshots` — sentinel filtering, latest-reading extraction, wear delta.
/// - `series` — per-sheet wear time series for charting.

pub mod series;
pub mod snapshots;
