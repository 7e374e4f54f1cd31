/// Mill registry configuration loader - parses mills.toml
///
/// Separates mill and sensor metadata from code, making it easy to point a
/// mill at a new workbook, add sensors, or adjust column labels and the
/// sentinel value without recompiling the service. The original pages
/// hardcoded sensor codes and file paths; everything of that kind lives
/// here instead.

use serde::Deserialize;
use std::fs;

use crate::chart::ChartSpec;

/// Mill metadata loaded from mills.toml
#[derive(Debug, Clone, Deserialize)]
pub struct MillConfig {
    pub id: String,
    pub name: String,

    /// Path to the mill's sensor reading workbook, one sheet per sensor.
    pub workbook: String,

    /// Reference length of a freshly installed sensor, shown alongside
    /// live readings. The wear delta itself comes from each row's own
    /// total-length value, not from this.
    pub baseline_length_mm: f64,

    pub sensors: Vec<SensorConfig>,

    /// Column labels for snapshot extraction and series assembly.
    pub schema: SheetSchema,

    /// Target header labels for download copies, one entry per sheet.
    #[serde(default)]
    pub export: Vec<ExportSchema>,

    /// Chart definitions for this mill's plot section.
    #[serde(default)]
    pub chart: Vec<ChartSpec>,
}

/// One installed wear sensor
#[derive(Debug, Clone, Deserialize)]
pub struct SensorConfig {
    pub code: String,
    pub location: String,
}

/// Column labels the extractor looks for in each sensor sheet.
///
/// Labels are dataset-specific; a sheet that lacks one of these columns is
/// tolerated (the extractor encodes the missing field as absent).
#[derive(Debug, Clone, Deserialize)]
pub struct SheetSchema {
    pub timestamp_column: String,
    pub total_length_column: String,
    pub actual_length_column: String,
}

/// Replacement header labels for one sheet of an export copy.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSchema {
    pub sheet: String,
    pub columns: Vec<String>,
}

/// Parsed registry: the sentinel plus every configured mill.
#[derive(Debug, Clone)]
pub struct MillRegistry {
    /// Total-length value marking invalid/placeholder rows.
    pub sentinel_total_length: f64,
    pub mills: Vec<MillConfig>,
}

impl MillRegistry {
    pub fn mill(&self, id: &str) -> Option<&MillConfig> {
        self.mills.iter().find(|m| m.id == id)
    }
}

/// Root configuration structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default = "default_sentinel")]
    sentinel_total_length: f64,
    mill: Vec<MillConfig>,
}

fn default_sentinel() -> f64 {
    12337.0
}

/// Parses registry TOML text. This is the testable half of loading; the
/// service entry points use `load_registry`.
pub fn parse_registry(contents: &str) -> Result<MillRegistry, toml::de::Error> {
    let file: RegistryFile = toml::from_str(contents)?;
    Ok(MillRegistry {
        sentinel_total_length: file.sentinel_total_length,
        mills: file.mill,
    })
}

/// Loads the mill registry from mills.toml.
///
/// # Panics
/// Panics if the configuration file is missing, malformed, or contains
/// invalid data. This is intentional — the service cannot operate without
/// valid mill metadata.
///
/// # File Location
/// Expects `mills.toml` in the current working directory (project root
/// when running via `cargo run`).
pub fn load_registry() -> MillRegistry {
    let config_path = "mills.toml";

    let contents = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path, e));

    parse_registry(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path, e))
}
