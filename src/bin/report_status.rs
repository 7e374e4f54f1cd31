//! Live Sensor Status Report
//!
//! Prints the "Wear Sensor Live Status" section of the dashboard for every
//! configured mill: installed sensors, then one metric line per sensor
//! sheet with the latest reading, its timestamp, and the signed wear delta
//! against the row's reference length. Sheets with no usable reading show
//! a no-data indicator instead of numbers.
//!
//! Usage:
//!   cargo run --bin report_status
//!
//! Configuration:
//!   mills.toml in the current working directory

use std::path::Path;

use wearmon_service::analysis::snapshots::{compute_delta, extract_snapshots};
use wearmon_service::config::load_registry;
use wearmon_service::ingest::xlsx::read_workbook;
use wearmon_service::model::SensorSnapshot;

fn main() {
    println!("⚙  Mill Wear Sensor Status");
    println!("================================\n");

    let registry = load_registry();
    println!("📋 Loaded {} mills (sentinel = {})", registry.mills.len(), registry.sentinel_total_length);

    let mut reported = 0;
    let mut failed = 0;

    for mill in &registry.mills {
        println!("\n{} — {} sensors installed", mill.name, mill.sensors.len());
        for sensor in &mill.sensors {
            println!("   ✅ {} — {}", sensor.code, sensor.location);
        }
        println!("   Reference length when new: {} mm", mill.baseline_length_mm);

        let workbook = match read_workbook(Path::new(&mill.workbook)) {
            Ok(wb) => wb,
            Err(e) => {
                eprintln!("   ⚠ Could not read {}: {}", mill.workbook, e);
                failed += 1;
                continue;
            }
        };

        for snapshot in extract_snapshots(&workbook, &mill.schema, registry.sentinel_total_length) {
            print_metric(&snapshot);
        }
        reported += 1;
    }

    println!("\n================================");
    println!("Mills reported: {}", reported);
    println!("Mills failed:   {}", failed);
    if failed > 0 {
        std::process::exit(1);
    }
}

fn print_metric(snapshot: &SensorSnapshot) {
    let when = match snapshot.latest_time {
        Some(ts) => ts.format("%H:%M:%S %d-%m-%Y").to_string(),
        None => "—".to_string(),
    };

    match (snapshot.actual_length_mm, compute_delta(snapshot)) {
        (Some(reading), Some(delta)) => {
            println!(
                "   📟 {}: {} mm ({:+} mm)  latest reading at {}",
                snapshot.sensor_name, reading, delta, when
            );
        }
        (Some(reading), None) => {
            println!(
                "   📟 {}: {} mm (delta unavailable)  latest reading at {}",
                snapshot.sensor_name, reading, when
            );
        }
        (None, _) => {
            println!("   📟 {}: no data", snapshot.sensor_name);
        }
    }
}
