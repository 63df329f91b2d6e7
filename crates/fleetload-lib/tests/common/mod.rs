//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use fleetload_lib::{CargoPlan, ShipCatalog};

/// Path to the fixtures directory (ship catalog, cargo plan).
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_catalog() -> ShipCatalog {
    ShipCatalog::from_path(&fixtures_dir().join("ships.csv")).expect("load fixture ships.csv")
}

#[allow(dead_code)]
pub fn fixture_plan() -> CargoPlan {
    CargoPlan::from_path(&fixtures_dir().join("cargo.csv")).expect("load fixture cargo.csv")
}
