//! Ships command handler for listing catalog ships.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use fleetload_cli::output::{print_json, print_text, render_ship_table, OutputFormat};
use fleetload_cli::terminal::ColorPalette;
use fleetload_lib::ShipCatalog;

/// Environment variable naming the ship catalog CSV.
pub const SHIP_DATA_ENV: &str = "FLEETLOAD_SHIP_DATA";

/// Handle the ships subcommand.
pub fn handle_list_ships(
    catalog_path: Option<&Path>,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let catalog = load_ship_catalog(catalog_path)?;
    match format {
        OutputFormat::Text => print_text(&render_ship_table(&catalog), palette),
        OutputFormat::Json => print_json(&catalog.ships_sorted()),
    }
}

/// Load the ship catalog.
///
/// Searches in the following order:
/// 1. The `--catalog` argument
/// 2. `FLEETLOAD_SHIP_DATA` environment variable
/// 3. Debug fixture path (only in debug builds)
pub fn load_ship_catalog(explicit: Option<&Path>) -> Result<ShipCatalog> {
    if let Some(path) = explicit {
        return ShipCatalog::from_path(path)
            .with_context(|| format!("failed to load ship data from {}", path.display()));
    }

    let path = ship_data_candidates()
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| {
            anyhow::anyhow!("ship catalog not found; pass --catalog or set {SHIP_DATA_ENV}")
        })?;

    tracing::debug!(path = %path.display(), "resolved ship catalog");
    ShipCatalog::from_path(&path)
        .with_context(|| format!("failed to load ship data from {}", path.display()))
}

fn ship_data_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(env_path) = std::env::var(SHIP_DATA_ENV) {
        candidates.push(PathBuf::from(env_path));
    }

    if cfg!(debug_assertions) {
        let fixture =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/ships.csv");
        candidates.push(fixture);
    }

    candidates
}
