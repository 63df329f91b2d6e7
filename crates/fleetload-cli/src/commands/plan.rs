//! Plan command handler: loads a CSV cargo plan onto a catalog ship.

use std::path::Path;

use anyhow::{Context, Result};

use fleetload_cli::output::{print_json, print_text, status_line, OutputFormat};
use fleetload_cli::terminal::ColorPalette;
use fleetload_lib::{execute_plan, CargoPlan, ContainerYard, TracingNotifier};

use crate::commands::ships::load_ship_catalog;

/// Arguments for the plan command.
#[derive(Debug, Clone)]
pub struct PlanCommandArgs<'a> {
    /// Ship name from the catalog.
    pub ship: &'a str,
    /// Cargo plan CSV.
    pub cargo: &'a Path,
    /// Ship catalog override.
    pub catalog: Option<&'a Path>,
}

/// Handle the plan subcommand.
pub fn handle_plan(
    args: &PlanCommandArgs<'_>,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let catalog = load_ship_catalog(args.catalog)?;
    let mut ship = catalog.require(args.ship)?.build()?;
    let plan = CargoPlan::from_path(args.cargo)
        .with_context(|| format!("failed to load cargo plan from {}", args.cargo.display()))?;

    tracing::info!(ship = %ship.name(), rows = plan.len(), "executing cargo plan");
    let mut yard = ContainerYard::new();
    let report = execute_plan(&mut ship, &mut yard, &plan, &TracingNotifier)?;

    match format {
        OutputFormat::Text => {
            print_text(&report.render_text(), palette)?;
            println!();
            println!("{}", status_line(report.failures(), palette));
            Ok(())
        }
        OutputFormat::Json => print_json(&report),
    }
}
