//! Demo command handler: runs the end-to-end loading scenario.

use anyhow::{Context, Result};

use fleetload_cli::output::{print_json, print_text, status_line, OutputFormat};
use fleetload_cli::terminal::ColorPalette;
use fleetload_lib::{run_demo, TracingNotifier};

/// Handle the demo subcommand.
///
/// Domain failures inside the scenario are reported, not returned as errors.
pub fn handle_demo(format: OutputFormat, palette: &ColorPalette) -> Result<()> {
    let report = run_demo(&TracingNotifier).context("demo scenario could not start")?;

    match format {
        OutputFormat::Text => {
            print_text(&report.render_text(), palette)?;
            println!();
            println!("{}", status_line(report.failures().count(), palette));
            println!("Testing finished.");
            Ok(())
        }
        OutputFormat::Json => print_json(&report),
    }
}
