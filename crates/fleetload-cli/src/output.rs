//! Output formatting for command results.
//!
//! The library renders reports as plain text; this module picks the output
//! format, adds terminal colors, and formats the ship catalog table.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use fleetload_lib::{FailureKind, ShipCatalog};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

const HAZARD_TAG: &str = "[HAZARD]";

const FAILURE_KINDS: [FailureKind; 3] = [
    FailureKind::Overfill,
    FailureKind::CapacityExceeded,
    FailureKind::Invalid,
];

fn is_failure_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    FAILURE_KINDS.iter().any(|kind| {
        let label = format!("{}:", kind.label());
        trimmed.starts_with(&label) || trimmed.contains(&format!(": {label}"))
    })
}

/// Apply terminal colors to report text line by line.
///
/// Hazard tags are highlighted, failure lines are red and ship headers bold.
/// With a plain palette the text is returned unchanged.
pub fn colorize(text: &str, palette: &ColorPalette) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if let Some(idx) = line.find(HAZARD_TAG) {
            let (indent, rest) = line.split_at(idx);
            let message = &rest[HAZARD_TAG.len()..];
            out.push_str(&format!(
                "{indent}{}{HAZARD_TAG}{}{message}",
                palette.tag_hazard, palette.reset
            ));
        } else if is_failure_line(line) {
            out.push_str(&format!("{}{line}{}", palette.red, palette.reset));
        } else if line.starts_with("Ship ") {
            out.push_str(&format!("{}{line}{}", palette.white_bold, palette.reset));
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Write `text` to stdout with colors applied.
pub fn print_text(text: &str, palette: &ColorPalette) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(colorize(text, palette).as_bytes())
        .context("failed to write output")?;
    Ok(())
}

/// Write `value` to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Summary line printed after a report, green when nothing failed.
pub fn status_line(failures: usize, palette: &ColorPalette) -> String {
    if failures == 0 {
        format!("{}All steps succeeded.{}", palette.green, palette.reset)
    } else {
        format!(
            "{}{} step(s) failed and were skipped.{}",
            palette.gray, failures, palette.reset
        )
    }
}

/// Render the ship catalog as a table.
pub fn render_ship_table(catalog: &ShipCatalog) -> String {
    let ships = catalog.ships_sorted();
    if ships.is_empty() {
        return "No ships available in catalog.\n".to_string();
    }

    let mut out = format!("Available ships ({}):\n", ships.len());
    out.push_str(&format!(
        "{:<16} {:>16} {:>14}\n",
        "Name", "Max Weight (kg)", "Max Containers"
    ));
    for ship in ships {
        out.push_str(&format!(
            "{:<16} {:>16} {:>14}\n",
            ship.name,
            format_with_separators(ship.max_weight.round() as u64),
            ship.max_containers
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_text_unchanged() {
        let text = "[HAZARD] Attempted unsafe load in KON-L-1\nLoaded 1 kg into KON-L-1.\n";
        assert_eq!(colorize(text, &ColorPalette::plain()), text);
    }

    #[test]
    fn colors_hazard_tags_and_failures() {
        let palette = ColorPalette::colored();
        let text = "  [HAZARD] unsafe\nOverfill: overfill in container KON-C-1\n  ship: Capacity exceeded: no room\nok line\n";
        let colored = colorize(text, &palette);
        let lines: Vec<&str> = colored.lines().collect();

        assert!(lines[0].starts_with("  \x1b[1;7;33m[HAZARD]\x1b[0m unsafe"));
        assert!(lines[1].starts_with(palette.red));
        assert!(lines[2].starts_with(palette.red));
        assert_eq!(lines[3], "ok line");
    }

    #[test]
    fn renders_ship_table_with_separators() {
        let csv = "name,max_weight,max_containers\nCargoX,50000,10\n";
        let catalog = ShipCatalog::from_reader(csv.as_bytes()).unwrap();
        let table = render_ship_table(&catalog);
        assert!(table.starts_with("Available ships (1):"));
        assert!(table.contains("50,000"));
        assert!(table.contains("CargoX"));
    }

    #[test]
    fn status_line_reports_failures() {
        let plain = ColorPalette::plain();
        assert_eq!(status_line(0, &plain), "All steps succeeded.");
        assert_eq!(status_line(2, &plain), "2 step(s) failed and were skipped.");
    }
}
