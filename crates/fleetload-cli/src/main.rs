mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fleetload_cli::logging::{init_logging, LoggingConfig};
use fleetload_cli::output::OutputFormat;
use fleetload_cli::terminal::ColorPalette;

use commands::plan::PlanCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Container loading and ship capacity tools")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors (also honored: NO_COLOR, TERM=dumb).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the end-to-end demonstration: load containers, berth them, unload and overfill.
    Demo,
    /// List ships from the catalog.
    Ships {
        /// Ship catalog CSV (falls back to FLEETLOAD_SHIP_DATA).
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Build, fill and berth the containers listed in a cargo plan CSV.
    Plan {
        /// Ship name from the catalog.
        #[arg(long)]
        ship: String,
        /// Cargo plan CSV (kind,max_load,cargo,hazardous,pressure,temperature).
        #[arg(long)]
        cargo: PathBuf,
        /// Ship catalog CSV (falls back to FLEETLOAD_SHIP_DATA).
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();
    let palette = ColorPalette::for_cli(cli.no_color);

    match &cli.command {
        Command::Demo => commands::demo::handle_demo(cli.format, &palette),
        Command::Ships { catalog } => {
            commands::ships::handle_list_ships(catalog.as_deref(), cli.format, &palette)
        }
        Command::Plan {
            ship,
            cargo,
            catalog,
        } => {
            let args = PlanCommandArgs {
                ship,
                cargo,
                catalog: catalog.as_deref(),
            };
            commands::plan::handle_plan(&args, cli.format, &palette)
        }
    }
}
