//! KPI console viewer
//!
//! Prints daily sheets of the KPI workbook as tables.

use clap::Parser;
use pyt_kpi::cli::{self, SourceOptions};
use pyt_kpi::logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kpi-show")]
#[command(version)]
#[command(about = "Print drilling KPI sheets to the console")]
#[command(long_about = r#"
kpi-show - Drilling KPI console viewer

With dates, prints each requested day. Unknown dates list the available sheets.
Without dates, loads every sheet and prints the last three days.

Example usage:
  kpi-show                 # Summary + last three days
  kpi-show 15-01 16-01     # Detailed view of those days
  kpi-show 15-01 --flat    # One line per unit
"#)]
struct Args {
    /// Dates to print (sheet names)
    dates: Vec<String>,

    /// One line per unit instead of the grouped view
    #[arg(long)]
    flat: bool,

    /// Path to the KPI workbook (.xlsx)
    #[arg(short, long, env = "KPI_WORKBOOK")]
    input: Option<PathBuf>,

    /// YAML config file (workbook, excluded_sheets)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let source = SourceOptions {
        input: args.input,
        config: args.config,
    };

    cli::show(args.dates, args.flat, source)?;
    Ok(())
}
