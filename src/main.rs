use clap::Parser;
use pyt_kpi::cli::{self, SourceOptions};
use pyt_kpi::error::KpiResult;
use pyt_kpi::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kpi-csv")]
#[command(about = "Export drilling KPI sheets to flat CSV files for dashboards")]
#[command(long_about = "kpi-csv - Drilling KPI workbook to CSV

Reads the daily sheets of the KPI PyT workbook (one sheet per day, e.g. 15-01)
and writes three semicolon-delimited, UTF-8 BOM files ready for Power BI or Excel:

  <base>_metros.csv          One row per unit, plus phase and day totals
  <base>_roc.csv             ROC meters per phase, plus the ROC total
  <base>_resumen_diario.csv  One row per day

The 'Datos' and 'Patios' sheets are skipped.

EXAMPLES:
  kpi-csv                        # Export every date sheet
  kpi-csv 15-01 16-01            # Only those dates
  kpi-csv --output mi_kpi        # mi_kpi_metros.csv, ...
  kpi-csv -i febrero.xlsx 03-02  # Another workbook

Exits with an error when none of the requested dates exist.")]
#[command(version)]
struct Cli {
    /// Dates to export (sheet names). All date sheets when omitted
    dates: Vec<String>,

    /// Base name of the output files
    #[arg(short, long)]
    output: Option<String>,

    /// Path to the KPI workbook (.xlsx)
    #[arg(short, long, env = "KPI_WORKBOOK")]
    input: Option<PathBuf>,

    /// YAML config file (workbook, excluded_sheets, output_base)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> KpiResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let source = SourceOptions {
        input: cli.input,
        config: cli.config,
    };

    cli::export(cli.dates, cli.output, source, cli.verbose).map(|_| ())
}
