use crate::config::Config;
use crate::error::{KpiError, KpiResult};
use crate::excel::KpiReader;
use crate::export::{CsvExporter, ExportedFile};
use crate::report;
use crate::types::DayCollection;
use colored::Colorize;
use std::path::PathBuf;

/// How many dates `show` lists when run without arguments
const LISTED_DATES: usize = 10;
/// How many trailing days `show` prints when run without arguments
const SHOWN_DAYS: usize = 3;

/// Shared options of both binaries
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl SourceOptions {
    fn resolve(&self, output_base: Option<String>) -> KpiResult<Config> {
        let config = Config::load(self.config.as_deref())?;
        Ok(config.with_overrides(self.input.clone(), output_base))
    }
}

/// Read the requested days (all date sheets when `dates` is empty)
fn collect_days(reader: &KpiReader, dates: &[String], verbose: bool) -> KpiResult<DayCollection> {
    if dates.is_empty() {
        let data = reader.load_all()?;
        println!("   Sheets found: {}", data.sheet_count());
        if verbose {
            println!("   Dates: {}", data.date_sheets.join(", ").cyan());
        }
        return Ok(data.days);
    }

    let selection = reader.load_dates(dates)?;
    for missing in &selection.missing {
        println!(
            "   {} No sheet found for '{}'",
            "⚠️".yellow(),
            missing
        );
    }
    Ok(selection.days)
}

/// Execute the export command
pub fn export(
    dates: Vec<String>,
    output: Option<String>,
    source: SourceOptions,
    verbose: bool,
) -> KpiResult<Vec<ExportedFile>> {
    println!("{}", "⛏️  PyT KPI - CSV Export".bold().green());

    let config = source.resolve(output)?;
    let reader = config.reader();
    println!("   Workbook: {}", reader.path().display());
    if !dates.is_empty() {
        println!("   Dates:    {}", dates.join(", "));
    }

    let days = collect_days(&reader, &dates, verbose)?;
    if days.is_empty() {
        println!("{}", "❌ No data found. Check the requested dates.".red());
        return Err(KpiError::NoData);
    }

    println!("\n{}", format!("📊 Exporting {} day(s)...", days.len()).cyan());
    if verbose {
        for day in days.values() {
            println!(
                "   {} - {} units, {:.1} m",
                day.date.bright_blue(),
                day.equipment_count(),
                day.totals.total
            );
        }
    }
    println!();

    let files = CsvExporter::new(&days).export_all(&config.output_base)?;
    for file in &files {
        println!(
            "   ✅ {:<14} {} ({} rows)",
            format!("{}:", file.view),
            file.path.display(),
            file.rows
        );
    }

    println!(
        "\n{}",
        format!("✅ Done. {} CSV file(s) generated.", files.len())
            .bold()
            .green()
    );
    println!("   Delimiter: semicolon (;) | Encoding: UTF-8 with BOM");
    println!("   Ready for Power BI, Excel or any other tool.\n");

    Ok(files)
}

/// Execute the show command - print days to the console
pub fn show(dates: Vec<String>, flat: bool, source: SourceOptions) -> KpiResult<()> {
    let config = source.resolve(None)?;
    let reader = config.reader();

    let render = |day: &crate::types::DayRecord| {
        if flat {
            report::render_day_flat(day)
        } else {
            report::render_day(day)
        }
    };

    if !dates.is_empty() {
        for date in &dates {
            match reader.read_day(date) {
                Ok(day) => print!("{}", render(&day)),
                Err(KpiError::SheetNotFound(token)) => {
                    println!(
                        "{} Sheet '{}' not found in the workbook.",
                        "⚠️".yellow(),
                        token
                    );
                    println!("Available sheets:");
                    for name in reader.date_sheets()? {
                        println!("  - {}", name);
                    }
                }
                Err(e) => return Err(e),
            }
        }
        return Ok(());
    }

    println!("{}", "📖 Loading all sheets...".cyan());
    let data = reader.load_all()?;
    println!("Sheets processed: {}", data.sheet_count());

    let listed: Vec<&str> = data
        .date_sheets
        .iter()
        .take(LISTED_DATES)
        .map(String::as_str)
        .collect();
    let more = if data.sheet_count() > LISTED_DATES {
        " (and more)"
    } else {
        ""
    };
    println!("Available dates: {}{}", listed.join(", "), more);

    let skip = data.sheet_count().saturating_sub(SHOWN_DAYS);
    for date in data.date_sheets.iter().skip(skip) {
        if let Some(day) = data.days.get(date) {
            print!("{}", render(day));
        }
    }

    Ok(())
}
