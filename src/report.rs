//! Console rendering of a day (used by `kpi-show`)

use crate::types::{DayRecord, Meters, Phase};
use colored::Colorize;
use std::fmt;

const WIDE: usize = 90;
const NARROW: usize = 70;

/// Ratio as a percentage with one decimal ("87.3%")
fn pct(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn meters_columns(m: &Meters) -> String {
    format!(
        "{:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>8} {:>8} {:>8}",
        m.shift_a,
        m.shift_b,
        m.total,
        m.plan,
        pct(m.compliance_a),
        pct(m.compliance_b),
        pct(m.compliance_daily)
    )
}

/// Detailed view: equipment grouped by phase, phase totals, day total, ROC
pub struct DayReport<'a>(pub &'a DayRecord);

/// Flat view: one line per equipment, then the day total
pub struct FlatDayReport<'a>(pub &'a DayRecord);

impl fmt::Display for DayReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.0;
        let rule = "=".repeat(NARROW);
        let thin = "-".repeat(NARROW);

        writeln!(f, "\n{}", rule)?;
        writeln!(f, "  {}", format!("DRILLING METERS - {}", day.date).bold())?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "{:<6} {:<8} {:>9} {:>9} {:>9} {:>9} {:>8} {:>8} {:>8}",
            "Phase", "Unit", "Shift A", "Shift B", "Total", "Plan", "Comp.A", "Comp.B", "Comp.Day"
        )?;
        writeln!(f, "{}", thin)?;

        for phase in Phase::SHEET_ORDER {
            let Some(record) = day.phase(phase) else {
                continue;
            };

            for (i, eq) in record.equipment.iter().enumerate() {
                let label = if i == 0 { phase.label() } else { "" };
                writeln!(f, "{:<6} {:<8} {}", label, eq.name, meters_columns(&eq.meters))?;
                if !eq.status_a.is_empty() || !eq.status_b.is_empty() {
                    writeln!(
                        f,
                        "{:>15}Status A: {}  |  Status B: {}",
                        "", eq.status_a, eq.status_b
                    )?;
                }
            }

            if record.equipment.is_empty() {
                writeln!(f, "{:<6} {}", phase.label(), "(no equipment)".dimmed())?;
            }

            writeln!(f, "{:>6}{:<8} {}", "", "TOTAL", meters_columns(&record.totals))?;
            writeln!(f)?;
        }

        writeln!(f, "{}", thin)?;
        writeln!(f, "{:<15}{}", "TOTAL METERS".bold(), meters_columns(&day.totals))?;

        let roc = &day.roc;
        writeln!(f, "\n  {}", "ROC METERS:".bold())?;
        for phase in Phase::NUMERIC_ORDER {
            writeln!(
                f,
                "    {:<9}{:>9.1}",
                format!("{}:", phase.display_name()),
                roc.phase_value(phase)
            )?;
        }
        writeln!(f, "    Daily ROC plan: {:>9.1}", roc.plan)?;
        writeln!(
            f,
            "    ROC total (A:{:.1} B:{:.1}): {:.1}",
            roc.shift_a, roc.shift_b, roc.total
        )
    }
}

impl fmt::Display for FlatDayReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.0;
        let rule = "=".repeat(WIDE);
        let thin = "-".repeat(WIDE);

        writeln!(f, "\n{}", rule)?;
        writeln!(
            f,
            "  {}",
            format!("DRILLING METERS (flat) - {}", day.date).bold()
        )?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "{:<8} {:<6} {:<8} {:>9} {:>9} {:>9} {:>9} {:>10}",
            "Date", "Phase", "Unit", "Shift A", "Shift B", "Total", "Plan", "Comp.Day"
        )?;
        writeln!(f, "{}", thin)?;

        for phase in Phase::SHEET_ORDER {
            let Some(record) = day.phase(phase) else {
                continue;
            };
            for eq in &record.equipment {
                let m = &eq.meters;
                writeln!(
                    f,
                    "{:<8} {:<6} {:<8} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>10}",
                    day.date,
                    phase.label(),
                    eq.name,
                    m.shift_a,
                    m.shift_b,
                    m.total,
                    m.plan,
                    pct(m.compliance_daily)
                )?;
            }
        }

        let m = &day.totals;
        writeln!(f, "{}", thin)?;
        writeln!(
            f,
            "{:<8} {:<6} {:<8} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>10}",
            day.date,
            "TOTAL",
            "",
            m.shift_a,
            m.shift_b,
            m.total,
            m.plan,
            pct(m.compliance_daily)
        )
    }
}

pub fn render_day(day: &DayRecord) -> String {
    DayReport(day).to_string()
}

pub fn render_day_flat(day: &DayRecord) -> String {
    FlatDayReport(day).to_string()
}
