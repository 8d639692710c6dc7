//! CSV exporter - DayCollection → three flat views

use super::rows::{meters_rows, roc_rows, summary_row};
use super::writer::write_csv_file;
use crate::error::KpiResult;
use crate::types::DayCollection;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// The three exported views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvView {
    /// One row per equipment plus phase and day totals
    Meters,
    /// ROC meters per phase plus the ROC total
    Roc,
    /// One row per day
    DailySummary,
}

impl CsvView {
    pub const ALL: [CsvView; 3] = [CsvView::Meters, CsvView::Roc, CsvView::DailySummary];

    /// Suffix appended to the output base name
    pub fn suffix(&self) -> &'static str {
        match self {
            CsvView::Meters => "_metros",
            CsvView::Roc => "_roc",
            CsvView::DailySummary => "_resumen_diario",
        }
    }

    pub fn file_name(&self, base: &str) -> PathBuf {
        PathBuf::from(format!("{}{}.csv", base, self.suffix()))
    }
}

impl fmt::Display for CsvView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvView::Meters => write!(f, "meters"),
            CsvView::Roc => write!(f, "ROC"),
            CsvView::DailySummary => write!(f, "daily summary"),
        }
    }
}

/// A file written by the exporter
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub view: CsvView,
    pub path: PathBuf,
    pub rows: usize,
}

/// Exporter over a borrowed day collection
pub struct CsvExporter<'a> {
    days: &'a DayCollection,
}

impl<'a> CsvExporter<'a> {
    pub fn new(days: &'a DayCollection) -> Self {
        Self { days }
    }

    /// Export one view to `<base><suffix>.csv`.
    ///
    /// Returns `None` (and writes nothing) when the view has no rows.
    pub fn export_view(&self, view: CsvView, base: &str) -> KpiResult<Option<ExportedFile>> {
        let path = view.file_name(base);

        // BTreeMap iteration gives ascending date order
        let rows = match view {
            CsvView::Meters => self.write(&path, self.days.values().flat_map(meters_rows))?,
            CsvView::Roc => self.write(&path, self.days.values().flat_map(roc_rows))?,
            CsvView::DailySummary => self.write(&path, self.days.values().map(summary_row))?,
        };

        if rows == 0 {
            warn!(view = %view, "no data to export, skipping {}", path.display());
            return Ok(None);
        }

        info!(view = %view, rows, path = %path.display(), "exported");
        Ok(Some(ExportedFile { view, path, rows }))
    }

    fn write<T, I>(&self, path: &std::path::Path, rows: I) -> KpiResult<usize>
    where
        T: Serialize,
        I: Iterator<Item = T>,
    {
        let rows: Vec<T> = rows.collect();
        if rows.is_empty() {
            return Ok(0);
        }
        write_csv_file(path, &rows)?;
        Ok(rows.len())
    }

    /// Export every view; skipped views are left out of the result
    pub fn export_all(&self, base: &str) -> KpiResult<Vec<ExportedFile>> {
        let mut files = Vec::new();
        for view in CsvView::ALL {
            if let Some(file) = self.export_view(view, base)? {
                files.push(file);
            }
        }
        Ok(files)
    }
}
