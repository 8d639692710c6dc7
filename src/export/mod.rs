//! CSV export of day records
//!
//! Three views, each `;`-delimited and UTF-8 with BOM:
//! - `<base>_metros.csv`: equipment rows with phase and day totals
//! - `<base>_roc.csv`: ROC meters per phase
//! - `<base>_resumen_diario.csv`: one row per day

mod exporter;
pub mod rows;
mod writer;

pub use exporter::{CsvExporter, CsvView, ExportedFile};
pub use rows::{percent, DailySummaryRow, MetersRow, RocRow, RowKind};
pub use writer::{write_csv, write_csv_file, DELIMITER, UTF8_BOM};
