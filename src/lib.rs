//! PyT KPI - drilling KPI workbook to CSV
//!
//! Reads the daily sheets of the "KPI PyT" workbook (one sheet per day,
//! fixed layout) into typed records and exports them as flat CSV files.
//!
//! # Features
//!
//! - Fixed-layout extraction: four phases, day totals and the ROC block
//! - Defensive cell coercion (missing or malformed cells become 0.0 / "")
//! - Three CSV views: equipment meters, ROC meters, daily summary
//! - Semicolon delimiter and UTF-8 BOM for Excel / Power BI
//!
//! # Example
//!
//! ```no_run
//! use pyt_kpi::excel::KpiReader;
//! use pyt_kpi::export::CsvExporter;
//!
//! let reader = KpiReader::new("KPI PyT.xlsx");
//! let data = reader.load_all()?;
//!
//! println!("Days: {}", data.days.len());
//!
//! let files = CsvExporter::new(&data.days).export_all("kpi")?;
//! println!("Files: {}", files.len());
//! # Ok::<(), pyt_kpi::error::KpiError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod export;
pub mod logging;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{KpiError, KpiResult};
pub use types::{DayCollection, DayRecord, EquipmentRecord, Meters, Phase, PhaseRecord, RocSummary};
