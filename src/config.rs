//! Runtime configuration
//!
//! Defaults, optionally overridden by a YAML file (`--config`), then by
//! command-line flags and `KPI_WORKBOOK`.

use crate::error::{KpiError, KpiResult};
use crate::excel::{KpiReader, DEFAULT_EXCLUDED_SHEETS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Workbook read when no path is given
pub const DEFAULT_WORKBOOK: &str = "KPI PyT  Enero 2026 NO OFICIAL.xlsx";

/// Base name of the exported CSV files
pub const DEFAULT_OUTPUT_BASE: &str = "kpi";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub workbook: PathBuf,
    pub excluded_sheets: Vec<String>,
    pub output_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            excluded_sheets: DEFAULT_EXCLUDED_SHEETS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            output_base: DEFAULT_OUTPUT_BASE.to_string(),
        }
    }
}

impl Config {
    /// Parse a YAML config; missing keys keep their defaults
    pub fn from_yaml(content: &str) -> KpiResult<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        if config.output_base.trim().is_empty() {
            return Err(KpiError::Config("output_base must not be empty".into()));
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> KpiResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            KpiError::Config(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Defaults, or the given file when present
    pub fn load(path: Option<&Path>) -> KpiResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, workbook: Option<PathBuf>, output_base: Option<String>) -> Self {
        if let Some(workbook) = workbook {
            self.workbook = workbook;
        }
        if let Some(base) = output_base {
            self.output_base = base;
        }
        self
    }

    pub fn reader(&self) -> KpiReader {
        KpiReader::new(&self.workbook).with_excluded_sheets(&self.excluded_sheets)
    }
}
