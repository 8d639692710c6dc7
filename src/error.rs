use thiserror::Error;

pub type KpiResult<T> = Result<T, KpiError>;

#[derive(Error, Debug)]
pub enum KpiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Sheet not found: '{0}'")]
    SheetNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No data found. Check the requested dates.")]
    NoData,
}

impl From<calamine::XlsxError> for KpiError {
    fn from(err: calamine::XlsxError) -> Self {
        KpiError::Workbook(err.to_string())
    }
}
