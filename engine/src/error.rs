use thiserror::Error;

/// Infrastructure failures around the core.
///
/// The settlement pass itself never fails: malformed dates and amounts are
/// surfaced as validity flags inside the computed view, not as errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Cheque extraction error: {0}")]
    ExtractionError(String),

    #[error("Export error: {0}")]
    ExportError(String),

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}
