// ==========================================
// Cross Check - importer error types
// ==========================================
// thiserror derive macros
// ==========================================

use thiserror::Error;

/// Importer error taxonomy.
///
/// File-level variants are fatal for one source only; row-level
/// variants drop one row. Neither aborts the run.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file-level (SourceUnreadable) =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("excel parse failed: {0}")]
    ExcelParseError(String),

    #[error("csv parse failed: {0}")]
    CsvParseError(String),

    // ===== row-level =====
    #[error("type conversion failed (row {row}, field {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("subscription code missing (row {0})")]
    SubscriptionCodeMissing(usize),

    // ===== storage =====
    #[error("storage failure: {0}")]
    StorageFailure(String),

    // ===== general =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<rusqlite::Error> for ImportError {
    fn from(err: rusqlite::Error) -> Self {
        ImportError::StorageFailure(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<crate::repository::error::RepositoryError> for ImportError {
    fn from(err: crate::repository::error::RepositoryError) -> Self {
        ImportError::StorageFailure(err.to_string())
    }
}

/// Result alias for the importer layer
pub type ImportResult<T> = Result<T, ImportError>;
