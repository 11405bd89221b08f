use thiserror::Error;

/// Errors raised by the view, export and chart layers
#[derive(Debug, Error)]
pub enum DashError {
    #[error("Column '{column}' is not available")]
    InvalidColumn { column: String },

    #[error("Column '{column}' is declared more than once")]
    DuplicateColumn { column: String },

    #[error("No {what} supplied")]
    EmptyInput { what: &'static str },

    #[error("No data to export")]
    EmptyDataset,

    #[error("Row {row} has {found} values but the table has {expected} columns")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Percentage for '{label}' must be within 0..=100, got {value}")]
    InvalidPercentage { label: String, value: f64 },

    #[error("Secondary axis maximum must be a positive number, got {max}")]
    InvalidAxisRange { max: f64 },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DashError {
    pub fn invalid_column(column: impl Into<String>) -> Self {
        DashError::InvalidColumn {
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
