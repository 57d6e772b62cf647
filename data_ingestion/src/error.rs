use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataIngestionError {
    #[error("Failed to open price file {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV read error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed Date at row {row}: {value:?} (expected MM/DD/YYYY)")]
    MalformedDate { row: usize, value: String },

    #[error("Malformed {column} at row {row}: {value:?} is not a number")]
    MalformedNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Price table is empty")]
    EmptyTable,
}

pub type Result<T> = std::result::Result<T, DataIngestionError>;
