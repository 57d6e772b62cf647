use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Company {0:?} was not seen while fitting the encoder")]
    UnseenCompany(String),

    #[error("Test size must be in (0, 1), got {0}")]
    InvalidTestSize(f64),

    #[error("Cannot split {total} rows into {train} train / {test} test rows")]
    EmptyPartition {
        total: usize,
        train: usize,
        test: usize,
    },

    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),

    #[error("Feature matrix shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, FeatureError>;
