use data_ingestion::{PriceRecord, PriceTable};
use ndarray::{Array1, Array2};

use crate::encoder::LabelEncoder;
use crate::error::Result;
use crate::splitter::train_test_split;

pub const FEATURE_COLUMNS: [&str; 5] = ["Company", "Volume", "Open", "High", "Low"];
pub const TARGET_COLUMN: &str = "Close/Last";

/// Encoded feature matrix (`Company, Volume, Open, High, Low`) and close-price target.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Array2<f64>,
    pub y: Array1<f64>,
}

impl Dataset {
    pub fn from_records(records: &[PriceRecord], encoder: &LabelEncoder) -> Result<Self> {
        let codes = encoder.transform(records.iter().map(|r| r.company.as_str()))?;

        let mut flat = Vec::with_capacity(records.len() * FEATURE_COLUMNS.len());
        for (r, code) in records.iter().zip(codes) {
            flat.extend_from_slice(&[code as f64, r.volume as f64, r.open, r.high, r.low]);
        }

        let x = Array2::from_shape_vec((records.len(), FEATURE_COLUMNS.len()), flat)?;
        let y = Array1::from_iter(records.iter().map(|r| r.close));
        Ok(Self { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }
}

/// Train/test datasets sharing one encoder fit on the training rows.
#[derive(Debug, Clone)]
pub struct TrainTestData {
    pub train: Dataset,
    pub test: Dataset,
    pub encoder: LabelEncoder,
}

impl TrainTestData {
    pub fn prepare(table: &PriceTable, test_size: f64, seed: u64) -> Result<Self> {
        let split = train_test_split(table.records(), test_size, seed)?;
        let encoder = LabelEncoder::fit(split.train.iter().map(|r| r.company.as_str()));

        Ok(Self {
            train: Dataset::from_records(&split.train, &encoder)?,
            test: Dataset::from_records(&split.test, &encoder)?,
            encoder,
        })
    }
}
