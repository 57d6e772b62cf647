use std::fmt;

use anyhow::{Context, Result};
use data_ingestion::{PipelineConfig, PriceTable};
use feature_processing::misc::{FEATURE_COLUMNS, TARGET_COLUMN, TrainTestData};
use feature_processing::splitter::{DEFAULT_SEED, DEFAULT_TEST_SIZE};
use feature_processing::LabelEncoder;
use log::{debug, info};

use crate::engine::LinearRegression;
use crate::metrics::RegressionMetrics;
use crate::misc::{Prediction, PredictionTable};

/// Split -> encode -> fit -> predict -> evaluate.
pub struct Pipeline {
    test_size: f64,
    seed: u64,
}

pub struct Evaluation {
    pub model: LinearRegression,
    pub encoder: LabelEncoder,
    pub metrics: RegressionMetrics,
    pub predictions: Vec<Prediction>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            test_size: DEFAULT_TEST_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl Pipeline {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            test_size: config.test_size,
            seed: config.seed,
        }
    }

    pub fn run(&self, table: &PriceTable) -> Result<Evaluation> {
        let data = TrainTestData::prepare(table, self.test_size, self.seed)
            .context("Failed to prepare train/test features")?;
        info!(
            "Predicting {} from {:?}: {} train rows, {} test rows",
            TARGET_COLUMN,
            FEATURE_COLUMNS,
            data.train.n_samples(),
            data.test.n_samples()
        );
        debug!("Company codes: {:?}", data.encoder.classes());

        let mut model = LinearRegression::new().with_feature_names(FEATURE_COLUMNS);
        model
            .fit(&data.train.x, &data.train.y)
            .context("Failed to fit linear regression")?;

        let y_pred = model.predict(&data.test.x)?;
        let metrics = RegressionMetrics::calculate(&data.test.y, &y_pred);

        let predictions = data
            .test
            .y
            .iter()
            .zip(y_pred.iter())
            .map(|(&truth, &predicted)| Prediction { truth, predicted })
            .collect();

        Ok(Evaluation {
            model,
            encoder: data.encoder,
            metrics,
            predictions,
        })
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The Length of testing data : {}", self.predictions.len())?;
        write!(f, "{}", PredictionTable(&self.predictions))?;
        writeln!(f)?;
        writeln!(f, "Mean Squared Error: {}", self.metrics.mse)?;
        writeln!(f, "R-squared (R2) Score: {}%", self.metrics.r2_percent())
    }
}
