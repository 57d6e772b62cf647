pub mod engine;
pub mod metrics;
pub mod misc;
pub mod pipeline;

pub use crate::engine::{LinearRegression, LinearRegressionError};
pub use crate::metrics::RegressionMetrics;
pub use crate::misc::{convert_value, Prediction};
pub use crate::pipeline::{Evaluation, Pipeline};
