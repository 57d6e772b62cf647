pub mod encoder;
pub mod error;
pub mod misc;
pub mod processor;
pub mod splitter;
pub mod stats;

pub use crate::encoder::LabelEncoder;
pub use crate::error::FeatureError;
pub use crate::misc::{Dataset, TrainTestData};
