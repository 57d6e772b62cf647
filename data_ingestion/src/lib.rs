pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod logger;
pub mod record;
pub mod summary;

pub use crate::config::PipelineConfig;
pub use crate::error::DataIngestionError;
pub use crate::loader::load_price_table;
pub use crate::record::{PriceRecord, PriceTable};
