use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const CONFIG_FILE: &str = "pipeline.toml";
const ENV_PREFIX: &str = "PIPELINE";

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub data_path: String,
    pub test_size: f64,
    pub seed: u64,
    pub analysis_year: i32,
    pub trading_days_per_year: u32,
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: "data.csv".to_string(),
            test_size: 0.2,
            seed: 42,
            analysis_year: 2023,
            trading_days_per_year: 252,
            preview_rows: 10,
        }
    }
}

impl PipelineConfig {
    /// Defaults, then `pipeline.toml` if present, then `PIPELINE_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_env_overrides(File::new(CONFIG_FILE, FileFormat::Toml).required(false))
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::builder(File::from_str(toml, FileFormat::Toml))?
            .build()?
            .try_deserialize()
    }

    fn with_env_overrides<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Self::builder(file)?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    fn builder<S>(
        file: S,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        Ok(Config::builder()
            .set_default("data_path", defaults.data_path)?
            .set_default("test_size", defaults.test_size)?
            .set_default("seed", defaults.seed)?
            .set_default("analysis_year", defaults.analysis_year)?
            .set_default("trading_days_per_year", defaults.trading_days_per_year)?
            .set_default("preview_rows", defaults.preview_rows as u64)?
            .add_source(file))
    }
}
