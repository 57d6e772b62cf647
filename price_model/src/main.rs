use anyhow::{Context, Result};
use data_ingestion::config::PipelineConfig;
use data_ingestion::loader::load_price_table;
use data_ingestion::logger::init_logger;
use log::info;
use price_model::Pipeline;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = PipelineConfig::from_env().context("Failed to load pipeline config")?;
    let table = load_price_table(&config.data_path)
        .with_context(|| format!("Failed to load {}", config.data_path))?;

    let evaluation = Pipeline::new(&config).run(&table)?;
    info!("Fitted model\n{}", evaluation.model.summary());

    print!("{}", evaluation);
    Ok(())
}
