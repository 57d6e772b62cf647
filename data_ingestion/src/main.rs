use anyhow::{Context, Result};
use data_ingestion::config::PipelineConfig;
use data_ingestion::loader::load_price_table;
use data_ingestion::logger::init_logger;
use data_ingestion::summary::describe;
use log::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = PipelineConfig::from_env().context("Failed to load pipeline config")?;
    let table = load_price_table(&config.data_path)
        .with_context(|| format!("Failed to load {}", config.data_path))?;

    println!("First {} records:", config.preview_rows.min(table.len()));
    for r in table.records().iter().take(config.preview_rows) {
        println!(
            "  {} {:<15} close={:>10.2} volume={:>12} open={:>10.2} high={:>10.2} low={:>10.2}",
            r.date, r.company, r.close, r.volume, r.open, r.high, r.low
        );
    }
    println!();
    print!("{}", describe(&table));

    info!("Data profile complete");
    Ok(())
}
