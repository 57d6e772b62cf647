use anyhow::{Context, Result};
use data_ingestion::config::PipelineConfig;
use data_ingestion::loader::load_price_table;
use data_ingestion::logger::init_logger;
use feature_processing::processor::{profit_by_company, yearly_average_close};
use feature_processing::stats::{annualized_volatility, correlation_matrix};
use log::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = PipelineConfig::from_env().context("Failed to load pipeline config")?;
    let table = load_price_table(&config.data_path)
        .with_context(|| format!("Failed to load {}", config.data_path))?;
    let year = config.analysis_year;

    println!("Average close per year:");
    for row in yearly_average_close(&table)? {
        println!("  {:<15} {} {:>10.2}", row.company, row.year, row.avg_close);
    }

    println!("\nProfit ({}):", year);
    for row in profit_by_company(&table, year)? {
        println!("  {:<15} {:>10.2}", row.company, row.profit);
    }

    println!("\nAnnualized volatility ({}):", year);
    for row in annualized_volatility(&table, year, config.trading_days_per_year) {
        println!("  {:<15} {:>8.4}", row.company, row.annualized_volatility);
    }

    println!("\nClose price correlation:");
    print!("{}", correlation_matrix(&table));

    info!("Analysis report complete");
    Ok(())
}
