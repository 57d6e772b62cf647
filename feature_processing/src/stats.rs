//! Volatility and cross-company correlation of close prices.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use data_ingestion::PriceTable;
use log::debug;
use statrs::statistics::Statistics;

pub const TRADING_DAYS_PER_YEAR: u32 = 252;

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyVolatility {
    pub company: String,
    pub annualized_volatility: f64,
}

/// Close-to-close percentage returns in date order.
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

/// Sample std of daily returns within `year`, scaled by `sqrt(trading_days)`.
/// Sorted from most to least volatile; companies with fewer than two returns are skipped.
pub fn annualized_volatility(
    table: &PriceTable,
    year: i32,
    trading_days: u32,
) -> Vec<CompanyVolatility> {
    let scale = (trading_days as f64).sqrt();
    let mut rows: Vec<CompanyVolatility> = table
        .companies()
        .into_iter()
        .filter_map(|company| {
            let mut points: Vec<(NaiveDate, f64)> = table
                .for_company(&company)
                .filter(|r| r.date.year() == year)
                .map(|r| (r.date, r.close))
                .collect();
            points.sort_by_key(|(date, _)| *date);

            let closes: Vec<f64> = points.into_iter().map(|(_, close)| close).collect();
            let returns = daily_returns(&closes);
            if returns.len() < 2 {
                debug!("{}: not enough {} data for volatility", company, year);
                return None;
            }

            let std = returns.iter().std_dev();
            Some(CompanyVolatility {
                company,
                annualized_volatility: std * scale,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.annualized_volatility.total_cmp(&a.annualized_volatility));
    rows
}

/// Pearson correlation of close prices between every pair of companies.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub companies: Vec<String>,
    /// `None` where fewer than two shared dates exist or a series is constant.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.companies.iter().position(|c| c == a)?;
        let j = self.companies.iter().position(|c| c == b)?;
        self.values[i][j]
    }
}

pub fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() || a.len() < 2 {
        return None;
    }
    let denom = a.iter().std_dev() * b.iter().std_dev();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some(a.iter().covariance(b.iter()) / denom)
}

/// Companies become columns keyed by date; each pair uses only dates both have.
pub fn correlation_matrix(table: &PriceTable) -> CorrelationMatrix {
    let companies = table.companies();
    let pivot: Vec<BTreeMap<NaiveDate, f64>> = companies
        .iter()
        .map(|company| {
            table
                .for_company(company)
                .map(|r| (r.date, r.close))
                .collect()
        })
        .collect();

    let values = pivot
        .iter()
        .map(|left| {
            pivot
                .iter()
                .map(|right| {
                    let (a, b): (Vec<f64>, Vec<f64>) = left
                        .iter()
                        .filter_map(|(date, l)| right.get(date).map(|r| (*l, *r)))
                        .unzip();
                    pearson(&a, &b)
                })
                .collect()
        })
        .collect();

    CorrelationMatrix { companies, values }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<15}", "")?;
        for c in &self.companies {
            write!(f, " {:>9.9}", c)?;
        }
        writeln!(f)?;
        for (company, row) in self.companies.iter().zip(&self.values) {
            write!(f, "{:<15.15}", company)?;
            for v in row {
                match v {
                    Some(v) => write!(f, " {:>9.2}", v)?,
                    None => write!(f, " {:>9}", "NaN")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
