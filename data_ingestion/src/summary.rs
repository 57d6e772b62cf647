//! Descriptive profile of a cleaned price table.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use statrs::statistics::{Data, Distribution, Max, Min};

use crate::record::{PriceRecord, PriceTable};

#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub name: &'static str,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    fn from_values(name: &'static str, values: Vec<f64>) -> Self {
        let count = values.len();
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        let data = Data::new(values);
        Self {
            name,
            count,
            mean: data.mean().unwrap_or(f64::NAN),
            std: data.std_dev().unwrap_or(f64::NAN),
            min: Min::min(&data),
            q25: linear_quantile(&sorted, 0.25),
            median: linear_quantile(&sorted, 0.5),
            q75: linear_quantile(&sorted, 0.75),
            max: Max::max(&data),
        }
    }
}

/// Quantile of ascending `sorted` with linear interpolation between the two
/// nearest ranks, `h = (n - 1) * p`.
fn linear_quantile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let h = (n - 1) as f64 * p;
            let lo = h.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableSummary {
    pub rows: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub rows_per_company: BTreeMap<String, usize>,
    pub columns: Vec<ColumnSummary>,
}

type Extractor = fn(&PriceRecord) -> f64;

const NUMERIC_COLUMNS: [(&str, Extractor); 5] = [
    ("Close/Last", |r: &PriceRecord| r.close),
    ("Volume", |r: &PriceRecord| r.volume as f64),
    ("Open", |r: &PriceRecord| r.open),
    ("High", |r: &PriceRecord| r.high),
    ("Low", |r: &PriceRecord| r.low),
];

pub fn describe(table: &PriceTable) -> TableSummary {
    let mut rows_per_company = BTreeMap::new();
    for r in table.records() {
        *rows_per_company.entry(r.company.clone()).or_insert(0) += 1;
    }

    let columns = NUMERIC_COLUMNS
        .iter()
        .map(|(name, get)| {
            ColumnSummary::from_values(*name, table.records().iter().map(get).collect())
        })
        .collect();

    TableSummary {
        rows: table.len(),
        date_range: table.date_range(),
        rows_per_company,
        columns,
    }
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}", self.rows)?;
        if let Some((first, last)) = self.date_range {
            writeln!(f, "Dates: {} .. {}", first, last)?;
        }
        writeln!(f, "Companies:")?;
        for (company, rows) in &self.rows_per_company {
            writeln!(f, "  {:<15} {:>6}", company, rows)?;
        }
        writeln!(
            f,
            "{:<11} {:>8} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
            "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        )?;
        for c in &self.columns {
            writeln!(
                f,
                "{:<11} {:>8} {:>14.4} {:>14.4} {:>14.4} {:>14.4} {:>14.4} {:>14.4} {:>14.4}",
                c.name, c.count, c.mean, c.std, c.min, c.q25, c.median, c.q75, c.max
            )?;
        }
        Ok(())
    }
}
