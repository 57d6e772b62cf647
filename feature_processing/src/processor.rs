use chrono::Datelike;
use data_ingestion::PriceTable;
use polars::prelude::*;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct YearlyAverage {
    pub company: String,
    pub year: i32,
    pub avg_close: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfit {
    pub company: String,
    pub profit: f64,
}

/// Columnar view of the table with the columns the yearly reports aggregate.
pub fn to_dataframe(table: &PriceTable) -> Result<DataFrame> {
    let records = table.records();

    let company: Vec<&str> = records.iter().map(|r| r.company.as_str()).collect();
    let year: Vec<i32> = records.iter().map(|r| r.date.year()).collect();
    let close: Vec<f64> = records.iter().map(|r| r.close).collect();
    let open: Vec<f64> = records.iter().map(|r| r.open).collect();

    let df = DataFrame::new(vec![
        Series::new("company", company),
        Series::new("year", year),
        Series::new("close", close),
        Series::new("open", open),
    ])?;
    Ok(df)
}

/// Mean close per company and calendar year, ordered by company then year.
pub fn yearly_average_close(table: &PriceTable) -> Result<Vec<YearlyAverage>> {
    let out = to_dataframe(table)?
        .lazy()
        .group_by([col("company"), col("year")])
        .agg([col("close").mean().alias("avg_close")])
        .collect()?;

    let companies = out.column("company")?.str()?;
    let years = out.column("year")?.i32()?;
    let avgs = out.column("avg_close")?.f64()?;

    let mut rows: Vec<YearlyAverage> = companies
        .into_iter()
        .zip(years)
        .zip(avgs)
        .filter_map(|((company, year), avg)| {
            Some(YearlyAverage {
                company: company?.to_string(),
                year: year?,
                avg_close: avg?,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.company.cmp(&b.company).then(a.year.cmp(&b.year)));
    Ok(rows)
}

/// Sum of `close - open` per company over one calendar year, ordered by company.
pub fn profit_by_company(table: &PriceTable, year: i32) -> Result<Vec<CompanyProfit>> {
    let out = to_dataframe(table)?
        .lazy()
        .filter(col("year").eq(lit(year)))
        .with_column((col("close") - col("open")).alias("profit"))
        .group_by([col("company")])
        .agg([col("profit").sum()])
        .collect()?;

    let companies = out.column("company")?.str()?;
    let profits = out.column("profit")?.f64()?;

    let mut rows: Vec<CompanyProfit> = companies
        .into_iter()
        .zip(profits)
        .filter_map(|(company, profit)| {
            Some(CompanyProfit {
                company: company?.to_string(),
                profit: profit?,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.company.cmp(&b.company));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use data_ingestion::PriceRecord;

    fn record(company: &str, y: i32, m: u32, close: f64, open: f64) -> PriceRecord {
        PriceRecord {
            date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            company: company.to_string(),
            close,
            volume: 10,
            open,
            high: close.max(open),
            low: close.min(open),
        }
    }

    fn table() -> PriceTable {
        PriceTable::new(vec![
            record("Tesla", 2022, 1, 100.0, 90.0),
            record("Tesla", 2022, 2, 200.0, 210.0),
            record("Tesla", 2023, 1, 300.0, 280.0),
            record("Apple", 2023, 1, 150.0, 140.0),
            record("Apple", 2023, 2, 170.0, 165.0),
        ])
    }

    #[test]
    fn dataframe_has_one_row_per_record() {
        let df = to_dataframe(&table()).unwrap();
        assert_eq!(df.height(), 5);
        assert_eq!(df.get_column_names(), ["company", "year", "close", "open"]);
        let companies: Vec<Option<&str>> = df.column("company").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(companies[0], Some("Tesla"));
        assert_eq!(companies[4], Some("Apple"));
    }

    #[test]
    fn yearly_averages_group_by_company_and_year() {
        let rows = yearly_average_close(&table()).unwrap();
        assert_eq!(
            rows,
            vec![
                YearlyAverage { company: "Apple".into(), year: 2023, avg_close: 160.0 },
                YearlyAverage { company: "Tesla".into(), year: 2022, avg_close: 150.0 },
                YearlyAverage { company: "Tesla".into(), year: 2023, avg_close: 300.0 },
            ]
        );
    }

    #[test]
    fn profit_only_counts_requested_year() {
        let rows = profit_by_company(&table(), 2023).unwrap();
        assert_eq!(
            rows,
            vec![
                CompanyProfit { company: "Apple".into(), profit: 15.0 },
                CompanyProfit { company: "Tesla".into(), profit: 20.0 },
            ]
        );
        assert!(profit_by_company(&table(), 2019).unwrap().is_empty());
    }
}
