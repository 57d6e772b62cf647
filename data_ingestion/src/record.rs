use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;

/// One CSV row exactly as it appears in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPriceRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Close/Last")]
    pub close: String,
    #[serde(rename = "Volume")]
    pub volume: String,
    #[serde(rename = "Open")]
    pub open: String,
    #[serde(rename = "High")]
    pub high: String,
    #[serde(rename = "Low")]
    pub low: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub company: String,
    pub close: f64,
    pub volume: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
}

/// Cleaned, in-memory price table.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    records: Vec<PriceRecord>,
}

impl PriceTable {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct company names in sorted order.
    pub fn companies(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.company.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn for_company<'a>(&'a self, company: &'a str) -> impl Iterator<Item = &'a PriceRecord> + 'a {
        self.records.iter().filter(move |r| r.company == company)
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

impl FromIterator<PriceRecord> for PriceTable {
    fn from_iter<I: IntoIterator<Item = PriceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(company: &str, day: u32) -> PriceRecord {
        PriceRecord {
            date: NaiveDate::from_ymd_opt(2023, 7, day).unwrap(),
            company: company.to_string(),
            close: 10.0,
            volume: 100,
            open: 9.0,
            high: 11.0,
            low: 8.0,
        }
    }

    #[test]
    fn companies_are_sorted_and_distinct() {
        let table: PriceTable = vec![record("Tesla", 1), record("Apple", 2), record("Tesla", 3)]
            .into_iter()
            .collect();
        assert_eq!(table.companies(), vec!["Apple".to_string(), "Tesla".to_string()]);
        assert_eq!(table.for_company("Tesla").count(), 2);
    }

    #[test]
    fn date_range_spans_all_rows() {
        let table = PriceTable::new(vec![record("Apple", 5), record("Apple", 2), record("Apple", 9)]);
        let (first, last) = table.date_range().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2023, 7, 2).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2023, 7, 9).unwrap());
        assert!(PriceTable::default().date_range().is_none());
    }
}
