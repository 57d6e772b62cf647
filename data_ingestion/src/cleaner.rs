use chrono::NaiveDate;
use log::{debug, warn};

use crate::error::{DataIngestionError, Result};
use crate::record::{PriceRecord, PriceTable, RawPriceRecord};

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Ticker -> display name. Tickers not listed here are kept as-is.
const COMPANY_NAMES: [(&str, &str); 9] = [
    ("AAPL", "Apple"),
    ("AMZN", "Amazon"),
    ("SBUX", "Starbucks"),
    ("MSFT", "Microsoft"),
    ("CSCO", "Cisco Systems"),
    ("QCOM", "Qualcomm"),
    ("META", "META"),
    ("TSLA", "Tesla"),
    ("NFLX", "Netflix"),
];

pub fn company_name(ticker: &str) -> &str {
    COMPANY_NAMES
        .iter()
        .find(|(code, _)| *code == ticker)
        .map(|(_, name)| *name)
        .unwrap_or(ticker)
}

/// Parses `MM/DD/YYYY` or `MM-DD-YYYY`.
pub fn parse_date(raw: &str, row: usize) -> Result<NaiveDate> {
    let normalized = raw.trim().replace('-', "/");
    let malformed = || DataIngestionError::MalformedDate {
        row,
        value: raw.to_string(),
    };

    // chrono's %Y accepts any digit count
    let year = normalized.rsplit('/').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    NaiveDate::parse_from_str(&normalized, DATE_FORMAT).map_err(|_| malformed())
}

/// Strips `$` and thousands separators, then parses a finite float.
pub fn parse_price(raw: &str, row: usize, column: &'static str) -> Result<f64> {
    let stripped: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    stripped
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DataIngestionError::MalformedNumber {
            row,
            column,
            value: raw.to_string(),
        })
}

pub fn parse_volume(raw: &str, row: usize) -> Result<i64> {
    let stripped: String = raw.chars().filter(|c| *c != ',').collect();
    stripped
        .trim()
        .parse::<i64>()
        .map_err(|_| DataIngestionError::MalformedNumber {
            row,
            column: "Volume",
            value: raw.to_string(),
        })
}

/// `row` is the 1-based data row (header excluded).
pub fn clean_record(raw: &RawPriceRecord, row: usize) -> Result<PriceRecord> {
    Ok(PriceRecord {
        date: parse_date(&raw.date, row)?,
        company: company_name(raw.company.trim()).to_string(),
        close: parse_price(&raw.close, row, "Close/Last")?,
        volume: parse_volume(&raw.volume, row)?,
        open: parse_price(&raw.open, row, "Open")?,
        high: parse_price(&raw.high, row, "High")?,
        low: parse_price(&raw.low, row, "Low")?,
    })
}

pub fn clean(raw: &[RawPriceRecord]) -> Result<PriceTable> {
    let records = raw
        .iter()
        .enumerate()
        .map(|(i, r)| clean_record(r, i + 1))
        .collect::<Result<Vec<_>>>()?;

    let suspicious = records.iter().filter(|r| !validate_record(r)).count();
    if suspicious > 0 {
        warn!("{} records failed sanity checks and were kept as-is", suspicious);
    }
    debug!("Cleaned {} records", records.len());

    Ok(PriceTable::new(records))
}

pub fn validate_record(data: &PriceRecord) -> bool {
    let mut is_valid = true;
    if data.volume < 0 {
        warn!("{} {}: negative volume", data.company, data.date);
        is_valid = false;
    }

    if [data.open, data.high, data.low, data.close].iter().any(|p| *p < 0.0) {
        warn!("{} {}: negative price", data.company, data.date);
        is_valid = false;
    }

    if data.high < data.low {
        warn!("{} {}: high below low", data.company, data.date);
        is_valid = false;
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, company: &str, close: &str) -> RawPriceRecord {
        RawPriceRecord {
            date: date.to_string(),
            company: company.to_string(),
            close: close.to_string(),
            volume: "50499010".to_string(),
            open: "$192.58".to_string(),
            high: "$194.32".to_string(),
            low: "$191.81".to_string(),
        }
    }

    #[test]
    fn dates_accept_slashes_and_dashes() {
        let expected = NaiveDate::from_ymd_opt(2023, 7, 17).unwrap();
        assert_eq!(parse_date("07/17/2023", 1).unwrap(), expected);
        assert_eq!(parse_date("07-17-2023", 1).unwrap(), expected);
        assert_eq!(parse_date(" 7/17/2023 ", 1).unwrap(), expected);
    }

    #[test]
    fn dates_reject_other_layouts() {
        for bad in ["2023-07-17", "07/17/23", "13/01/2023", "July 17 2023", ""] {
            match parse_date(bad, 4) {
                Err(DataIngestionError::MalformedDate { row, value }) => {
                    assert_eq!(row, 4);
                    assert_eq!(value, bad);
                }
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn date_error_names_row_column_and_token() {
        let err = parse_date("2023-07-17", 6).unwrap_err().to_string();
        assert!(err.contains("Date"), "{err}");
        assert!(err.contains("row 6"), "{err}");
        assert!(err.contains("\"2023-07-17\""), "{err}");
    }

    #[test]
    fn prices_lose_currency_symbols() {
        assert_eq!(parse_price("$193.99", 1, "Open").unwrap(), 193.99);
        assert_eq!(parse_price("$1,234.50", 1, "Open").unwrap(), 1234.5);
        assert_eq!(parse_price("42", 1, "Open").unwrap(), 42.0);
    }

    #[test]
    fn non_numeric_prices_are_reported() {
        let err = parse_price("$abc", 3, "High").unwrap_err();
        assert!(matches!(
            err,
            DataIngestionError::MalformedNumber { row: 3, column: "High", .. }
        ));
        assert!(parse_price("$", 1, "Low").is_err());
        assert!(parse_price("$inf", 1, "Low").is_err());
        assert!(parse_price("NaN", 1, "Low").is_err());
    }

    #[test]
    fn volume_must_be_integral() {
        assert_eq!(parse_volume("1,000", 1).unwrap(), 1000);
        assert!(parse_volume("12.5", 1).is_err());
    }

    #[test]
    fn tickers_map_to_display_names() {
        assert_eq!(company_name("AAPL"), "Apple");
        assert_eq!(company_name("CSCO"), "Cisco Systems");
        assert_eq!(company_name("META"), "META");
        assert_eq!(company_name("AMD"), "AMD");
    }

    #[test]
    fn clean_produces_finite_prices() {
        let table = clean(&[raw("07/17/2023", "AAPL", "$193.99"), raw("07-14-2023", "AMD", "$110.0")])
            .unwrap();
        assert_eq!(table.len(), 2);
        for r in table.records() {
            for p in [r.close, r.open, r.high, r.low] {
                assert!(p.is_finite());
            }
        }
        assert_eq!(table.records()[0].company, "Apple");
        assert_eq!(table.records()[1].company, "AMD");
    }

    #[test]
    fn clean_reports_first_bad_row() {
        let err = clean(&[raw("07/17/2023", "AAPL", "$1"), raw("17/07/2023", "AAPL", "$1")])
            .unwrap_err();
        assert!(matches!(err, DataIngestionError::MalformedDate { row: 2, .. }));
    }

    #[test]
    fn sanity_check_flags_inverted_range() {
        let mut record = clean_record(&raw("07/17/2023", "AAPL", "$193.99"), 1).unwrap();
        assert!(validate_record(&record));
        record.high = 1.0;
        assert!(!validate_record(&record));
    }
}
