use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::info;

use crate::cleaner;
use crate::error::{DataIngestionError, Result};
use crate::record::{PriceTable, RawPriceRecord};

/// Reads every row of a price CSV. Columns are matched by header name.
pub fn read_raw<R: Read>(reader: R) -> Result<Vec<RawPriceRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let records = rdr
        .deserialize::<RawPriceRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(DataIngestionError::EmptyTable);
    }
    Ok(records)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<PriceTable> {
    let raw = read_raw(reader)?;
    cleaner::clean(&raw)
}

/// Loads and cleans the price file. The file handle is dropped before cleaning starts.
pub fn load_price_table<P: AsRef<Path>>(path: P) -> Result<PriceTable> {
    let path = path.as_ref();
    info!("Loading price data from {}", path.display());

    let raw = {
        let file = File::open(path).map_err(|source| DataIngestionError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        read_raw(file)?
    };

    let table = cleaner::clean(&raw)?;
    info!("Loaded {} records for {} companies", table.len(), table.companies().len());
    Ok(table)
}
