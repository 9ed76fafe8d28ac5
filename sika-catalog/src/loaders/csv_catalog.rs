//! CSV catalog loader.
//!
//! Header-driven; expected columns:
//! id,direction,title,description,amount_text,amount,currency,status,category,timestamp,display_time
//!
//! `amount` and `display_time` may be blank. A blank `amount_text` is derived
//! from `amount` when present. Rows with an unknown status or an unreadable
//! timestamp are skipped.

use anyhow::{Context, Result};
use sika_core::TransactionRecord;
use std::io::Read;
use std::path::Path;

use super::RecordRow;

/// Parse a CSV catalog from any reader, keeping row order.
pub fn parse_catalog_csv<R: Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut out = Vec::new();
    for (index, result) in rdr.deserialize::<RecordRow>().enumerate() {
        // header is line 1
        let line = index + 2;
        let row = result.with_context(|| format!("reading CSV row at line {line}"))?;
        if let Some(record) = row.into_record(line) {
            out.push(record);
        }
    }

    Ok(out)
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_catalog_csv(file).with_context(|| format!("parsing {}", path.display()))
}
