//! JSON catalog loader: a top-level array of transaction records.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use sika_core::TransactionRecord;
use std::path::Path;

use super::RecordRow;

/// Same leniency as the CSV loader: unknown directions become `Other`, rows
/// with an unknown status or unreadable timestamp are skipped with a warning.
/// Only a missing required field or a non-array document fails the load.
pub fn parse_catalog_json(text: &str) -> Result<Vec<TransactionRecord>> {
    let value: Value = serde_json::from_str(text).context("invalid JSON")?;
    let Value::Array(items) = value else {
        bail!("catalog JSON must be a top-level array of transactions");
    };

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let row: RecordRow = serde_json::from_value(item)
            .with_context(|| format!("decoding transaction at index {index}"))?;
        if let Some(record) = row.into_record(index) {
            out.push(record);
        }
    }
    Ok(out)
}

pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_catalog_json(&text).with_context(|| format!("parsing {}", path.display()))
}
