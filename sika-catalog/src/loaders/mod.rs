//! Catalog file loaders

pub mod csv_catalog;
pub mod json_catalog;

pub use csv_catalog::{load_csv, parse_catalog_csv};
pub use json_catalog::{load_json, parse_catalog_json};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use sika_core::{Direction, Status, TransactionRecord, format_amount_text};
use tracing::warn;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a catalog timestamp. A bare `YYYY-MM-DD` means midnight.
pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// One catalog row as read from a file, before validation. Text fields stay
/// strings so a bad direction or status costs one row, not the whole file.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordRow {
    id: String,
    #[serde(default)]
    direction: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    amount_text: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    amount: Option<i64>,
    #[serde(default)]
    currency: String,
    status: String,
    #[serde(default)]
    category: String,
    timestamp: String,
    #[serde(default)]
    display_time: String,
}

impl RecordRow {
    /// `row` is the position reported in logs (file line for CSV, array
    /// index for JSON).
    pub(crate) fn into_record(self, row: usize) -> Option<TransactionRecord> {
        let Some(status) = Status::from_label(&self.status) else {
            warn!(row, id = %self.id, status = %self.status, "skipping row with unknown status");
            return None;
        };
        let Some(timestamp) = parse_timestamp(&self.timestamp) else {
            warn!(row, id = %self.id, timestamp = %self.timestamp, "skipping row with unreadable timestamp");
            return None;
        };

        let amount_text = match (self.amount_text.trim(), self.amount) {
            ("", Some(amount)) => format_amount_text(amount),
            (text, _) => text.to_string(),
        };
        let currency = match self.currency.trim() {
            "" => "XAF".to_string(),
            c => c.to_uppercase(),
        };

        Some(TransactionRecord {
            id: self.id.trim().to_string(),
            direction: Direction::from_label(&self.direction),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            amount_text,
            amount: self.amount,
            currency,
            status,
            category: self.category.trim().to_string(),
            timestamp,
            display_time: self.display_time.trim().to_string(),
        })
    }
}
