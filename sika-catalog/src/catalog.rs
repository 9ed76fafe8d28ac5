//! In-memory transaction catalog. Append-ordered and read-only once built.

use anyhow::{Result, bail};
use sika_core::{PartitionCounts, TransactionRecord, partition_counts};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use crate::loaders::{load_csv, load_json};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<TransactionRecord>,
}

impl Catalog {
    /// Wrap records as-is. Duplicate ids are kept but logged; the filter
    /// engine assumes ids are unique.
    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        let mut seen = HashSet::new();
        for r in &records {
            if !seen.insert(r.id.as_str()) {
                warn!(id = %r.id, "duplicate transaction id in catalog");
            }
        }
        Self { records }
    }

    /// Load by file extension: `.csv` or `.json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let records = match ext.as_deref() {
            Some("csv") => load_csv(path)?,
            Some("json") => load_json(path)?,
            _ => bail!(
                "unsupported catalog format: {} (expected .csv or .json)",
                path.display()
            ),
        };
        info!(path = %path.display(), records = records.len(), "loaded catalog");
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TransactionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn counts(&self) -> PartitionCounts {
        partition_counts(&self.records)
    }
}

impl AsRef<[TransactionRecord]> for Catalog {
    fn as_ref(&self) -> &[TransactionRecord] {
        &self.records
    }
}
