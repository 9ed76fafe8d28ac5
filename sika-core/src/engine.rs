//! Filter engine: order-preserving selection over the catalog, plus the
//! bundled result the list screen renders.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::labels::{ChipLabel, chip_labels};
use crate::predicate::Predicate;
use crate::record::TransactionRecord;
use crate::state::FilterState;

/// Records satisfying `predicate`, in catalog order. Never reorders or
/// dedupes; an empty result is a normal outcome.
pub fn filter<'a>(catalog: &'a [TransactionRecord], predicate: &Predicate) -> Vec<&'a TransactionRecord> {
    let out: Vec<&TransactionRecord> = catalog.iter().filter(|r| predicate.matches(r)).collect();
    debug!(catalog = catalog.len(), matched = out.len(), "filtered catalog");
    out
}

pub fn filter_owned(catalog: &[TransactionRecord], predicate: &Predicate) -> Vec<TransactionRecord> {
    filter(catalog, predicate).into_iter().cloned().collect()
}

/// Badge counts for the Past / Upcoming tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PartitionCounts {
    pub past: usize,
    pub upcoming: usize,
}

pub fn partition_counts(catalog: &[TransactionRecord]) -> PartitionCounts {
    let past = catalog.iter().filter(|r| r.is_settled()).count();
    PartitionCounts {
        past,
        upcoming: catalog.len() - past,
    }
}

/// Everything the list screen needs after a facet change
#[derive(Debug, Clone, Serialize)]
pub struct FilteredResult<'a> {
    pub records: Vec<&'a TransactionRecord>,
    pub labels: Vec<ChipLabel>,
    pub advanced_active: bool,
}

impl FilteredResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Compile, filter and caption in one pass.
pub fn evaluate<'a>(
    catalog: &'a [TransactionRecord],
    state: &FilterState,
    config: &EngineConfig,
    today: NaiveDate,
) -> FilteredResult<'a> {
    let predicate = config.compile(state, today);
    FilteredResult {
        records: filter(catalog, &predicate),
        labels: chip_labels(&config.chips, state),
        advanced_active: state.advanced.is_active(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoKey {
    state: FilterState,
    config: EngineConfig,
    today: NaiveDate,
    catalog_len: usize,
}

/// Remembers the last result as catalog indices and skips re-filtering when
/// the state, engine config, date and catalog length are unchanged.
///
/// Bound to one catalog; call `invalidate` if the host swaps catalogs.
#[derive(Debug, Default)]
pub struct MemoizedFilter {
    key: Option<MemoKey>,
    hits: Vec<usize>,
}

impl MemoizedFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.hits.clear();
    }

    pub fn apply<'a>(
        &mut self,
        catalog: &'a [TransactionRecord],
        state: &FilterState,
        config: &EngineConfig,
        today: NaiveDate,
    ) -> Vec<&'a TransactionRecord> {
        let key = MemoKey {
            state: state.clone(),
            config: config.clone(),
            today,
            catalog_len: catalog.len(),
        };

        if self.key.as_ref() != Some(&key) {
            let predicate = config.compile(state, today);
            self.hits = catalog
                .iter()
                .enumerate()
                .filter(|(_, r)| predicate.matches(r))
                .map(|(i, _)| i)
                .collect();
            self.key = Some(key);
        } else {
            debug!(matched = self.hits.len(), "reusing memoized filter result");
        }

        self.hits.iter().filter_map(|&i| catalog.get(i)).collect()
    }
}
