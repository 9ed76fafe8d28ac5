//! sika-core: faceted filtering and chip captions for the transaction list

pub mod alias;
pub mod amount;
pub mod config;
pub mod controller;
pub mod engine;
pub mod labels;
pub mod predicate;
pub mod record;
pub mod state;
pub mod time;

pub use alias::{AliasEntry, AliasTable, CategoryRule, Matcher};
pub use amount::{AmountBrackets, format_amount_text, parse_bound, parse_magnitude, strip_non_digits};
pub use config::EngineConfig;
pub use controller::FilterController;
pub use engine::{
    FilteredResult, MemoizedFilter, PartitionCounts, evaluate, filter, filter_owned,
    partition_counts,
};
pub use labels::{ChipLabel, chip_label, chip_labels};
pub use predicate::{AmountRule, PeriodRule, Predicate, compile};
pub use record::{Direction, Status, TransactionRecord};
pub use state::{
    AdvancedFilters, AmountFacet, Chip, FilterState, Partition, PeriodFacet, StatusFacet, Tab,
};
pub use time::{DateWindow, parse_period_bound, today_in};
