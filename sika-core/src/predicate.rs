//! Predicate compiler: turns a `FilterState` into one composed, pure
//! membership test over transaction records.
//!
//! The compiled predicate is the AND of:
//! - partition (settled vs. not, from the tab)
//! - category chip, through the alias table
//! - case-insensitive search over title / description / category
//! - advanced status
//! - amount bracket or custom min/max
//! - period window relative to a reference date
//!
//! Compilation does all the parsing (lower-casing the query, reading custom
//! bounds, computing calendar windows) so `matches` is a cheap per-record check.

use chrono::NaiveDate;
use tracing::debug;

use crate::alias::{AliasTable, CategoryRule};
use crate::amount::{AmountBrackets, parse_bound};
use crate::record::{Status, TransactionRecord};
use crate::state::{AmountFacet, FilterState, Partition, PeriodFacet};
use crate::time::{DateWindow, parse_period_bound};

#[derive(Debug, Clone, PartialEq)]
pub enum AmountRule {
    Any,
    Below(u64),
    Within { min: u64, max: u64 },
    Above(u64),
    /// Custom bounds; an unset max is `f64::INFINITY`
    Between { min: f64, max: f64 },
}

impl AmountRule {
    pub fn from_facet(facet: &AmountFacet, brackets: &AmountBrackets) -> Self {
        match facet {
            AmountFacet::All => AmountRule::Any,
            AmountFacet::Small => AmountRule::Below(brackets.small_below),
            AmountFacet::Medium => AmountRule::Within {
                min: brackets.small_below,
                max: brackets.large_above,
            },
            AmountFacet::Large => AmountRule::Above(brackets.large_above),
            AmountFacet::Custom { min, max } => AmountRule::Between {
                min: parse_bound(min).unwrap_or(0.0),
                max: parse_bound(max).unwrap_or(f64::INFINITY),
            },
        }
    }

    pub fn matches(&self, magnitude: u64) -> bool {
        match *self {
            AmountRule::Any => true,
            AmountRule::Below(limit) => magnitude < limit,
            AmountRule::Within { min, max } => min <= magnitude && magnitude <= max,
            AmountRule::Above(limit) => magnitude > limit,
            AmountRule::Between { min, max } => {
                let m = magnitude as f64;
                min <= m && m <= max
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodRule {
    Any,
    Window(DateWindow),
}

impl PeriodRule {
    pub fn from_facet(facet: &PeriodFacet, today: NaiveDate) -> Self {
        match facet {
            PeriodFacet::All => PeriodRule::Any,
            PeriodFacet::Today => PeriodRule::Window(DateWindow::day(today)),
            PeriodFacet::Week => PeriodRule::Window(DateWindow::iso_week(today)),
            PeriodFacet::Month => PeriodRule::Window(DateWindow::calendar_month(today)),
            PeriodFacet::Custom { start, end } => PeriodRule::Window(DateWindow::new(
                parse_period_bound(start),
                parse_period_bound(end),
            )),
        }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            PeriodRule::Any => true,
            PeriodRule::Window(window) => window.contains(date),
        }
    }
}

/// Compiled filter. Equal inputs compile to equal predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub partition: Partition,
    pub category: CategoryRule,
    /// Lower-cased query; `None` when the search box is empty
    pub search: Option<String>,
    pub status: Option<Status>,
    pub amount: AmountRule,
    pub period: PeriodRule,
}

impl Predicate {
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        self.partition.contains(record)
            && self.category.matches(record)
            && self.matches_search(record)
            && self.status.is_none_or(|s| record.status == s)
            && self.amount.matches(record.magnitude())
            && self.period.matches(record.timestamp.date())
    }

    fn matches_search(&self, record: &TransactionRecord) -> bool {
        let Some(query) = &self.search else {
            return true;
        };
        record.title.to_lowercase().contains(query)
            || record.description.to_lowercase().contains(query)
            || record.category.to_lowercase().contains(query)
    }
}

/// Compile `state` against an alias table, bracket thresholds and the
/// reference date used for Today / Week / Month.
pub fn compile(
    state: &FilterState,
    aliases: &AliasTable,
    brackets: &AmountBrackets,
    today: NaiveDate,
) -> Predicate {
    let predicate = Predicate {
        partition: state.partition(),
        category: aliases.resolve(&state.selected_chip),
        search: state
            .has_search()
            .then(|| state.search_query.to_lowercase()),
        status: state.advanced.status.status(),
        amount: AmountRule::from_facet(&state.advanced.amount, brackets),
        period: PeriodRule::from_facet(&state.advanced.period, today),
    };
    debug!(
        tab = ?state.tab,
        chip = %state.selected_chip,
        search = %state.search_query,
        advanced_active = state.advanced.is_active(),
        "compiled transaction predicate"
    );
    predicate
}
