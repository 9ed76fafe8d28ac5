//! Filter state controller.
//!
//! Every setter builds a complete new `FilterState` from the previous one
//! and swaps it in; nothing is edited field by field in place, so a reader
//! holding a snapshot never sees a half-applied change.

use tracing::trace;

use crate::state::{AmountFacet, Chip, FilterState, PeriodFacet, StatusFacet, Tab};

impl FilterState {
    pub fn with_tab(&self, tab: Tab) -> Self {
        Self { tab, ..self.clone() }
    }

    pub fn with_search(&self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..self.clone()
        }
    }

    pub fn with_chip(&self, chip: Chip) -> Self {
        Self {
            selected_chip: chip,
            ..self.clone()
        }
    }

    pub fn with_period(&self, period: PeriodFacet) -> Self {
        let mut next = self.clone();
        next.advanced.period = period;
        next
    }

    pub fn with_amount_range(&self, amount: AmountFacet) -> Self {
        let mut next = self.clone();
        next.advanced.amount = amount;
        next
    }

    pub fn with_status(&self, status: StatusFacet) -> Self {
        let mut next = self.clone();
        next.advanced.status = status;
        next
    }

    /// Typing a custom min switches the amount facet to Custom, keeping any
    /// max already entered.
    pub fn with_custom_amount_min(&self, min: impl Into<String>) -> Self {
        let max = match &self.advanced.amount {
            AmountFacet::Custom { max, .. } => max.clone(),
            _ => String::new(),
        };
        self.with_amount_range(AmountFacet::Custom { min: min.into(), max })
    }

    pub fn with_custom_amount_max(&self, max: impl Into<String>) -> Self {
        let min = match &self.advanced.amount {
            AmountFacet::Custom { min, .. } => min.clone(),
            _ => String::new(),
        };
        self.with_amount_range(AmountFacet::Custom { min, max: max.into() })
    }

    pub fn with_custom_period_start(&self, start: impl Into<String>) -> Self {
        let end = match &self.advanced.period {
            PeriodFacet::Custom { end, .. } => end.clone(),
            _ => String::new(),
        };
        self.with_period(PeriodFacet::Custom { start: start.into(), end })
    }

    pub fn with_custom_period_end(&self, end: impl Into<String>) -> Self {
        let start = match &self.advanced.period {
            PeriodFacet::Custom { start, .. } => start.clone(),
            _ => String::new(),
        };
        self.with_period(PeriodFacet::Custom { start, end: end.into() })
    }

    /// Clear period, amount and status; keep tab, chip and search.
    pub fn without_advanced(&self) -> Self {
        Self {
            advanced: Default::default(),
            ..self.clone()
        }
    }

    /// Canonical defaults for every facet. The tab is the screen's selection,
    /// not a facet, so it carries over.
    pub fn reset(&self) -> Self {
        Self {
            tab: self.tab,
            ..Self::default()
        }
    }
}

/// Owns the current snapshot and replaces it wholesale on each interaction.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    state: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FilterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Cheap snapshot for readers on other threads
    pub fn snapshot(&self) -> FilterState {
        self.state.clone()
    }

    fn replace(&mut self, next: FilterState, action: &str) -> &FilterState {
        trace!(action, from = ?self.state, to = ?next, "filter state replaced");
        self.state = next;
        &self.state
    }

    pub fn set_tab(&mut self, tab: Tab) -> &FilterState {
        let next = self.state.with_tab(tab);
        self.replace(next, "set_tab")
    }

    pub fn set_search(&mut self, query: impl Into<String>) -> &FilterState {
        let next = self.state.with_search(query);
        self.replace(next, "set_search")
    }

    pub fn clear_search(&mut self) -> &FilterState {
        self.set_search(String::new())
    }

    pub fn set_chip(&mut self, chip: Chip) -> &FilterState {
        let next = self.state.with_chip(chip);
        self.replace(next, "set_chip")
    }

    pub fn set_advanced_period(&mut self, period: PeriodFacet) -> &FilterState {
        let next = self.state.with_period(period);
        self.replace(next, "set_advanced_period")
    }

    pub fn set_advanced_amount_range(&mut self, amount: AmountFacet) -> &FilterState {
        let next = self.state.with_amount_range(amount);
        self.replace(next, "set_advanced_amount_range")
    }

    pub fn set_advanced_status(&mut self, status: StatusFacet) -> &FilterState {
        let next = self.state.with_status(status);
        self.replace(next, "set_advanced_status")
    }

    pub fn set_custom_amount_min(&mut self, min: impl Into<String>) -> &FilterState {
        let next = self.state.with_custom_amount_min(min);
        self.replace(next, "set_custom_amount_min")
    }

    pub fn set_custom_amount_max(&mut self, max: impl Into<String>) -> &FilterState {
        let next = self.state.with_custom_amount_max(max);
        self.replace(next, "set_custom_amount_max")
    }

    pub fn set_custom_period_start(&mut self, start: impl Into<String>) -> &FilterState {
        let next = self.state.with_custom_period_start(start);
        self.replace(next, "set_custom_period_start")
    }

    pub fn set_custom_period_end(&mut self, end: impl Into<String>) -> &FilterState {
        let next = self.state.with_custom_period_end(end);
        self.replace(next, "set_custom_period_end")
    }

    pub fn reset_advanced(&mut self) -> &FilterState {
        let next = self.state.without_advanced();
        self.replace(next, "reset_advanced")
    }

    pub fn reset(&mut self) -> &FilterState {
        let next = self.state.reset();
        self.replace(next, "reset")
    }
}
