//! Engine tunables: alias table, bracket thresholds, chip set and the time
//! zone used to decide what "today" is.

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::amount::AmountBrackets;
use crate::predicate::{Predicate, compile};
use crate::state::{Chip, FilterState};
use crate::time::today_in;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// IANA zone, e.g. "Africa/Douala"
    pub timezone: String,
    /// Chips shown above the list, in display order
    pub chips: Vec<Chip>,
    pub brackets: AmountBrackets,
    pub aliases: AliasTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: "Africa/Douala".to_string(),
            chips: ["All", "Transfert", "Tontine", "Recharge", "Retrait", "Paiement"]
                .into_iter()
                .map(Chip::named)
                .collect(),
            brackets: AmountBrackets::default(),
            aliases: AliasTable::default(),
        }
    }
}

impl EngineConfig {
    pub fn today(&self) -> Result<NaiveDate> {
        today_in(&self.timezone)
    }

    pub fn compile(&self, state: &FilterState, today: NaiveDate) -> Predicate {
        compile(state, &self.aliases, &self.brackets, today)
    }

    /// Compile against the current date in the configured zone.
    pub fn compile_with_clock(&self, state: &FilterState) -> Result<Predicate> {
        Ok(self.compile(state, self.today()?))
    }
}
