//! Filter state: the tab, search text, category chip and advanced facets.
//!
//! A `FilterState` is a plain value. It is never edited in place; the
//! controller builds a fresh one for every interaction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::{Status, TransactionRecord};

/// Tab selected on the transaction screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    #[serde(rename = "past")]
    Past,
    #[serde(rename = "upcoming")]
    Upcoming,
}

/// Coarse settled / not-settled split derived from the tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Settled,
    Unsettled,
}

impl Tab {
    pub fn partition(self) -> Partition {
        match self {
            Tab::Past => Partition::Settled,
            Tab::Upcoming => Partition::Unsettled,
        }
    }
}

impl Partition {
    pub fn contains(self, record: &TransactionRecord) -> bool {
        match self {
            Partition::Settled => record.is_settled(),
            Partition::Unsettled => !record.is_settled(),
        }
    }
}

pub const ALL_CHIP: &str = "All";
pub const ALL_CHIP_TEXT: &str = "Tous";

/// Single-select category chip. Serialized as its label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Chip {
    #[default]
    All,
    Named(String),
}

impl Chip {
    pub fn named(label: impl Into<String>) -> Self {
        Chip::from(label.into())
    }

    /// Text drawn on the chip before any decoration
    pub fn base_text(&self) -> &str {
        match self {
            Chip::All => ALL_CHIP_TEXT,
            Chip::Named(label) => label,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Chip::All)
    }
}

impl From<String> for Chip {
    fn from(label: String) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(ALL_CHIP)
            || trimmed.eq_ignore_ascii_case(ALL_CHIP_TEXT)
        {
            Chip::All
        } else {
            Chip::Named(trimmed.to_string())
        }
    }
}

impl From<&str> for Chip {
    fn from(label: &str) -> Self {
        Chip::from(label.to_string())
    }
}

impl From<Chip> for String {
    fn from(chip: Chip) -> Self {
        match chip {
            Chip::All => ALL_CHIP.to_string(),
            Chip::Named(label) => label,
        }
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_text())
    }
}

/// Time-period facet. Custom bounds are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PeriodFacet {
    #[default]
    All,
    Today,
    Week,
    Month,
    Custom { start: String, end: String },
}

impl PeriodFacet {
    pub fn is_all(&self) -> bool {
        matches!(self, PeriodFacet::All)
    }

    /// Short descriptor for chip decorations; `None` when inactive.
    pub fn descriptor(&self) -> Option<String> {
        match self {
            PeriodFacet::All => None,
            PeriodFacet::Today => Some("Aujourd'hui".to_string()),
            PeriodFacet::Week => Some("Cette semaine".to_string()),
            PeriodFacet::Month => Some("Ce mois".to_string()),
            PeriodFacet::Custom { start, end } if !start.is_empty() && !end.is_empty() => {
                Some(format!("{start} - {end}"))
            }
            PeriodFacet::Custom { .. } => Some("Période personnalisée".to_string()),
        }
    }
}

/// Amount-bracket facet. Custom bounds are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AmountFacet {
    #[default]
    All,
    Small,
    Medium,
    Large,
    Custom { min: String, max: String },
}

impl AmountFacet {
    pub fn is_all(&self) -> bool {
        matches!(self, AmountFacet::All)
    }

    pub fn descriptor(&self) -> Option<String> {
        match self {
            AmountFacet::All => None,
            AmountFacet::Small => Some("Petits montants".to_string()),
            AmountFacet::Medium => Some("Montants moyens".to_string()),
            AmountFacet::Large => Some("Gros montants".to_string()),
            AmountFacet::Custom { min, max } if !min.is_empty() && !max.is_empty() => {
                Some(format!("{min} - {max}"))
            }
            AmountFacet::Custom { .. } => Some("Montant personnalisé".to_string()),
        }
    }
}

/// Advanced status facet, independent of the tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFacet {
    #[default]
    All,
    Completed,
    Pending,
    Failed,
}

impl StatusFacet {
    pub fn is_all(&self) -> bool {
        matches!(self, StatusFacet::All)
    }

    /// The status this facet pins, if any
    pub fn status(&self) -> Option<Status> {
        match self {
            StatusFacet::All => None,
            StatusFacet::Completed => Some(Status::Completed),
            StatusFacet::Pending => Some(Status::Pending),
            StatusFacet::Failed => Some(Status::Failed),
        }
    }

    pub fn descriptor(&self) -> Option<String> {
        self.status().map(|s| s.display_name().to_string())
    }
}

/// The facets behind the filter icon
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdvancedFilters {
    #[serde(default)]
    pub period: PeriodFacet,
    #[serde(default)]
    pub amount: AmountFacet,
    #[serde(default)]
    pub status: StatusFacet,
}

impl AdvancedFilters {
    /// Drives the dot on the filter icon
    pub fn is_active(&self) -> bool {
        !self.period.is_all() || !self.amount.is_all() || !self.status.is_all()
    }

    /// Descriptors of the active facets, ordered period, amount, status.
    pub fn descriptors(&self) -> Vec<String> {
        [
            self.period.descriptor(),
            self.amount.descriptor(),
            self.status.descriptor(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub tab: Tab,
    /// Empty means no text filter
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub selected_chip: Chip,
    #[serde(default)]
    pub advanced: AdvancedFilters,
}

impl FilterState {
    pub fn partition(&self) -> Partition {
        self.tab.partition()
    }

    pub fn has_search(&self) -> bool {
        !self.search_query.is_empty()
    }
}
