//! Category alias table mapping chip labels to record matchers.
//!
//! Some chips cover more than one raw field ("Transfert" matches the
//! category and also any received/sent money). Chips without an entry
//! fall back to plain category equality, so adding a chip is a table edit.

use serde::{Deserialize, Serialize};

use crate::record::{Direction, TransactionRecord};
use crate::state::Chip;

/// One way a record can satisfy a chip
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Matcher {
    Category(String),
    Direction(Direction),
}

impl Matcher {
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            Matcher::Category(category) => record.category == *category,
            Matcher::Direction(direction) => record.direction == *direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliasEntry {
    pub chip: String,
    pub matchers: Vec<Matcher>,
}

/// What the selected chip compiles to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryRule {
    Any,
    /// OR over the matchers
    AnyOf(Vec<Matcher>),
}

impl CategoryRule {
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            CategoryRule::Any => true,
            CategoryRule::AnyOf(matchers) => matchers.iter().any(|m| m.matches(record)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(vec![
            entry(
                "Transfert",
                vec![
                    Matcher::Category("Transfert".to_string()),
                    Matcher::Direction(Direction::Received),
                    Matcher::Direction(Direction::Sent),
                ],
            ),
            entry("Recharge", vec![Matcher::Category("Rechargement".to_string())]),
            entry("Retrait", vec![Matcher::Direction(Direction::Sent)]),
            entry("Paiement", vec![Matcher::Category("Facture".to_string())]),
        ])
    }
}

impl AliasTable {
    pub fn new(entries: Vec<AliasEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    /// Matchers registered for a chip label, if any
    pub fn lookup(&self, chip: &str) -> Option<&[Matcher]> {
        self.entries
            .iter()
            .find(|e| e.chip == chip)
            .map(|e| e.matchers.as_slice())
    }

    pub fn resolve(&self, chip: &Chip) -> CategoryRule {
        match chip {
            Chip::All => CategoryRule::Any,
            Chip::Named(label) => match self.lookup(label) {
                Some(matchers) => CategoryRule::AnyOf(matchers.to_vec()),
                None => CategoryRule::AnyOf(vec![Matcher::Category(label.clone())]),
            },
        }
    }
}

fn entry(chip: &str, matchers: Vec<Matcher>) -> AliasEntry {
    AliasEntry {
        chip: chip.to_string(),
        matchers,
    }
}
