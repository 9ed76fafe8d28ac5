//! Transaction record types shown in the transaction list

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::amount::{format_amount_text, parse_magnitude};

/// Which way the money moved
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "received")]
    Received,
    #[serde(rename = "sent")]
    Sent,
    #[serde(rename = "exchange")]
    Exchange,
    #[serde(rename = "other")]
    Other,
}

impl Direction {
    /// Lenient parse used by catalog loaders. Unknown text is `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "received" | "recu" | "reçu" | "in" => Direction::Received,
            "sent" | "envoye" | "envoyé" | "out" => Direction::Sent,
            "exchange" | "change" => Direction::Exchange,
            _ => Direction::Other,
        }
    }
}

/// Settlement status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "failed")]
    Failed,
}

impl Status {
    /// Name shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Completed => "Complété",
            Status::Pending => "En attente",
            Status::Failed => "Échoué",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "completed" | "complete" | "complété" => Some(Status::Completed),
            "pending" | "en attente" => Some(Status::Pending),
            "failed" | "échoué" | "echoue" => Some(Status::Failed),
            _ => None,
        }
    }
}

/// One row of the transaction catalog. Never mutated once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub direction: Direction,
    pub title: String,
    pub description: String,
    /// Signed display amount, e.g. `"+2 500"`
    #[serde(default)]
    pub amount_text: String,
    /// Canonical signed amount, when the source has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    pub currency: String,
    pub status: Status,
    /// Open set: "Transfert", "Tontine", "Change", "Rechargement", "Facture", "Bonus", ...
    pub category: String,
    pub timestamp: NaiveDateTime,
    /// Presentation-only time string ("Hier", "14:30")
    #[serde(default)]
    pub display_time: String,
}

impl TransactionRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            direction: Direction::Other,
            title: title.into(),
            description: String::new(),
            amount_text: String::new(),
            amount: None,
            currency: "XAF".to_string(),
            status: Status::Completed,
            category: String::new(),
            timestamp: NaiveDateTime::default(),
            display_time: String::new(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amount_text(mut self, amount_text: impl Into<String>) -> Self {
        self.amount_text = amount_text.into();
        self
    }

    /// Set the canonical amount and derive the display text from it.
    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self.amount_text = format_amount_text(amount);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_display_time(mut self, display_time: impl Into<String>) -> Self {
        self.display_time = display_time.into();
        self
    }

    /// Unsigned amount used for bracket comparisons.
    ///
    /// Prefers the canonical amount; otherwise digits are pulled out of
    /// `amount_text`, and unparsable text counts as 0.
    pub fn magnitude(&self) -> u64 {
        match self.amount {
            Some(amount) => amount.unsigned_abs(),
            None => parse_magnitude(&self.amount_text),
        }
    }

    /// Settled records belong to the Past tab
    pub fn is_settled(&self) -> bool {
        self.status == Status::Completed
    }
}
