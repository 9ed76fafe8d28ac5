//! Built-in demo catalog: the mock transactions the app ships with, dated
//! relative to a reference day so period filters have something to bite on.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use sika_core::{Direction, Status, TransactionRecord};

struct Seed {
    id: &'static str,
    direction: Direction,
    title: &'static str,
    description: &'static str,
    amount_text: &'static str,
    status: Status,
    category: &'static str,
    /// Days from the reference day; negative is in the past
    offset_days: i64,
    time: (u32, u32),
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "tx-001",
        direction: Direction::Received,
        title: "Reçu de Marie",
        description: "Remboursement restaurant",
        amount_text: "+2 500",
        status: Status::Completed,
        category: "Transfert",
        offset_days: 0,
        time: (14, 30),
    },
    Seed {
        id: "tx-002",
        direction: Direction::Sent,
        title: "Envoyé à Jean",
        description: "Contribution tontine #3",
        amount_text: "-15 000",
        status: Status::Completed,
        category: "Tontine",
        offset_days: -1,
        time: (9, 10),
    },
    Seed {
        id: "tx-003",
        direction: Direction::Exchange,
        title: "Change de devise",
        description: "XAF vers EUR",
        amount_text: "-50 000",
        status: Status::Pending,
        category: "Change",
        offset_days: 2,
        time: (17, 45),
    },
    Seed {
        id: "tx-004",
        direction: Direction::Other,
        title: "Recharge Orange Money",
        description: "Rechargement du compte",
        amount_text: "+25 000",
        status: Status::Completed,
        category: "Rechargement",
        offset_days: -3,
        time: (11, 5),
    },
    Seed {
        id: "tx-005",
        direction: Direction::Other,
        title: "Facture ENEO",
        description: "Électricité septembre",
        amount_text: "-18 450",
        status: Status::Completed,
        category: "Facture",
        offset_days: -5,
        time: (8, 20),
    },
    Seed {
        id: "tx-006",
        direction: Direction::Received,
        title: "Tontine des amis",
        description: "Versement du tour #2",
        amount_text: "+120 000",
        status: Status::Completed,
        category: "Tontine",
        offset_days: -9,
        time: (19, 0),
    },
    Seed {
        id: "tx-007",
        direction: Direction::Received,
        title: "Bonus de parrainage",
        description: "Invitation de Paul acceptée",
        amount_text: "+1 000",
        status: Status::Completed,
        category: "Bonus",
        offset_days: -12,
        time: (10, 15),
    },
    Seed {
        id: "tx-008",
        direction: Direction::Other,
        title: "Abonnement Canal+",
        description: "Renouvellement mensuel",
        amount_text: "-12 000",
        status: Status::Pending,
        category: "Facture",
        offset_days: 3,
        time: (0, 0),
    },
    Seed {
        id: "tx-009",
        direction: Direction::Sent,
        title: "Envoyé à Awa",
        description: "Frais de scolarité",
        amount_text: "-150 000",
        status: Status::Failed,
        category: "Transfert",
        offset_days: -2,
        time: (16, 40),
    },
    Seed {
        id: "tx-010",
        direction: Direction::Sent,
        title: "Cotisation tontine famille",
        description: "Tour #5",
        amount_text: "-25 000",
        status: Status::Pending,
        category: "Tontine",
        offset_days: 7,
        time: (9, 0),
    },
    Seed {
        id: "tx-011",
        direction: Direction::Sent,
        title: "Remboursement microcrédit",
        description: "Échéance 3/6",
        amount_text: "-35 000",
        status: Status::Pending,
        category: "Microcrédit",
        offset_days: 14,
        time: (9, 0),
    },
    Seed {
        id: "tx-012",
        direction: Direction::Exchange,
        title: "Change EUR vers XAF",
        description: "Voyage Paris",
        amount_text: "+65 595",
        status: Status::Completed,
        category: "Change",
        offset_days: -20,
        time: (13, 55),
    },
];

fn timestamp(today: NaiveDate, offset_days: i64, (h, m): (u32, u32)) -> NaiveDateTime {
    let day = today
        .checked_add_signed(Duration::days(offset_days))
        .unwrap_or(today);
    day.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default())
}

fn display_time(offset_days: i64, ts: NaiveDateTime) -> String {
    match offset_days {
        0 => ts.format("%H:%M").to_string(),
        -1 => "Hier".to_string(),
        1 => "Demain".to_string(),
        _ => ts.format("%d/%m").to_string(),
    }
}

/// Demo transactions in append order, dated around `today`.
pub fn demo_catalog(today: NaiveDate) -> Vec<TransactionRecord> {
    SEEDS
        .iter()
        .map(|s| {
            let ts = timestamp(today, s.offset_days, s.time);
            TransactionRecord::new(s.id, s.title)
                .with_direction(s.direction)
                .with_description(s.description)
                .with_amount_text(s.amount_text)
                .with_status(s.status)
                .with_category(s.category)
                .with_timestamp(ts)
                .with_display_time(display_time(s.offset_days, ts))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sika_core::{EngineConfig, FilterState, filter};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let txns = demo_catalog(today());
        let ids: Vec<&str> = txns.iter().map(|t| t.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_dates_are_relative_to_reference_day() {
        let txns = demo_catalog(today());
        assert_eq!(txns[0].timestamp.date(), today());
        assert_eq!(txns[0].display_time, "14:30");
        assert_eq!(txns[1].display_time, "Hier");
        assert!(txns[2].timestamp.date() > today());
    }

    #[test]
    fn test_past_tab_default_view() {
        let txns = demo_catalog(today());
        let p = EngineConfig::default().compile(&FilterState::default(), today());
        let shown = filter(&txns, &p);
        assert!(shown.iter().all(|t| t.is_settled()));
        assert_eq!(shown.len(), 7);
    }
}
