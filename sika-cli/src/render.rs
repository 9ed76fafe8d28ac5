use sika_catalog::Catalog;
use sika_core::{ChipLabel, FilterState, FilteredResult, Tab, TransactionRecord};
use std::fmt::Write;

pub const EMPTY_STATE: &str = "Aucune transaction";

/// Chip row, selected chip bracketed, plus the filter-icon dot.
pub fn chips(labels: &[ChipLabel], advanced_active: bool) -> String {
    let row: Vec<String> = labels
        .iter()
        .map(|l| {
            if l.selected {
                format!("[{}]", l.text)
            } else {
                l.text.clone()
            }
        })
        .collect();
    let dot = if advanced_active { " ●" } else { "" };
    format!("{}  | Filtres{dot}\n", row.join("  "))
}

pub fn list(catalog: &Catalog, state: &FilterState, result: &FilteredResult<'_>) -> String {
    let counts = catalog.counts();
    let mut out = String::new();

    let (past, upcoming) = match state.tab {
        Tab::Past => ("[Passées]", "À venir"),
        Tab::Upcoming => ("Passées", "[À venir]"),
    };
    let _ = writeln!(out, "{past} ({})  {upcoming} ({})", counts.past, counts.upcoming);
    out.push_str(&chips(&result.labels, result.advanced_active));
    out.push('\n');

    if result.is_empty() {
        let _ = writeln!(out, "{EMPTY_STATE}");
        return out;
    }

    for r in &result.records {
        out.push_str(&row(r));
    }
    out
}

fn row(r: &TransactionRecord) -> String {
    format!(
        "{:<8} {:<28} {:>12} {:<4} {:<11} {:<13} {}\n",
        r.display_time,
        r.title,
        r.amount_text,
        r.currency,
        r.status.display_name(),
        r.category,
        r.description
    )
}
