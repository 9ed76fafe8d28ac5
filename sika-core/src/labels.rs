//! Chip captions. Display-only: nothing here feeds back into filtering.
//!
//! Precedence per chip:
//! 1. selected chip with a search query: `"<base> + <query>"`
//! 2. unselected chip, no advanced facet, or a search query anywhere: `"<base>"`
//! 3. selected chip with active advanced facets: `"<base> - <period>, <amount>, <status>"`

use serde::Serialize;

use crate::state::{Chip, FilterState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipLabel {
    pub chip: Chip,
    pub text: String,
    pub selected: bool,
}

pub fn chip_label(chip: &Chip, state: &FilterState) -> String {
    let base = chip.base_text();
    let selected = *chip == state.selected_chip;

    if state.has_search() && selected {
        return format!("{base} + {}", state.search_query);
    }

    if !selected || !state.advanced.is_active() || state.has_search() {
        return base.to_string();
    }

    format!("{base} - {}", state.advanced.descriptors().join(", "))
}

pub fn chip_labels(chips: &[Chip], state: &FilterState) -> Vec<ChipLabel> {
    chips
        .iter()
        .map(|chip| ChipLabel {
            chip: chip.clone(),
            text: chip_label(chip, state),
            selected: *chip == state.selected_chip,
        })
        .collect()
}
