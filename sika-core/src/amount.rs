//! Amount helpers: magnitude extraction from display strings, custom bound
//! parsing, and the named amount brackets.

use serde::{Deserialize, Serialize};

/// Keep only ASCII digits. Signs, separators and currency codes are dropped.
pub fn strip_non_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Unsigned magnitude of a formatted amount like `"+2 500"` or `"-15 000"`.
///
/// Anything that doesn't yield a parsable integer (no digits, overflow) is 0.
pub fn parse_magnitude(text: &str) -> u64 {
    strip_non_digits(text).parse().unwrap_or(0)
}

/// Parse a user-typed custom bound. Blank or unparsable input is `None`,
/// which callers treat as "no bound on that side".
pub fn parse_bound(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{202f}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a signed amount the way the transaction list shows it:
/// explicit sign, space-separated thousands.
pub fn format_amount_text(amount: i64) -> String {
    let sign = if amount < 0 { '-' } else { '+' };
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}

/// Thresholds for the Small / Medium / Large presets.
///
/// Small is `< small_below`, Large is `> large_above`, Medium is the closed
/// interval between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmountBrackets {
    pub small_below: u64,
    pub large_above: u64,
}

impl Default for AmountBrackets {
    fn default() -> Self {
        Self {
            small_below: 10_000,
            large_above: 100_000,
        }
    }
}
