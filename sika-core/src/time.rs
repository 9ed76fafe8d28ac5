//! Time utilities: "today" in the user's zone and calendar windows for the
//! period facet.

use anyhow::Result;
use chrono::{Datelike, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use regex::Regex;

/// Current calendar date in an IANA zone like "Africa/Douala".
pub fn today_in(tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}

/// Inclusive date window. A missing side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self::new(Some(date), Some(date))
    }

    /// Monday through Sunday of the ISO week holding `date`.
    pub fn iso_week(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_monday());
        let monday = date.checked_sub_days(Days::new(offset));
        let sunday = monday.and_then(|m| m.checked_add_days(Days::new(6)));
        Self::new(monday, sunday)
    }

    /// First through last day of the month holding `date`.
    pub fn calendar_month(date: NaiveDate) -> Self {
        let first = date.with_day(1);
        let last = first
            .and_then(|f| f.checked_add_months(chrono::Months::new(1)))
            .and_then(|next| next.pred_opt());
        Self::new(first, last)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| s <= date) && self.end.is_none_or(|e| date <= e)
    }
}

/// Parse a custom period bound typed by the user.
///
/// Accepts `YYYY-MM-DD` or `DD/MM/YYYY`. Blank or malformed input is `None`.
pub fn parse_period_bound(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let iso_re = Regex::new(r"^(?P<y>\d{4})-(?P<m>\d{1,2})-(?P<d>\d{1,2})$").ok()?;
    let fr_re = Regex::new(r"^(?P<d>\d{1,2})/(?P<m>\d{1,2})/(?P<y>\d{4})$").ok()?;

    let caps = iso_re.captures(text).or_else(|| fr_re.captures(text))?;
    let y: i32 = caps["y"].parse().ok()?;
    let m: u32 = caps["m"].parse().ok()?;
    let d: u32 = caps["d"].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_in_valid_zone() {
        assert!(today_in("Africa/Douala").is_ok());
        assert!(today_in("Mars/Olympus").is_err());
    }

    #[test]
    fn test_iso_week_runs_monday_to_sunday() {
        // 2026-10-16 is a Friday
        let w = DateWindow::iso_week(date(2026, 10, 16));
        assert_eq!(w.start, Some(date(2026, 10, 12)));
        assert_eq!(w.end, Some(date(2026, 10, 18)));
        assert!(w.contains(date(2026, 10, 18)));
        assert!(!w.contains(date(2026, 10, 11)));
    }

    #[test]
    fn test_calendar_month_handles_february() {
        let m = DateWindow::calendar_month(date(2028, 2, 10));
        assert_eq!(m.start, Some(date(2028, 2, 1)));
        assert_eq!(m.end, Some(date(2028, 2, 29)));

        let dec = DateWindow::calendar_month(date(2026, 12, 31));
        assert_eq!(dec.end, Some(date(2026, 12, 31)));
    }

    #[test]
    fn test_open_sides_are_unbounded() {
        let w = DateWindow::new(Some(date(2026, 1, 1)), None);
        assert!(w.contains(date(2099, 1, 1)));
        assert!(!w.contains(date(2025, 12, 31)));
    }

    #[test]
    fn test_swapped_window_contains_nothing() {
        let w = DateWindow::new(Some(date(2026, 3, 1)), Some(date(2026, 2, 1)));
        assert!(!w.contains(date(2026, 2, 15)));
    }

    #[test]
    fn test_parse_period_bound_formats() {
        assert_eq!(parse_period_bound("2026-10-01"), Some(date(2026, 10, 1)));
        assert_eq!(parse_period_bound("01/10/2026"), Some(date(2026, 10, 1)));
        assert_eq!(parse_period_bound(" 5/3/2026 "), Some(date(2026, 3, 5)));
        assert_eq!(parse_period_bound("31/02/2026"), None);
        assert_eq!(parse_period_bound("hier"), None);
        assert_eq!(parse_period_bound(""), None);
    }
}
