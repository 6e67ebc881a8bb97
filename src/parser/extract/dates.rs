use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static OFFER_DATES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Offer Date:\s*([A-Za-z]+ \d+, \d+)\s*-\s*([A-Za-z]+ \d+, \d+)").unwrap()
});

const DATE_FORMAT: &str = "%b %d, %Y";

/// Offer window from the anchor line, e.g. "Offer Date: Aug 4, 2025 - Aug 6, 2025".
/// Either side failing to parse drops the whole pair — no partial windows.
pub fn extract(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    let caps = OFFER_DATES_RE.captures(text)?;
    let start = NaiveDate::parse_from_str(caps[1].trim(), DATE_FORMAT).ok()?;
    let end = NaiveDate::parse_from_str(caps[2].trim(), DATE_FORMAT).ok()?;
    Some((start, end))
}

// ── Tests ──
