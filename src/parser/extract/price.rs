use std::sync::LazyLock;

use regex::Regex;

/// The page renders "Offer Price" with the number glued straight on, so the
/// primary pattern assumes no intervening whitespace.
static OFFER_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Offer Price(\d+(?:-\d+)?)").unwrap());

/// Offer price band. A single quoted number yields min == max; a dash pair
/// yields (min, max) in source order, untrusted and unreordered.
pub fn extract(text: &str) -> Option<(u32, u32)> {
    let caps = OFFER_PRICE_RE.captures(text)?;
    parse_band(&caps[1])
}

/// Parse a price band out of loosely formatted text like "160-170" or "54".
/// Anything that is not a digit, dash, or space is stripped first.
pub fn parse_band(price_text: &str) -> Option<(u32, u32)> {
    let clean: String = price_text
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == ' ')
        .collect();

    if let Some((lo, hi)) = clean.split_once('-') {
        let min = lo.trim().parse::<u32>().ok()?;
        let max = hi.trim().parse::<u32>().ok()?;
        Some((min, max))
    } else {
        let price = clean.trim().parse::<u32>().ok()?;
        Some((price, price))
    }
}

// ── Tests ──
