use std::sync::LazyLock;

use regex::Regex;

/// Digits must follow the literal directly, so "Exp. PremiumN/A" placeholders
/// never match. The parenthesized percentage is required: premium and
/// percentage are emitted together or not at all.
static PREMIUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Exp\. Premium(\d+(?:-\d+)?)[^(]*\((\d+\.?\d*)%\)").unwrap());

/// Expected grey-market premium as (premium, percentage). A quoted range like
/// "24-25" averages to 24.5.
pub fn extract(text: &str) -> Option<(f64, f64)> {
    let caps = PREMIUM_RE.captures(text)?;
    let premium = parse_range_avg(&caps[1])?;
    let percentage = caps[2].parse::<f64>().ok()?;
    Some((premium, percentage))
}

fn parse_range_avg(range: &str) -> Option<f64> {
    if let Some((lo, hi)) = range.split_once('-') {
        let min = lo.trim().parse::<i64>().ok()?;
        let max = hi.trim().parse::<i64>().ok()?;
        Some((min + max) as f64 / 2.0)
    } else {
        range.trim().parse::<i64>().ok().map(|v| v as f64)
    }
}

// ── Tests ──
