use std::sync::LazyLock;

use regex::Regex;

static BARE_TIMES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*times").unwrap());
static APPS_PIPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)No of Apps:[^|]*\|\s*(\d+\.?\d*)\s*times").unwrap());

/// Ordered rule list, first successful parse wins. The bare pattern is
/// deliberately listed before the compound "No of Apps: n | x times" form:
/// in compound text both rules capture the same number, so the ordering is
/// benign, but it must stay explicit and covered by tests.
fn rules() -> [(&'static str, &'static Regex); 2] {
    [
        ("bare times", &BARE_TIMES_RE),
        ("apps pipe times", &APPS_PIPE_RE),
    ]
}

/// Subscription demand multiple, e.g. "2.91 times" or
/// "No of Apps: 4624 | 13.39 times".
pub fn extract(text: &str) -> Option<f64> {
    for (_name, re) in rules() {
        if let Some(caps) = re.captures(text) {
            if let Ok(value) = caps[1].parse::<f64>() {
                return Some(value);
            }
        }
    }
    None
}

// ── Tests ──
