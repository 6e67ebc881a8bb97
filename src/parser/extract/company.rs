use std::sync::LazyLock;

use regex::Regex;

// Page-vocabulary literals the cascade keys on. The listing page renders
// action buttons right before the company name, so these markers are the
// closest thing to a structural delimiter the text has.
const CHECK_ALLOTMENT: &str = "Check Allotment";
const VIEW_CHECK_ALLOTMENT: &str = "View Check Allotment";
const ACTION_MARKERS: &str = "View Apply|Check Allotment|Allotment Awaited";

/// Words that commonly end a listed company's name; used by the two
/// last-resort rules to decide where a name stops.
const COMPANY_SUFFIXES: &[&str] = &[
    "REIT",
    "Trust",
    "Limited",
    "Ltd",
    "Inc",
    "Corp",
    "Company",
    "Group",
    "Holdings",
    "Ventures",
    "Industries",
    "Systems",
    "Solutions",
    "Technologies",
    "Healthcare",
    "Plastics",
    "Cement",
    "Lab",
    "Cast",
    "Cinemas",
];

/// The cascade, most specific first. Rules are tried in order against the
/// whole segment; the first one producing a plausible candidate wins.
static NAME_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    let suffixes = COMPANY_SUFFIXES.join("|");
    vec![
        (
            "check allotment",
            Regex::new(&format!(
                r"{CHECK_ALLOTMENT}\s*([A-Za-z][A-Za-z\s&.-]{{2,}}?)(?:\s*$|\s*[A-Z][a-z])"
            ))
            .unwrap(),
        ),
        (
            "view check allotment",
            Regex::new(&format!(
                r"{VIEW_CHECK_ALLOTMENT}\s*([A-Za-z][A-Za-z\s&.-]{{2,}}?)(?:\s*$|\s*[A-Z][a-z])"
            ))
            .unwrap(),
        ),
        (
            "any allotment marker",
            Regex::new(r"Allotment[A-Za-z\s]*?\s+([A-Z][A-Za-z\s&.-]{3,}?)(?:\s*$|\s*[A-Z][a-z])")
                .unwrap(),
        ),
        (
            "action marker with suffix",
            Regex::new(&format!(
                r"(?:{ACTION_MARKERS}).*?([A-Z][A-Za-z\s&.-]+(?:{suffixes})?)(?:\s*$)"
            ))
            .unwrap(),
        ),
        (
            "bare capitalized with suffix",
            Regex::new(&format!(
                r"([A-Z][A-Za-z]+(?:\s+[A-Z&][A-Za-z]+)*(?:\s+(?:{suffixes})))(?:\s*$)"
            ))
            .unwrap(),
        ),
    ]
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static EDGE_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[.\-\s]+|[.\-\s]+$").unwrap());
static NUMERIC_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9\s\-.]+$").unwrap());

/// Company name from the whole segment text, or None when every cascade step
/// fails. Unlike the other fields this one is intentionally fuzzy: the name
/// sits after the action buttons with nothing else marking it.
pub fn extract(text: &str) -> Option<String> {
    for (_name, re) in NAME_RULES.iter() {
        if let Some(caps) = re.captures(text) {
            let candidate = clean(&caps[1]);
            if is_plausible(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

fn clean(raw: &str) -> String {
    let normalized = WHITESPACE_RE.replace_all(raw.trim(), " ");
    EDGE_PUNCT_RE.replace_all(&normalized, "").to_string()
}

fn is_plausible(candidate: &str) -> bool {
    candidate.len() > 3 && !NUMERIC_ONLY_RE.is_match(candidate)
}

// ── Tests ──
