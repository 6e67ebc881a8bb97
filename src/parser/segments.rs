use std::sync::LazyLock;

use regex::Regex;

/// An anchor is the literal "Offer Date:" followed by a date range. Plain
/// "Offer Date:" occurrences without a range (navigation text, headers) do
/// not start a segment.
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Offer Date:\s*[A-Za-z]+ \d+, \d+\s*-\s*[A-Za-z]+ \d+, \d+").unwrap()
});

/// The source page has no per-offering container, so a segment is bounded
/// only by the next anchor. Capping the line count keeps one run-together
/// block from bleeding into the next offering's data.
const MAX_SEGMENT_LINES: usize = 20;

/// Split raw page text into per-offering segments. Each segment starts at an
/// anchor occurrence and runs to the next anchor or end of text, reduced to
/// its first non-empty lines. Zero anchors yields an empty Vec, which callers
/// treat as "no offerings listed", not a failure.
pub fn segment(raw: &str) -> Vec<String> {
    let starts: Vec<usize> = ANCHOR_RE.find_iter(raw).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(raw.len());
            clip_lines(&raw[start..end])
        })
        .collect()
}

fn clip_lines(block: &str) -> String {
    block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(MAX_SEGMENT_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_anchor_yields_empty() {
        assert!(segment("nothing relevant here").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn anchor_without_date_range_ignored() {
        // Bare "Offer Date:" with no following range is navigation noise
        assert!(segment("Offer Date: TBA\nOffer Date: soon").is_empty());
    }

    #[test]
    fn two_anchors_two_segments() {
        let raw = "Offer Date: Aug 4, 2025 - Aug 6, 2025\nOffer Price160-170\n\
                   Offer Date: Aug 7, 2025 - Aug 9, 2025\nOffer Price54";
        let segments = segment(raw);
        assert_eq!(segments.len(), 2);
        assert!(segments[0].contains("Aug 4, 2025"));
        assert!(segments[0].contains("Offer Price160-170"));
        assert!(!segments[0].contains("Aug 7"));
        assert!(segments[1].contains("Offer Price54"));
    }

    #[test]
    fn case_insensitive_anchor() {
        let raw = "OFFER DATE: Aug 4, 2025 - Aug 6, 2025\ndata";
        assert_eq!(segment(raw).len(), 1);
    }

    #[test]
    fn segment_clipped_to_line_cap() {
        let mut raw = String::from("Offer Date: Aug 4, 2025 - Aug 6, 2025\n");
        for i in 0..40 {
            raw.push_str(&format!("filler line {}\n", i));
        }
        let segments = segment(&raw);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].lines().count(), MAX_SEGMENT_LINES);
    }

    #[test]
    fn blank_lines_dropped_before_cap() {
        let raw = "Offer Date: Aug 4, 2025 - Aug 6, 2025\n\n\nLot Size100\n";
        let segments = segment(raw);
        assert_eq!(segments[0].lines().count(), 2);
    }

    #[test]
    fn source_order_preserved() {
        let raw = "Offer Date: Jan 1, 2025 - Jan 3, 2025\nFIRST\n\
                   Offer Date: Feb 1, 2025 - Feb 3, 2025\nSECOND";
        let segments = segment(raw);
        assert!(segments[0].contains("FIRST"));
        assert!(segments[1].contains("SECOND"));
    }
}
