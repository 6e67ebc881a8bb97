use std::sync::LazyLock;

use regex::Regex;

static LOT_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Lot Size(\d+)").unwrap());

/// Allotment lot size: first integer glued to the "Lot Size" literal.
pub fn extract(text: &str) -> Option<u32> {
    LOT_SIZE_RE
        .captures(text)?
        .get(1)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glued_digits() {
        assert_eq!(extract("Offer Price54Lot Size2000Exp. Premium"), Some(2000));
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(extract("Lot Size100 ... Lot Size999"), Some(100));
    }

    #[test]
    fn absent() {
        assert_eq!(extract("Offer Price160-170"), None);
        assert_eq!(extract("Lot Size TBA"), None);
    }
}
