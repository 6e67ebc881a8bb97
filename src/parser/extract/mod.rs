pub mod company;
pub mod dates;
pub mod lots;
pub mod premium;
pub mod price;
pub mod subscription;

use crate::record::{OfferingRecord, Rejection, UNKNOWN_COMPANY};

/// Run every field rule against one segment and gate the result. Fields are
/// independent; each degrades to absent on its own. A segment only survives
/// when both the price and the lot size were found — everything else is
/// annotation.
pub fn extract(segment: &str) -> Result<OfferingRecord, Rejection> {
    let mut record = OfferingRecord {
        company_name: company::extract(segment).unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        ..OfferingRecord::default()
    };

    if let Some((start, end)) = dates::extract(segment) {
        record.offer_start_date = Some(start);
        record.offer_end_date = Some(end);
    }
    if let Some((min, max)) = price::extract(segment) {
        record.offer_price_min = Some(min);
        record.offer_price_max = Some(max);
    }
    record.lot_size = lots::extract(segment);
    record.subscription_times = subscription::extract(segment);
    if let Some((prem, pct)) = premium::extract(segment) {
        record.expected_premium = Some(prem);
        record.premium_percentage = Some(pct);
    }

    let (min, max) = match (record.offer_price_min, record.offer_price_max) {
        (Some(min), Some(max)) => (min, max),
        _ => return Err(Rejection::MissingPrice),
    };
    let lot = record.lot_size.ok_or(Rejection::MissingLotSize)?;

    record.investment_per_lot = Some(investment_per_lot(min, max, lot));
    Ok(record)
}

/// Cost of one allotment lot at the midpoint of the price band.
fn investment_per_lot(price_min: u32, price_max: u32, lot_size: u32) -> u64 {
    let avg = (price_min as f64 + price_max as f64) / 2.0;
    (avg * lot_size as f64).round() as u64
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const FULL_SEGMENT: &str = "Offer Date: Aug 4, 2025 - Aug 6, 2025\n\
        Offer Price160-170Lot Size100Exp. Premium24-25 (32%)\
        No of Apps: 4624 | 13.39 timesView Apply Check Allotment Belrise";

    #[test]
    fn full_segment_accepted() {
        let r = extract(FULL_SEGMENT).unwrap();
        assert_eq!(r.offer_price_min, Some(160));
        assert_eq!(r.offer_price_max, Some(170));
        assert_eq!(r.lot_size, Some(100));
        assert_eq!(r.subscription_times, Some(13.39));
        assert_eq!(r.expected_premium, Some(24.5));
        assert_eq!(r.premium_percentage, Some(32.0));
        assert_eq!(r.offer_start_date, NaiveDate::from_ymd_opt(2025, 8, 4));
        assert_eq!(r.offer_end_date, NaiveDate::from_ymd_opt(2025, 8, 6));
        assert_eq!(r.company_name, "Belrise");
    }

    #[test]
    fn investment_uses_band_midpoint() {
        let r = extract(FULL_SEGMENT).unwrap();
        assert_eq!(r.investment_per_lot, Some(16500));
    }

    #[test]
    fn midpoint_rounds_half_up() {
        // (54 + 55) / 2 * 3 = 163.5 → 164
        assert_eq!(investment_per_lot(54, 55, 3), 164);
    }

    #[test]
    fn missing_price_rejected() {
        let got = extract("Offer Date: Aug 4, 2025 - Aug 6, 2025\nLot Size100");
        assert_eq!(got.unwrap_err(), Rejection::MissingPrice);
    }

    #[test]
    fn missing_lot_size_rejected() {
        let got = extract("Offer Date: Aug 4, 2025 - Aug 6, 2025\nOffer Price54");
        assert_eq!(got.unwrap_err(), Rejection::MissingLotSize);
    }

    #[test]
    fn rejection_regardless_of_other_fields() {
        let seg = "Offer Date: Aug 4, 2025 - Aug 6, 2025\n\
                   Exp. Premium24-25 (32%)13.39 timesCheck Allotment Belrise";
        assert!(extract(seg).is_err());
    }

    #[test]
    fn optional_fields_absent_still_accepted() {
        let r = extract("Offer Price54Lot Size2000").unwrap();
        assert_eq!(r.offer_price_min, Some(54));
        assert_eq!(r.lot_size, Some(2000));
        assert_eq!(r.subscription_times, None);
        assert_eq!(r.expected_premium, None);
        assert_eq!(r.offer_start_date, None);
        assert_eq!(r.company_name, UNKNOWN_COMPANY);
        assert_eq!(r.investment_per_lot, Some(108_000));
    }
}
