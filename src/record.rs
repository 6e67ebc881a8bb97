use chrono::NaiveDate;
use serde::Serialize;

/// Sentinel used when no company-name pattern matches a segment.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// One offering extracted from a listing segment. Built once per segment;
/// `investment_per_lot` is the only field assigned after construction.
#[derive(Debug, Clone, Serialize)]
pub struct OfferingRecord {
    pub company_name: String,
    pub offer_price_min: Option<u32>,
    pub offer_price_max: Option<u32>,
    pub lot_size: Option<u32>,
    pub subscription_times: Option<f64>,
    pub expected_premium: Option<f64>,
    pub premium_percentage: Option<f64>,
    pub offer_start_date: Option<NaiveDate>,
    pub offer_end_date: Option<NaiveDate>,
    pub investment_per_lot: Option<u64>,
}

impl Default for OfferingRecord {
    fn default() -> Self {
        OfferingRecord {
            company_name: UNKNOWN_COMPANY.to_string(),
            offer_price_min: None,
            offer_price_max: None,
            lot_size: None,
            subscription_times: None,
            expected_premium: None,
            premium_percentage: None,
            offer_start_date: None,
            offer_end_date: None,
            investment_per_lot: None,
        }
    }
}

/// Why a segment failed the validity gate. Returned as data so the caller
/// decides what to log; extraction itself has no output side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingPrice,
    MissingLotSize,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::MissingPrice => write!(f, "no offer price found"),
            Rejection::MissingLotSize => write!(f, "no lot size found"),
        }
    }
}
