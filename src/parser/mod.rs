pub mod extract;
pub mod segments;

use tracing::debug;

use crate::record::OfferingRecord;

/// Two-pass pipeline: raw page text → per-offering segments → typed records.
/// Segments that fail the validity gate are logged and skipped; one bad
/// segment never aborts the batch.
pub fn parse_listing(raw: &str) -> Vec<OfferingRecord> {
    let segments = segments::segment(raw);
    debug!("found {} candidate segments", segments.len());

    let mut records = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        match extract::extract(segment) {
            Ok(record) => {
                debug!("segment {}: accepted '{}'", i + 1, record.company_name);
                records.push(record);
            }
            Err(reason) => {
                debug!("segment {}: skipped, {}", i + 1, reason);
            }
        }
    }
    records
}

// ── Tests ──
