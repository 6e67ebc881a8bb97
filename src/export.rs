use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::record::OfferingRecord;

/// Write accepted records as CSV, one row per offering, headers from the
/// record's field names.
pub fn write_csv(path: &Path, records: &[OfferingRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file '{}'", path.display()))?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

// ── Tests ──
