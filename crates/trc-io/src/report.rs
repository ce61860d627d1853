//! Reconciliation report CSV writer.
//!
//! One row per [`MatchResult`]; absent-side fields render as empty strings
//! and the difference list is semicolon-joined into a single column.

use std::path::Path;

use anyhow::{Context, Result};
use trc_engine::{MatchResult, TradeRecord};

pub const REPORT_HEADER: [&str; 11] = [
    "TradeID",
    "Status",
    "SymbolA",
    "ActionA",
    "PriceA",
    "QuantityA",
    "SymbolB",
    "ActionB",
    "PriceB",
    "QuantityB",
    "Differences",
];

fn side_fields(record: Option<&TradeRecord>) -> [String; 4] {
    match record {
        Some(r) => [
            r.symbol.clone(),
            r.action.as_str().to_string(),
            r.price.to_string(),
            r.quantity.to_string(),
        ],
        None => [String::new(), String::new(), String::new(), String::new()],
    }
}

/// Write the full result collection to `path` as CSV.
pub fn write_results_csv(path: impl AsRef<Path>, results: &[MatchResult]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create report file failed: {}", path.display()))?;

    writer
        .write_record(REPORT_HEADER)
        .context("write report header failed")?;

    for result in results {
        let a = side_fields(result.record_a.as_ref());
        let b = side_fields(result.record_b.as_ref());

        let mut row = Vec::with_capacity(REPORT_HEADER.len());
        row.push(result.trade_id.clone());
        row.push(result.status.as_str().to_string());
        row.extend(a);
        row.extend(b);
        row.push(result.differences.join(";"));

        writer
            .write_record(&row)
            .with_context(|| format!("write report row failed: {}", result.trade_id))?;
    }

    writer.flush().context("flush report failed")?;
    Ok(())
}
