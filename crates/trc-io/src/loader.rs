//! Trade feed CSV loader.
//!
//! Expected columns: `trade_id,symbol,action,price,quantity`.
//!
//! Row policy: a malformed row (unparseable numbers, unknown action, empty
//! trade id) is skipped with a WARN and counted, never aborts the load. An
//! unreadable file is a hard error.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use trc_engine::{TradeAction, TradeRecord};

#[derive(Debug, Deserialize)]
struct RawTrade {
    trade_id: String,
    symbol: String,
    action: String,
    price: f64,
    quantity: f64,
}

fn parse_action(raw: &str) -> Option<TradeAction> {
    if raw.eq_ignore_ascii_case("BUY") {
        Some(TradeAction::Buy)
    } else if raw.eq_ignore_ascii_case("SELL") {
        Some(TradeAction::Sell)
    } else {
        None
    }
}

/// Load one feed from a CSV file, skipping malformed rows.
pub fn load_trades(path: impl AsRef<Path>) -> Result<Vec<TradeRecord>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("open trade feed failed: {}", path.display()))?;

    let loaded_at = Utc::now();
    let mut trades = Vec::new();
    let mut skipped = 0usize;

    for (row, record) in reader.deserialize::<RawTrade>().enumerate() {
        // Header is line 1; data rows start at line 2.
        let line = row + 2;

        let raw = match record {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), line, %err, "skipping malformed row");
                skipped += 1;
                continue;
            }
        };

        if raw.trade_id.is_empty() {
            warn!(path = %path.display(), line, "skipping row with empty trade id");
            skipped += 1;
            continue;
        }

        let Some(action) = parse_action(&raw.action) else {
            warn!(path = %path.display(), line, action = %raw.action, "skipping row with unknown action");
            skipped += 1;
            continue;
        };

        trades.push(TradeRecord::new(
            raw.trade_id,
            raw.symbol,
            raw.price,
            raw.quantity,
            action,
            loaded_at,
        ));
    }

    info!(path = %path.display(), loaded = trades.len(), skipped, "trade feed loaded");
    Ok(trades)
}
