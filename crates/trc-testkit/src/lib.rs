//! trc-testkit
//!
//! Fixture builders and temp-file helpers for cross-crate scenario tests.
//! Not part of any production build.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use trc_engine::{TradeAction, TradeRecord};

/// Fixed booking timestamp shared by every fixture trade, so record
/// equality across the sequential and partitioned paths is deterministic.
pub fn booked_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap()
}

pub fn trade(
    id: &str,
    symbol: &str,
    action: TradeAction,
    price: f64,
    quantity: f64,
) -> TradeRecord {
    TradeRecord::new(id, symbol, price, quantity, action, booked_at())
}

pub fn buy(id: &str, symbol: &str, price: f64, quantity: f64) -> TradeRecord {
    trade(id, symbol, TradeAction::Buy, price, quantity)
}

pub fn sell(id: &str, symbol: &str, price: f64, quantity: f64) -> TradeRecord {
    trade(id, symbol, TradeAction::Sell, price, quantity)
}

/// Write a feed CSV in the upstream column layout into `dir`.
pub fn write_feed_csv(dir: &Path, name: &str, trades: &[TradeRecord]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("create fixture feed failed: {}", path.display()))?;

    writer.write_record(["trade_id", "symbol", "action", "price", "quantity"])?;
    for t in trades {
        writer.write_record([
            t.trade_id.as_str(),
            t.symbol.as_str(),
            t.action.as_str(),
            &t.price.to_string(),
            &t.quantity.to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(path)
}
