use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Buy/sell side of a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    /// Wire name as the feeds spell it.
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "BUY",
            TradeAction::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One booking entry from either system of record.
///
/// Identity for reconciliation purposes is `trade_id` alone; the remaining
/// fields are payload. `booked_at` is informational and never compared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub trade_id: String,
    pub symbol: String,
    pub price: f64,
    pub quantity: f64,
    pub action: TradeAction,
    pub booked_at: DateTime<Utc>,
}

impl TradeRecord {
    pub fn new(
        trade_id: impl Into<String>,
        symbol: impl Into<String>,
        price: f64,
        quantity: f64,
        action: TradeAction,
        booked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            trade_id: trade_id.into(),
            symbol: symbol.into(),
            price,
            quantity,
            action,
            booked_at,
        }
    }
}

/// Outcome classification for one trade id. Closed set: no other states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchStatus {
    Matched,
    Mismatched,
    MissingInA,
    MissingInB,
}

impl MatchStatus {
    /// Report name, stable across console and CSV output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Matched => "MATCHED",
            MatchStatus::Mismatched => "MISMATCHED",
            MatchStatus::MissingInA => "MISSING_IN_A",
            MatchStatus::MissingInB => "MISSING_IN_B",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-id reconciliation outcome.
///
/// Side presence is tied to status: `record_a` is `None` iff `MissingInA`,
/// `record_b` is `None` iff `MissingInB`, both present otherwise. The
/// constructors below are the only way results are built, which keeps that
/// invariant out of reach of callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub status: MatchStatus,
    pub trade_id: String,
    pub record_a: Option<TradeRecord>,
    pub record_b: Option<TradeRecord>,
    /// Insertion order = check order (action, symbol, price, quantity).
    /// Empty iff `Matched`.
    pub differences: Vec<String>,
}

impl MatchResult {
    pub fn matched(trade_id: impl Into<String>, record_a: TradeRecord, record_b: TradeRecord) -> Self {
        Self {
            status: MatchStatus::Matched,
            trade_id: trade_id.into(),
            record_a: Some(record_a),
            record_b: Some(record_b),
            differences: Vec::new(),
        }
    }

    pub fn mismatched(
        trade_id: impl Into<String>,
        record_a: TradeRecord,
        record_b: TradeRecord,
        differences: Vec<String>,
    ) -> Self {
        Self {
            status: MatchStatus::Mismatched,
            trade_id: trade_id.into(),
            record_a: Some(record_a),
            record_b: Some(record_b),
            differences,
        }
    }

    pub fn missing_in_a(trade_id: impl Into<String>, record_b: TradeRecord) -> Self {
        Self {
            status: MatchStatus::MissingInA,
            trade_id: trade_id.into(),
            record_a: None,
            record_b: Some(record_b),
            differences: crate::compare::missing_differences(),
        }
    }

    pub fn missing_in_b(trade_id: impl Into<String>, record_a: TradeRecord) -> Self {
        Self {
            status: MatchStatus::MissingInB,
            trade_id: trade_id.into(),
            record_a: Some(record_a),
            record_b: None,
            differences: crate::compare::missing_differences(),
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.trade_id, self.status)?;
        if !self.differences.is_empty() {
            write!(f, ": {}", self.differences.join("; "))?;
        }
        Ok(())
    }
}

/// Tolerances and symbol case policy read by the comparator. Never written
/// during a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    pub price_tolerance: f64,
    pub quantity_tolerance: f64,
    pub case_insensitive_symbols: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            price_tolerance: 0.0001,
            quantity_tolerance: 0.0,
            case_insensitive_symbols: true,
        }
    }
}

/// One partition whose worker faulted. Its results are lost; the ids tell
/// the caller exactly which trades went unclassified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionFailure {
    pub partition: usize,
    pub trade_ids: Vec<String>,
}

/// Full reconciliation outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// One entry per classified id in the union of both feeds.
    pub results: Vec<MatchResult>,
    /// Ids discarded by first-wins deduplication, per side, in input order.
    pub duplicates_a: Vec<String>,
    pub duplicates_b: Vec<String>,
    /// Partitions lost to worker faults. Always empty on the sequential path.
    pub failed_partitions: Vec<PartitionFailure>,
}

impl ReconcileReport {
    /// True when every id in the union was classified.
    pub fn is_complete(&self) -> bool {
        self.failed_partitions.is_empty()
    }

    /// Result count per status, in status order.
    pub fn counts_by_status(&self) -> [(MatchStatus, usize); 4] {
        let mut counts = [
            (MatchStatus::Matched, 0),
            (MatchStatus::Mismatched, 0),
            (MatchStatus::MissingInA, 0),
            (MatchStatus::MissingInB, 0),
        ];
        for result in &self.results {
            for slot in counts.iter_mut() {
                if slot.0 == result.status {
                    slot.1 += 1;
                }
            }
        }
        counts
    }
}

/// Structural misuse of the engine API. Small, explicit, test-friendly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The parallel path needs at least one worker.
    InvalidWorkerCount(usize),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidWorkerCount(n) => {
                write!(f, "invalid worker count: {} (must be >= 1)", n)
            }
        }
    }
}

impl std::error::Error for EngineError {}
