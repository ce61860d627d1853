use std::collections::HashMap;

use tracing::warn;

use crate::TradeRecord;

/// Id-keyed view of one feed, plus the ids discarded on the way in.
#[derive(Clone, Debug, Default)]
pub struct TradeIndex {
    pub by_id: HashMap<String, TradeRecord>,
    /// Later occurrences of an already-seen id, in input order.
    pub duplicates: Vec<String>,
}

impl TradeIndex {
    pub fn get(&self, trade_id: &str) -> Option<&TradeRecord> {
        self.by_id.get(trade_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Build the id index for one feed. First occurrence wins; every later
/// occurrence is discarded, recorded, and logged. Never fatal.
pub fn index_trades(records: &[TradeRecord]) -> TradeIndex {
    let mut index = TradeIndex {
        by_id: HashMap::with_capacity(records.len()),
        duplicates: Vec::new(),
    };

    for record in records {
        if index.by_id.contains_key(&record.trade_id) {
            warn!(trade_id = %record.trade_id, "duplicate trade id, keeping first occurrence");
            index.duplicates.push(record.trade_id.clone());
        } else {
            index.by_id.insert(record.trade_id.clone(), record.clone());
        }
    }

    index
}
