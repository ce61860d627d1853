use std::collections::BTreeSet;

use crate::{
    diff_trades, index_trades, MatchResult, ReconcileConfig, ReconcileReport, TradeIndex,
    TradeRecord,
};

/// Union of both feeds' ids, in stable (sorted) iteration order so that the
/// sequential and partitioned paths walk the same sequence.
pub(crate) fn key_union(index_a: &TradeIndex, index_b: &TradeIndex) -> Vec<String> {
    let mut union: BTreeSet<&str> = BTreeSet::new();
    for trade_id in index_a.by_id.keys() {
        union.insert(trade_id);
    }
    for trade_id in index_b.by_id.keys() {
        union.insert(trade_id);
    }
    union.into_iter().map(str::to_string).collect()
}

/// Classify one id against both indexes.
pub(crate) fn classify_trade(
    trade_id: &str,
    index_a: &TradeIndex,
    index_b: &TradeIndex,
    cfg: &ReconcileConfig,
) -> MatchResult {
    match (index_a.get(trade_id), index_b.get(trade_id)) {
        (Some(a), Some(b)) => {
            let differences = diff_trades(a, b, cfg);
            if differences.is_empty() {
                MatchResult::matched(trade_id, a.clone(), b.clone())
            } else {
                MatchResult::mismatched(trade_id, a.clone(), b.clone(), differences)
            }
        }
        (None, Some(b)) => MatchResult::missing_in_a(trade_id, b.clone()),
        (Some(a), None) => MatchResult::missing_in_b(trade_id, a.clone()),
        // Ids only ever come from the union of the two indexes.
        (None, None) => unreachable!("trade id {trade_id} absent from both indexes"),
    }
}

/// Sequential reconciliation: index both feeds, walk the id union once,
/// classify every id independently.
pub fn reconcile(
    records_a: &[TradeRecord],
    records_b: &[TradeRecord],
    cfg: &ReconcileConfig,
) -> ReconcileReport {
    let index_a = index_trades(records_a);
    let index_b = index_trades(records_b);

    let union = key_union(&index_a, &index_b);
    let mut results = Vec::with_capacity(union.len());
    for trade_id in &union {
        results.push(classify_trade(trade_id, &index_a, &index_b, cfg));
    }

    ReconcileReport {
        results,
        duplicates_a: index_a.duplicates,
        duplicates_b: index_b.duplicates,
        failed_partitions: Vec::new(),
    }
}
