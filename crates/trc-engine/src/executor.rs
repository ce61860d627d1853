use std::thread;

use tracing::error;

use crate::matcher::{classify_trade, key_union};
use crate::{
    index_trades, EngineError, MatchResult, PartitionFailure, ReconcileConfig, ReconcileReport,
    TradeIndex, TradeRecord,
};

/// Fault-injection hook: a worker that encounters this id panics. Lets the
/// partition-failure path be exercised from black-box tests without touching
/// production classification.
#[cfg(feature = "testkit")]
pub const POISON_TRADE_ID: &str = "__TRC_POISON__";

/// Partitioned reconciliation: same per-id semantics as [`crate::reconcile`],
/// fanned out over `workers` threads.
///
/// The id union is split into ceil(|union| / workers)-sized chunks (so at
/// most `workers` chunks, the last possibly short) and each chunk is
/// classified on its own scoped thread against the shared read-only indexes.
/// Workers share no mutable state; partial results are concatenated on the
/// calling thread after all workers have been joined.
///
/// A worker panic loses only that worker's chunk: the chunk is recorded in
/// `failed_partitions` with the ids that went unclassified, and every other
/// partition still contributes its results.
pub fn reconcile_parallel(
    records_a: &[TradeRecord],
    records_b: &[TradeRecord],
    cfg: &ReconcileConfig,
    workers: usize,
) -> Result<ReconcileReport, EngineError> {
    if workers == 0 {
        return Err(EngineError::InvalidWorkerCount(workers));
    }

    let index_a = index_trades(records_a);
    let index_b = index_trades(records_b);
    let union = key_union(&index_a, &index_b);

    let chunk_size = union.len().div_ceil(workers).max(1);
    let chunks: Vec<&[String]> = union.chunks(chunk_size).collect();

    let mut results = Vec::with_capacity(union.len());
    let mut failed_partitions = Vec::new();

    thread::scope(|scope| {
        let index_a_ref = &index_a;
        let index_b_ref = &index_b;

        let handles: Vec<_> = chunks
            .iter()
            .map(|&chunk| scope.spawn(move || classify_chunk(chunk, index_a_ref, index_b_ref, cfg)))
            .collect();

        for (partition, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(partial) => results.extend(partial),
                Err(_) => {
                    error!(partition, "partition worker panicked, its chunk is unclassified");
                    failed_partitions.push(PartitionFailure {
                        partition,
                        trade_ids: chunks[partition].to_vec(),
                    });
                }
            }
        }
    });

    Ok(ReconcileReport {
        results,
        duplicates_a: index_a.duplicates,
        duplicates_b: index_b.duplicates,
        failed_partitions,
    })
}

fn classify_chunk(
    chunk: &[String],
    index_a: &TradeIndex,
    index_b: &TradeIndex,
    cfg: &ReconcileConfig,
) -> Vec<MatchResult> {
    let mut partial = Vec::with_capacity(chunk.len());
    for trade_id in chunk {
        #[cfg(feature = "testkit")]
        if trade_id.as_str() == POISON_TRADE_ID {
            panic!("injected partition fault at {trade_id}");
        }

        partial.push(classify_trade(trade_id, index_a, index_b, cfg));
    }
    partial
}
