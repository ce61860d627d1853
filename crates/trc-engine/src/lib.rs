//! trc-engine
//!
//! Reconciliation engine for two trade feeds keyed by trade id.
//!
//! Architectural decisions:
//! - Duplicate ids within one feed never abort a run: first occurrence wins,
//!   later ones are discarded and reported.
//! - Every id in the union of both feeds yields exactly one result.
//! - A feed missing an id yields the fixed four-line missing block, not a
//!   per-field diff against the present side.
//! - The parallel path is a blocking fork-join over id chunks and must agree
//!   with the sequential path as a set.
//! - A faulted partition loses only its own chunk; the loss is recorded on
//!   the report, never silent.
//!
//! Deterministic, pure logic. No IO. No clocks.

mod compare;
mod executor;
mod index;
mod matcher;
mod types;

pub use compare::{diff_trades, missing_differences};
pub use executor::reconcile_parallel;
pub use index::{index_trades, TradeIndex};
pub use matcher::reconcile;
pub use types::*;

#[cfg(feature = "testkit")]
pub use executor::POISON_TRADE_ID;
