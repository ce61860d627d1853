//! trc-io
//!
//! CSV boundary of the reconciliation pipeline: feed ingestion on the way
//! in, report export on the way out. The engine itself never touches raw
//! text.

mod loader;
mod report;

pub use loader::load_trades;
pub use report::{write_results_csv, REPORT_HEADER};
