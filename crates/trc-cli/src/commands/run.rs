//! `trc run` handler: config -> load feeds -> reconcile -> print/export.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};
use trc_config::{AppConfig, ReportFormat};
use trc_engine::{reconcile, reconcile_parallel, ReconcileReport};
use trc_io::{load_trades, write_results_csv};

#[derive(Args)]
pub struct RunArgs {
    /// System A trade feed (CSV)
    #[arg(long = "system-a")]
    pub system_a: PathBuf,

    /// System B trade feed (CSV)
    #[arg(long = "system-b")]
    pub system_b: PathBuf,

    /// Worker count for the partitioned path; omit to run sequentially
    #[arg(long)]
    pub workers: Option<usize>,

    /// Write the report to this file instead of printing to stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// JSON config file (tolerances, symbol case policy, report format)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print per-status counts after the run
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path),
        None => AppConfig::default(),
    };
    let engine_cfg = config.reconcile();

    let system_a = load_trades(&args.system_a)?;
    let system_b = load_trades(&args.system_b)?;

    let report = match args.workers {
        Some(workers) => reconcile_parallel(&system_a, &system_b, &engine_cfg, workers)
            .context("partitioned reconciliation rejected")?,
        None => reconcile(&system_a, &system_b, &engine_cfg),
    };

    warn_on_data_quality(&report);

    match &args.output {
        Some(path) => {
            match config.report_format {
                ReportFormat::Csv => write_results_csv(path, &report.results)?,
            }
            info!(
                path = %path.display(),
                format = config.report_format.as_str(),
                results = report.results.len(),
                "report exported"
            );
        }
        None => {
            for result in &report.results {
                println!("{result}");
            }
        }
    }

    if args.summary {
        print_summary(&report);
    }

    Ok(())
}

fn warn_on_data_quality(report: &ReconcileReport) {
    if !report.duplicates_a.is_empty() {
        warn!(
            count = report.duplicates_a.len(),
            "duplicate trade ids discarded in system A"
        );
    }
    if !report.duplicates_b.is_empty() {
        warn!(
            count = report.duplicates_b.len(),
            "duplicate trade ids discarded in system B"
        );
    }
    for failure in &report.failed_partitions {
        warn!(
            partition = failure.partition,
            unclassified = failure.trade_ids.len(),
            "partition worker failed, its trades were not classified"
        );
    }
}

fn print_summary(report: &ReconcileReport) {
    println!("Summary:");
    for (status, count) in report.counts_by_status() {
        println!("  {status}: {count}");
    }
    if !report.is_complete() {
        println!("  failed partitions: {}", report.failed_partitions.len());
    }
}
