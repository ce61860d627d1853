//! trc-config
//!
//! Application configuration snapshot. Loaded once at startup from an
//! optional JSON file; the engine only ever sees the read-only
//! [`ReconcileConfig`] view derived from it.
//!
//! Degradation policy: a missing or unparseable file falls back to full
//! defaults with a WARN, and a file that omits individual keys gets the
//! per-key default. Configuration problems never abort a run.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use trc_engine::ReconcileConfig;

/// Export format for the reconciliation report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportFormat {
    #[default]
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
        }
    }
}

/// Immutable configuration snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub price_tolerance: f64,
    pub quantity_tolerance: f64,
    pub case_insensitive_symbols: bool,
    pub report_format: ReportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            price_tolerance: 0.0001,
            quantity_tolerance: 0.0,
            case_insensitive_symbols: true,
            report_format: ReportFormat::Csv,
        }
    }
}

impl AppConfig {
    /// Load from a JSON file, degrading to defaults instead of failing.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), %err, "config file not readable, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => {
                debug!(path = %path.display(), "configuration loaded");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "config file not valid JSON, using defaults");
                Self::default()
            }
        }
    }

    /// The read-only view the comparator consumes.
    pub fn reconcile(&self) -> ReconcileConfig {
        ReconcileConfig {
            price_tolerance: self.price_tolerance,
            quantity_tolerance: self.quantity_tolerance,
            case_insensitive_symbols: self.case_insensitive_symbols,
        }
    }
}
