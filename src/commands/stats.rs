//! Statistics from a saved outcome log

use crate::stats::{OutcomeLog, StatsSnapshot, aggregate, aggregate_by_language};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// Snapshots read from a log file
#[derive(Debug, Clone, Default)]
pub struct StatsReport {
    /// All languages merged
    pub overall: StatsSnapshot,
    /// Per language code
    pub by_language: BTreeMap<String, StatsSnapshot>,
}

/// Load `path` and aggregate it, optionally restricted to one language
///
/// # Errors
/// Returns an error if the log cannot be read or parsed.
pub fn load_stats(path: &Path, language: Option<&str>) -> Result<StatsReport> {
    let log = OutcomeLog::load(path)?;
    let outcomes = match language {
        Some(code) => log.for_language(code),
        None => log.outcomes().to_vec(),
    };

    Ok(StatsReport {
        overall: aggregate(&outcomes),
        by_language: aggregate_by_language(&outcomes),
    })
}
