//! Game statistics
//!
//! Completed games are appended to an [`OutcomeLog`]; every figure in a
//! [`StatsSnapshot`] is recomputed from the log on demand.

mod aggregate;

pub use aggregate::{StatsSnapshot, aggregate, aggregate_by_language};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Record of one completed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub language: String,
    pub target: String,
    pub won: bool,
    /// Rows used; a loss records every available row
    pub attempts: u32,
    pub played_at: DateTime<Utc>,
}

/// Append-only list of game outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeLog {
    outcomes: Vec<GameOutcome>,
}

impl OutcomeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, outcome: GameOutcome) {
        self.outcomes.push(outcome);
    }

    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[GameOutcome] {
        &self.outcomes
    }

    /// Outcomes for one language, in log order
    #[must_use]
    pub fn for_language(&self, code: &str) -> Vec<GameOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.language == code)
            .cloned()
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Read a JSON log; a missing file is an empty log
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No outcome log at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read outcome log {}", path.display()))?;
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse outcome log {}", path.display()))
    }

    /// Write the log as pretty JSON
    ///
    /// The JSON goes to a sibling `.tmp` file that is then renamed over
    /// `path`, so an interrupted write leaves the previous log intact.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize outcome log")?;
        let tmp = temp_path(path);
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write outcome log {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("Failed to replace outcome log {}", path.display()))?;
        log::debug!("Saved {} outcomes to {}", self.len(), path.display());
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn outcome(language: &str, won: bool, attempts: u32, day: u32) -> GameOutcome {
        GameOutcome {
            language: language.to_string(),
            target: "crane".to_string(),
            won,
            attempts,
            played_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn append_and_filter() {
        let mut log = OutcomeLog::new();
        assert!(log.is_empty());

        log.append(outcome("en", true, 3, 1));
        log.append(outcome("de", false, 6, 2));
        log.append(outcome("en", true, 4, 3));

        assert_eq!(log.len(), 3);
        assert_eq!(log.for_language("en").len(), 2);
        assert_eq!(log.for_language("de")[0].attempts, 6);
        assert!(log.for_language("fr").is_empty());
    }

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir().join(format!("wordle_outcomes_{}.json", std::process::id()));

        let mut log = OutcomeLog::new();
        log.append(outcome("he", true, 2, 5));
        log.save(&path).unwrap();

        let loaded = OutcomeLog::load(&path).unwrap();
        assert_eq!(loaded, log);

        fs::remove_file(&path).unwrap();
        assert!(OutcomeLog::load(&path).unwrap().is_empty());
    }

    #[test]
    fn save_replaces_log_without_leftovers() {
        let path = std::env::temp_dir().join(format!("wordle_replace_{}.json", std::process::id()));
        fs::write(&path, "[]").unwrap();

        let mut log = OutcomeLog::new();
        log.append(outcome("en", true, 3, 1));
        log.save(&path).unwrap();
        log.append(outcome("el", false, 6, 2));
        log.save(&path).unwrap();

        assert!(!temp_path(&path).exists());
        assert_eq!(
            temp_path(&path).file_name().unwrap().to_string_lossy(),
            format!("wordle_replace_{}.json.tmp", std::process::id())
        );
        assert_eq!(OutcomeLog::load(&path).unwrap(), log);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn log_is_a_json_array() {
        let mut log = OutcomeLog::new();
        log.append(outcome("en", true, 1, 1));
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"language\":\"en\""));
    }
}
