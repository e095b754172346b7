//! Snapshot computation over outcome logs

use super::GameOutcome;
use crate::game::MAX_ATTEMPTS;
use std::collections::BTreeMap;

/// Derived statistics for a set of games
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Consecutive wins ending at the most recent game
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Wins by number of rows used, index 0 is a first-row win
    pub distribution: [u32; MAX_ATTEMPTS],
    pub win_percentage: f64,
    /// Mean rows per game, losses included
    pub avg_attempts: f64,
}

/// Compute a snapshot from outcomes in any order
///
/// Outcomes are ordered by `played_at` before streaks are counted; ties keep
/// their log order.
///
/// # Examples
/// ```
/// use wordle_global::stats::aggregate;
///
/// let snapshot = aggregate(&[]);
/// assert_eq!(snapshot.games, 0);
/// assert_eq!(snapshot.win_percentage, 0.0);
/// ```
#[must_use]
pub fn aggregate(outcomes: &[GameOutcome]) -> StatsSnapshot {
    let mut ordered: Vec<&GameOutcome> = outcomes.iter().collect();
    ordered.sort_by_key(|outcome| outcome.played_at);

    let mut snapshot = StatsSnapshot::default();
    let mut total_attempts = 0u64;
    let mut streak = 0u32;

    for outcome in ordered {
        snapshot.games += 1;
        total_attempts += u64::from(outcome.attempts);

        if outcome.won {
            snapshot.wins += 1;
            streak += 1;
            snapshot.longest_streak = snapshot.longest_streak.max(streak);

            let row = outcome.attempts as usize;
            if (1..=MAX_ATTEMPTS).contains(&row) {
                snapshot.distribution[row - 1] += 1;
            } else {
                log::warn!(
                    "Win on '{}' with {} attempts is outside the distribution",
                    outcome.target,
                    outcome.attempts
                );
            }
        } else {
            snapshot.losses += 1;
            streak = 0;
        }
    }

    snapshot.current_streak = streak;

    if snapshot.games > 0 {
        let games = f64::from(snapshot.games);
        snapshot.win_percentage = f64::from(snapshot.wins) * 100.0 / games;
        snapshot.avg_attempts = total_attempts as f64 / games;
    }

    snapshot
}

/// One snapshot per language code
#[must_use]
pub fn aggregate_by_language(outcomes: &[GameOutcome]) -> BTreeMap<String, StatsSnapshot> {
    let mut grouped: BTreeMap<String, Vec<GameOutcome>> = BTreeMap::new();
    for outcome in outcomes {
        grouped
            .entry(outcome.language.clone())
            .or_default()
            .push(outcome.clone());
    }

    grouped
        .into_iter()
        .map(|(code, games)| {
            let snapshot = aggregate(&games);
            (code, snapshot)
        })
        .collect()
}
