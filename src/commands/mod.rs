//! Command implementations

pub mod audit;
pub mod check;
pub mod play;
pub mod score;
pub mod stats;

pub use audit::{AuditSummary, run_audit};
pub use check::{CheckResult, check_word};
pub use play::{PlayConfig, pick_target, play_game, run_play};
pub use score::{ScoreResult, score_words};
pub use stats::{StatsReport, load_stats};
