//! Formatting utilities for terminal output

use crate::core::KeyHint;
use crate::game::{Game, GameStatus, MAX_ATTEMPTS};

/// Shareable result text: header line, blank line, one emoji row per guess
///
/// A lost game is reported as `X/6`.
#[must_use]
pub fn share_text(game: &Game<'_>) -> String {
    let score = match game.status() {
        GameStatus::Won => game.attempts().len().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };
    format!(
        "Wordle {} {score}/{MAX_ATTEMPTS}\n\n{}",
        game.session().code(),
        game.share_grid()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Key label with its diacritic hint, e.g. `u(ü)` or `a^(àáâãä…)`
#[must_use]
pub fn key_label(key: char, hint: Option<&KeyHint>) -> String {
    match hint {
        Some(hint) if hint.above => format!("{key}^({})", hint.text),
        Some(hint) => format!("{key}({})", hint.text),
        None => key.to_string(),
    }
}
