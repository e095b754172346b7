//! Score an arbitrary guess against a target

use crate::LanguageSession;
use crate::core::{Feedback, Word, WordError};

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
}

/// Score `guess` against `target` without consulting the dictionary
///
/// Both words go through the same input preparation as a game.
///
/// # Errors
/// Returns `WordError` if either word is not five letters.
pub fn score_words(
    session: &LanguageSession,
    guess: &str,
    target: &str,
) -> Result<ScoreResult, WordError> {
    let guess = Word::new(session.prepare_input(guess))?;
    let target = Word::new(session.prepare_input(target))?;
    let feedback = session.score(&guess, &target);

    Ok(ScoreResult {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        feedback,
    })
}
