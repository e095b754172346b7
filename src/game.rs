//! Single game controller
//!
//! Drives one puzzle: each submission is validated against the session's
//! dictionary, scored against the target, and folded into the keyboard
//! state before the next row opens.

use crate::LanguageSession;
use crate::core::{Feedback, KeyboardState, Word, WordError};
use crate::stats::GameOutcome;
use chrono::{DateTime, Utc};
use std::fmt;

/// Rows available per game
pub const MAX_ATTEMPTS: usize = 6;

/// One submitted and scored row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAttempt {
    word: Word,
    feedback: Feedback,
}

impl GuessAttempt {
    /// The accepted (canonical) spelling of the guess
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Reasons a submission does not advance the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Wrong length or non-letter input
    InvalidWord(WordError),
    /// Not in the dictionary, even under normalization
    NotInWordList(String),
    /// The game is already won or lost
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::NotInWordList(word) => write!(f, "'{word}' is not a valid word"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// State of one puzzle in progress
#[derive(Debug, Clone)]
pub struct Game<'a> {
    session: &'a LanguageSession,
    target: Word,
    attempts: Vec<GuessAttempt>,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl<'a> Game<'a> {
    #[must_use]
    pub fn new(session: &'a LanguageSession, target: Word) -> Self {
        Self {
            session,
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Submit a row
    ///
    /// The input is checked against the dictionary and replaced by its
    /// canonical spelling before scoring, so typing `grune` submits `grüne`.
    ///
    /// # Errors
    /// Returns `GuessError` when the game is over, the input is not a
    /// five-letter word, or the word is not accepted by the dictionary. None
    /// of these consume an attempt.
    ///
    /// # Examples
    /// ```
    /// use wordle_global::{Game, GameStatus, LanguageSession};
    /// use wordle_global::core::{LanguageRules, Word};
    /// use wordle_global::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(vec!["slate".into(), "crane".into()], vec![]);
    /// let session = LanguageSession::new("en", LanguageRules::new(), dictionary);
    /// let mut game = Game::new(&session, Word::new("slate").unwrap());
    ///
    /// assert!(game.submit("xxxxx").is_err());
    /// game.submit("crane").unwrap();
    /// game.submit("slate").unwrap();
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<&GuessAttempt, GuessError> {
        if self.status != GameStatus::InProgress {
            return Err(GuessError::GameOver);
        }

        let typed = Word::new(self.session.prepare_input(input))?;
        let canonical = self
            .session
            .check_word(typed.text())
            .ok_or_else(|| GuessError::NotInWordList(typed.text().to_string()))?;

        // Any-word mode and odd dictionary entries may not form a valid Word
        let word = Word::new(&canonical).unwrap_or(typed);
        let feedback = self.session.score(&word, &self.target);

        self.keyboard
            .merge_row(&word, &feedback, self.session.normalization());

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.attempts.len() + 1 >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        log::debug!(
            "[{}] row {}: {} {}",
            self.session.code(),
            self.attempts.len() + 1,
            word,
            feedback
        );

        self.attempts.push(GuessAttempt { word, feedback });
        Ok(&self.attempts[self.attempts.len() - 1])
    }

    /// Completed-game record, `None` while the game is in progress
    #[must_use]
    pub fn outcome(&self, played_at: DateTime<Utc>) -> Option<GameOutcome> {
        let won = match self.status {
            GameStatus::InProgress => return None,
            GameStatus::Won => true,
            GameStatus::Lost => false,
        };

        Some(GameOutcome {
            language: self.session.code().to_string(),
            target: self.target.text().to_string(),
            won,
            attempts: self.attempts.len() as u32,
            played_at,
        })
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[GuessAttempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &LanguageSession {
        self.session
    }

    /// Rows left before the game is lost
    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Share grid: one emoji row per attempt
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.attempts
            .iter()
            .map(|attempt| attempt.feedback.to_emoji())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
